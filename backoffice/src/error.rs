//! Back-office error types

use pos_client::ClientError;
use shared::GENERIC_ERROR_MESSAGE;
use shared::settlement::PaymentError;
use shared::validation::{FieldErrors, MSG_FORM_INVALID};
use thiserror::Error;

/// Error of a back-office or cash-desk action
#[derive(Debug, Error)]
pub enum BackofficeError {
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("Payment rejected: {0}")]
    Payment(#[from] PaymentError),

    #[error("No open shift")]
    NoActiveShift,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackofficeError {
    /// Text for the inline error area of the screen that failed
    pub fn user_message(&self) -> String {
        match self {
            Self::Client(e) => e.user_message(),
            Self::Validation(_) => MSG_FORM_INVALID.to_string(),
            Self::Payment(e) => e.to_string(),
            Self::NoActiveShift => "Смена не открыта".to_string(),
            Self::NotAuthenticated => "Требуется вход по PIN-коду".to_string(),
            Self::Config(_) | Self::Io(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

pub type BackofficeResult<T> = Result<T, BackofficeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let mut errors = FieldErrors::new();
        errors.add("name", "Обязательное поле");
        assert_eq!(BackofficeError::Validation(errors).user_message(), MSG_FORM_INVALID);

        let err = BackofficeError::from(PaymentError::NoParts);
        assert_eq!(err.user_message(), "Добавьте способ оплаты");

        let err = BackofficeError::Config("bad url".into());
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }
}
