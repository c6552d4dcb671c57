use pos_client::{HttpClient, PosClient};
use shared::models::UserInfo;
use shared::validation;

use super::field_error;
use crate::BackofficeResult;

/// Longest PIN the pad accepts
pub const PIN_MAX_LEN: usize = 6;

/// On-screen PIN keypad of the cash desk
#[derive(Debug, Clone, Default)]
pub struct PinPad {
    digits: String,
    error: Option<String>,
}

impl PinPad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit; non-digits and presses past [`PIN_MAX_LEN`] are
    /// ignored. Returns whether the digit was taken.
    pub fn press(&mut self, key: char) -> bool {
        if !key.is_ascii_digit() || self.digits.len() >= PIN_MAX_LEN {
            return false;
        }
        self.digits.push(key);
        self.error = None;
        true
    }

    pub fn backspace(&mut self) {
        self.digits.pop();
    }

    pub fn clear(&mut self) {
        self.digits.clear();
        self.error = None;
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// One dot per entered digit
    pub fn masked(&self) -> String {
        "•".repeat(self.digits.len())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Log in with the entered PIN. The pad is emptied whatever the outcome.
    pub async fn login<H: HttpClient>(&mut self, client: &mut PosClient<H>) -> BackofficeResult<UserInfo> {
        let pin = std::mem::take(&mut self.digits);
        if let Err(message) = validation::pin(&pin) {
            self.error = Some(message.clone());
            return Err(field_error("pin", message));
        }
        match client.pin_login(&pin).await {
            Ok(login) => {
                tracing::info!(user_id = login.user.id, role = ?login.user.role, "PIN login");
                self.error = None;
                Ok(login.user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "PIN login failed");
                self.error = Some(e.user_message());
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_entry() {
        let mut pad = PinPad::new();
        for key in "12a34".chars() {
            pad.press(key);
        }
        assert_eq!(pad.len(), 4);
        assert_eq!(pad.masked(), "••••");

        pad.backspace();
        assert_eq!(pad.len(), 3);
        pad.clear();
        assert!(pad.is_empty());
        pad.backspace();
        assert!(pad.is_empty());
    }

    #[test]
    fn test_max_length() {
        let mut pad = PinPad::new();
        for key in "123456".chars() {
            assert!(pad.press(key));
        }
        assert!(!pad.press('7'));
        assert_eq!(pad.len(), PIN_MAX_LEN);
    }
}
