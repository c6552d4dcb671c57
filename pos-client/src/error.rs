//! Client error types

use http::StatusCode;
use shared::error::{ErrorBody, ErrorCode, GENERIC_ERROR_MESSAGE};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 401 from the backend
    #[error("Authentication required")]
    Unauthorized(ErrorBody),

    /// 403 from the backend
    #[error("Permission denied")]
    Forbidden(ErrorBody),

    /// 404 from the backend
    #[error("Not found")]
    NotFound(ErrorBody),

    /// 400 / 409 / 422 from the backend
    #[error("Request rejected ({status})")]
    Rejected { status: StatusCode, body: ErrorBody },

    /// Any other non-success status
    #[error("Server error ({status})")]
    Server { status: StatusCode, body: ErrorBody },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Client misconfiguration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Classify a failed response by status
    pub fn from_status(status: StatusCode, body: ErrorBody) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(body),
            StatusCode::FORBIDDEN => Self::Forbidden(body),
            StatusCode::NOT_FOUND => Self::NotFound(body),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                Self::Rejected { status, body }
            }
            _ => Self::Server { status, body },
        }
    }

    /// Error body sent by the server, if the request got that far
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            Self::Unauthorized(body) | Self::Forbidden(body) | Self::NotFound(body) => Some(body),
            Self::Rejected { body, .. } | Self::Server { body, .. } => Some(body),
            _ => None,
        }
    }

    /// HTTP status of the failed response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Unauthorized(_) => Some(StatusCode::UNAUTHORIZED),
            Self::Forbidden(_) => Some(StatusCode::FORBIDDEN),
            Self::NotFound(_) => Some(StatusCode::NOT_FOUND),
            Self::Rejected { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Typed error code: the server's own code when it sent one,
    /// otherwise derived from the HTTP status
    pub fn error_code(&self) -> ErrorCode {
        if let Some(code) = self.body().and_then(ErrorBody::error_code) {
            return code;
        }
        match self {
            Self::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            Self::Http(_) => ErrorCode::NetworkError,
            Self::InvalidResponse(_) | Self::Serialization(_) => ErrorCode::InvalidFormat,
            Self::Config(_) => ErrorCode::ConfigError,
            _ => self
                .status()
                .map_or(ErrorCode::Unknown, ErrorCode::from_http_status),
        }
    }

    /// Text to show inline in a form: the server's `error` or `message`
    /// field when present, otherwise the generic message
    pub fn user_message(&self) -> String {
        self.body()
            .and_then(ErrorBody::server_message)
            .unwrap_or(GENERIC_ERROR_MESSAGE)
            .to_string()
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn body(json: &str) -> ErrorBody {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_user_message_prefers_error_field() {
        let err = ClientError::from_status(
            StatusCode::BAD_REQUEST,
            body(r#"{"error": "Склад не пуст", "message": "Bad Request"}"#),
        );
        assert_eq!(err.user_message(), "Склад не пуст");
    }

    #[test]
    fn test_user_message_falls_back_to_message() {
        let err = ClientError::from_status(
            StatusCode::CONFLICT,
            body(r#"{"error": "  ", "message": "Телефон уже используется"}"#),
        );
        assert_eq!(err.user_message(), "Телефон уже используется");
    }

    #[test]
    fn test_user_message_generic() {
        let err = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::default());
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);

        let err = ClientError::InvalidResponse("eof".into());
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_classification() {
        assert!(ClientError::from_status(StatusCode::NOT_FOUND, ErrorBody::default()).is_not_found());
        assert!(ClientError::from_status(StatusCode::UNAUTHORIZED, ErrorBody::default()).is_unauthorized());
        assert!(matches!(
            ClientError::from_status(StatusCode::UNPROCESSABLE_ENTITY, ErrorBody::default()),
            ClientError::Rejected { .. }
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_GATEWAY, ErrorBody::default()),
            ClientError::Server { .. }
        ));
    }

    #[test]
    fn test_error_code() {
        let err = ClientError::from_status(StatusCode::CONFLICT, body(r#"{"code": 3002}"#));
        assert_eq!(err.error_code(), ErrorCode::ShiftAlreadyOpen);

        let err = ClientError::from_status(StatusCode::FORBIDDEN, ErrorBody::default());
        assert_eq!(err.error_code(), ErrorCode::PermissionDenied);
    }
}
