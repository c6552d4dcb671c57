//! Unified error system
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes shared with the backend
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorBody`]: error body as sent by the backend, parsed leniently
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Shift errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Catalog & inventory errors
//! - 7xxx: Table errors
//! - 8xxx: Marketing & customer errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::validation("Invalid email format").with_detail("field", "email");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody, GENERIC_ERROR_MESSAGE};
