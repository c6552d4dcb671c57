//! Cash desk screens
//!
//! State behind the POS app: PIN login, the cashier's shift, the floor
//! plan with its open orders, and paying an order.

mod floor;
mod payment;
mod pin_pad;
mod shift;

pub use floor::FloorView;
pub use payment::PaymentFlow;
pub use pin_pad::{PIN_MAX_LEN, PinPad};
pub use shift::ShiftSession;

use shared::validation::FieldErrors;

use crate::BackofficeError;

/// Single-field validation failure
pub(crate) fn field_error(field: &str, message: String) -> BackofficeError {
    let mut errors = FieldErrors::new();
    errors.add(field, message);
    BackofficeError::Validation(errors)
}
