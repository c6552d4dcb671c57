//! Unified error codes for the back-office and POS clients
//!
//! Codes mirror the backend's numeric error codes so that an error body
//! received over HTTP can be classified without string matching.
//! Error codes are organized by category:
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

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (PIN or password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is disabled
    AccountDisabled = 1007,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 3xxx: Shift ====================
    /// No open shift for the current cashier
    ShiftNotOpen = 3001,
    /// Cashier already has an open shift
    ShiftAlreadyOpen = 3002,
    /// Shift not found
    ShiftNotFound = 3003,
    /// Shift has unpaid orders and cannot be closed
    ShiftHasOpenOrders = 3004,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has already been paid
    OrderAlreadyPaid = 4002,
    /// Order has been cancelled
    OrderCancelled = 4004,
    /// Order is empty
    OrderEmpty = 4007,

    // ==================== 5xxx: Payment ====================
    /// Payment processing failed
    PaymentFailed = 5001,
    /// Insufficient payment amount
    PaymentInsufficientAmount = 5002,
    /// Invalid payment method
    PaymentInvalidMethod = 5003,
    /// Paid amount exceeds order total
    PaymentExceedsTotal = 5004,

    // ==================== 6xxx: Catalog & Inventory ====================
    /// Ingredient not found
    IngredientNotFound = 6001,
    /// Ingredient is used by technical cards
    IngredientInUse = 6002,
    /// Technical card not found
    TechnicalCardNotFound = 6101,
    /// Supplier not found
    SupplierNotFound = 6201,
    /// Warehouse not found
    WarehouseNotFound = 6301,
    /// Warehouse still holds stock
    WarehouseNotEmpty = 6302,
    /// Not enough stock for a write-off
    InsufficientStock = 6401,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table is occupied
    TableOccupied = 7002,
    /// Room not found
    RoomNotFound = 7101,

    // ==================== 8xxx: Marketing & Customers ====================
    /// Customer not found
    CustomerNotFound = 8001,
    /// Customer phone already registered
    CustomerPhoneExists = 8002,
    /// Customer group not found
    CustomerGroupNotFound = 8101,
    /// Customer group has customers
    CustomerGroupInUse = 8102,
    /// Loyalty program not found
    LoyaltyProgramNotFound = 8201,
    /// Promotion not found
    PromotionNotFound = 8301,
    /// Transaction not found
    TransactionNotFound = 8401,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid PIN or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::AccountDisabled => "Account is disabled",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Administrator role is required",

            // Shift
            ErrorCode::ShiftNotOpen => "No open shift",
            ErrorCode::ShiftAlreadyOpen => "Shift is already open",
            ErrorCode::ShiftNotFound => "Shift not found",
            ErrorCode::ShiftHasOpenOrders => "Shift has unpaid orders",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderAlreadyPaid => "Order has already been paid",
            ErrorCode::OrderCancelled => "Order has been cancelled",
            ErrorCode::OrderEmpty => "Order is empty",

            // Payment
            ErrorCode::PaymentFailed => "Payment processing failed",
            ErrorCode::PaymentInsufficientAmount => "Insufficient payment amount",
            ErrorCode::PaymentInvalidMethod => "Invalid payment method",
            ErrorCode::PaymentExceedsTotal => "Paid amount exceeds order total",

            // Catalog & Inventory
            ErrorCode::IngredientNotFound => "Ingredient not found",
            ErrorCode::IngredientInUse => "Ingredient is used by technical cards",
            ErrorCode::TechnicalCardNotFound => "Technical card not found",
            ErrorCode::SupplierNotFound => "Supplier not found",
            ErrorCode::WarehouseNotFound => "Warehouse not found",
            ErrorCode::WarehouseNotEmpty => "Warehouse still holds stock",
            ErrorCode::InsufficientStock => "Not enough stock",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableOccupied => "Table is occupied",
            ErrorCode::RoomNotFound => "Room not found",

            // Marketing & Customers
            ErrorCode::CustomerNotFound => "Customer not found",
            ErrorCode::CustomerPhoneExists => "Customer phone already registered",
            ErrorCode::CustomerGroupNotFound => "Customer group not found",
            ErrorCode::CustomerGroupInUse => "Customer group has customers",
            ErrorCode::LoyaltyProgramNotFound => "Loyalty program not found",
            ErrorCode::PromotionNotFound => "Promotion not found",
            ErrorCode::TransactionNotFound => "Transaction not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1007 => Ok(ErrorCode::AccountDisabled),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2003 => Ok(ErrorCode::AdminRequired),

            // Shift
            3001 => Ok(ErrorCode::ShiftNotOpen),
            3002 => Ok(ErrorCode::ShiftAlreadyOpen),
            3003 => Ok(ErrorCode::ShiftNotFound),
            3004 => Ok(ErrorCode::ShiftHasOpenOrders),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderAlreadyPaid),
            4004 => Ok(ErrorCode::OrderCancelled),
            4007 => Ok(ErrorCode::OrderEmpty),

            // Payment
            5001 => Ok(ErrorCode::PaymentFailed),
            5002 => Ok(ErrorCode::PaymentInsufficientAmount),
            5003 => Ok(ErrorCode::PaymentInvalidMethod),
            5004 => Ok(ErrorCode::PaymentExceedsTotal),

            // Catalog & Inventory
            6001 => Ok(ErrorCode::IngredientNotFound),
            6002 => Ok(ErrorCode::IngredientInUse),
            6101 => Ok(ErrorCode::TechnicalCardNotFound),
            6201 => Ok(ErrorCode::SupplierNotFound),
            6301 => Ok(ErrorCode::WarehouseNotFound),
            6302 => Ok(ErrorCode::WarehouseNotEmpty),
            6401 => Ok(ErrorCode::InsufficientStock),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableOccupied),
            7101 => Ok(ErrorCode::RoomNotFound),

            // Marketing & Customers
            8001 => Ok(ErrorCode::CustomerNotFound),
            8002 => Ok(ErrorCode::CustomerPhoneExists),
            8101 => Ok(ErrorCode::CustomerGroupNotFound),
            8102 => Ok(ErrorCode::CustomerGroupInUse),
            8201 => Ok(ErrorCode::LoyaltyProgramNotFound),
            8301 => Ok(ErrorCode::PromotionNotFound),
            8401 => Ok(ErrorCode::TransactionNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::ShiftNotOpen.code(), 3001);
        assert_eq!(ErrorCode::OrderAlreadyPaid.code(), 4002);
        assert_eq!(ErrorCode::PaymentExceedsTotal.code(), 5004);
        assert_eq!(ErrorCode::WarehouseNotFound.code(), 6301);
        assert_eq!(ErrorCode::TableOccupied.code(), 7002);
        assert_eq!(ErrorCode::CustomerGroupInUse.code(), 8102);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_round_trips_every_known_code() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::RequiredField,
            ErrorCode::AccountDisabled,
            ErrorCode::AdminRequired,
            ErrorCode::ShiftHasOpenOrders,
            ErrorCode::OrderEmpty,
            ErrorCode::PaymentInvalidMethod,
            ErrorCode::InsufficientStock,
            ErrorCode::RoomNotFound,
            ErrorCode::TransactionNotFound,
            ErrorCode::ConfigError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_unknown_value() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::OrderAlreadyPaid).unwrap();
        assert_eq!(json, "4002");
        let code: ErrorCode = serde_json::from_str("7001").unwrap();
        assert_eq!(code, ErrorCode::TableNotFound);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }
}
