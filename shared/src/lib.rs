//! Shared types for the restaurant back office
//!
//! Domain models, error codes, client-side validation, list search/sort
//! helpers and the pure money / stock calculations used by both the API
//! client and the back-office screens.

pub mod error;
pub mod models;
pub mod money;
pub mod query;
pub mod report;
pub mod settlement;
pub mod validation;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorBody, ErrorCode, GENERIC_ERROR_MESSAGE};
pub use query::{SortDirection, SortKey, SortState, Searchable, Sortable};
pub use report::{MovementReport, MovementReportRow, ReportPeriod, aggregate_movement_report};
pub use settlement::{PaymentError, ShiftSummary, SplitPayment};
