//! Data models
//!
//! Records as returned by the backend REST API, plus the `*Create` /
//! `*Update` payloads sent back. All IDs are `i64`.

pub mod auth;
pub mod customer;
pub mod dining_table;
pub mod ingredient;
pub mod listing;
pub mod loyalty;
pub mod menu;
pub mod order;
pub mod shift;
pub mod supplier;
pub mod technical_card;
pub mod transaction;
pub mod warehouse;

// Re-exports
pub use auth::*;
pub use customer::*;
pub use dining_table::*;
pub use ingredient::*;
pub use loyalty::*;
pub use menu::*;
pub use order::*;
pub use shift::*;
pub use supplier::*;
pub use technical_card::*;
pub use transaction::*;
pub use warehouse::*;
