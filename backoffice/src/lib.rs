//! Back office and cash desk state layer
//!
//! View-model state for the admin panel (entity forms, list pages,
//! sidebar, reports) and the POS screens (shift, floor, payment, PIN
//! pad), driven against the backend through [`pos_client::PosClient`].
//! Rendering is left to the UI; the bundled `pos-console` binary drives
//! the same state from the command line.

pub mod config;
pub mod error;
pub mod forms;
pub mod logger;
pub mod navigation;
pub mod pages;
pub mod pos;
pub mod qr_menu;
pub mod reports;

pub use config::Config;
pub use error::{BackofficeError, BackofficeResult};
