//! POS Client - typed HTTP client for the restaurant backend
//!
//! Wraps the backend REST API used by the back office and the cash desk:
//! PIN login, shifts, orders and payments, floor plan, stock and the
//! CRUD resources of the admin panel.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::{PosClient, Resource};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};

// Re-export shared types for convenience
pub use shared::models::{LoginResponse, UserInfo};
