//! Typed backend API
//!
//! [`PosClient`] wraps an [`HttpClient`] and exposes one method per backend
//! endpoint. Endpoint groups live in their own files as separate `impl`
//! blocks.

mod auth;
mod floor;
mod inventory;
mod menu;
mod orders;
mod resources;
mod shifts;

pub use resources::Resource;

use shared::models::UserInfo;

use crate::HttpClient;

/// Typed client for the restaurant backend
#[derive(Debug, Clone)]
pub struct PosClient<H: HttpClient> {
    http: H,
    user: Option<UserInfo>,
}

impl<H: HttpClient> PosClient<H> {
    pub fn new(http: H) -> Self {
        Self { http, user: None }
    }

    /// Underlying transport
    pub fn http(&self) -> &H {
        &self.http
    }

    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    /// User of the last successful PIN login
    pub fn current_user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.http.token().is_some()
    }
}
