use shared::models::PublicMenu;

use super::PosClient;
use crate::{ClientError, ClientResult, HttpClient};

impl<H: HttpClient> PosClient<H> {
    /// Public menu of a venue, as shown by the QR menu. No auth needed.
    pub async fn public_menu(&self, venue_slug: &str) -> ClientResult<PublicMenu> {
        let slug = venue_slug.trim();
        if slug.is_empty() || !slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(ClientError::Config(format!("invalid venue slug {venue_slug:?}")));
        }
        self.http.get(&format!("public/menu/{slug}")).await
    }
}
