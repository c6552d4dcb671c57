use shared::models::Room;

use super::PosClient;
use crate::{ClientResult, HttpClient};

impl<H: HttpClient> PosClient<H> {
    /// Rooms with their tables and live status
    pub async fn rooms(&self) -> ClientResult<Vec<Room>> {
        self.http.get("rooms").await
    }
}
