use shared::models::{Movement, StockBalance};

use super::PosClient;
use crate::{ClientResult, HttpClient};

impl<H: HttpClient> PosClient<H> {
    /// Current stock, for one warehouse or all of them
    pub async fn stock(&self, warehouse_id: Option<i64>) -> ClientResult<Vec<StockBalance>> {
        match warehouse_id {
            Some(id) => self.http.get(&format!("stock?warehouse_id={id}")).await,
            None => self.http.get("stock").await,
        }
    }

    /// All supply and write-off documents
    pub async fn movements(&self) -> ClientResult<Vec<Movement>> {
        self.http.get("movements").await
    }
}
