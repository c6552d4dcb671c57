use shared::models::{Order, OrderCreate, PayOrderRequest};

use super::PosClient;
use crate::{ClientResult, HttpClient};

impl<H: HttpClient> PosClient<H> {
    pub async fn orders(&self) -> ClientResult<Vec<Order>> {
        self.http.get("orders").await
    }

    pub async fn orders_for_table(&self, table_id: i64) -> ClientResult<Vec<Order>> {
        self.http.get(&format!("orders?table_id={table_id}")).await
    }

    pub async fn order(&self, id: i64) -> ClientResult<Order> {
        self.http.get(&format!("orders/{id}")).await
    }

    pub async fn create_order(&self, table_id: Option<i64>) -> ClientResult<Order> {
        let req = OrderCreate {
            table_id,
            guests: None,
        };
        let order: Order = self.http.post("orders", &req).await?;
        tracing::info!(order_id = order.id, table_id = ?table_id, "Order created");
        Ok(order)
    }

    /// Pay an order; returns the order in its new state
    pub async fn pay_order(&self, id: i64, req: &PayOrderRequest) -> ClientResult<Order> {
        let order: Order = self.http.post(&format!("orders/{id}/pay"), req).await?;
        tracing::info!(
            order_id = id,
            parts = req.payments.len(),
            operation_id = %req.operation_id,
            status = ?order.status,
            "Order payment submitted"
        );
        Ok(order)
    }
}
