//! Order & Payment Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Open,
    Paid,
    Cancelled,
}

/// Order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: i64,
    pub name: String,
    pub quantity: f64,
    /// Unit price in currency unit
    pub price: f64,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Receipt number shown to staff
    pub number: String,
    pub table_id: Option<i64>,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Total to pay after discounts
    pub total: f64,
    #[serde(default)]
    pub paid_total: f64,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn is_open(&self) -> bool {
        self.status == OrderStatus::Open
    }
}

/// Create order payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table_id: Option<i64>,
    pub guests: Option<u32>,
}

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Наличные",
            Self::Card => "Карта",
        }
    }
}

/// One part of a (possibly split) payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPart {
    pub method: PaymentMethod,
    pub amount: f64,
}

/// Pay order payload (`/orders/:id/pay`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayOrderRequest {
    pub payments: Vec<PaymentPart>,
    /// Cash handed over by the guest, when paying (partly) in cash
    pub tendered: Option<f64>,
    /// Client-generated id so a repeated submit is not charged twice
    pub operation_id: String,
}
