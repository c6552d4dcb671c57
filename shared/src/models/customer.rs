//! Customer & Customer Group Models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Customer entity (guest registered for discounts / bonuses)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub group_id: Option<i64>,
    /// Group name, denormalized by the list endpoint
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub bonus_balance: f64,
    #[serde(default)]
    pub total_spent: f64,
    pub comment: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Create customer payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub group_id: Option<i64>,
    pub comment: Option<String>,
}

/// Update customer payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub group_id: Option<i64>,
    pub comment: Option<String>,
}

impl From<CustomerCreate> for CustomerUpdate {
    fn from(c: CustomerCreate) -> Self {
        Self {
            name: Some(c.name),
            phone: c.phone,
            email: c.email,
            birthday: c.birthday,
            group_id: c.group_id,
            comment: c.comment,
        }
    }
}

/// Customer group (discount tier)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerGroup {
    pub id: i64,
    pub name: String,
    /// Discount applied to every customer of the group, 0..=100
    pub discount_percent: f64,
    pub description: Option<String>,
    /// Number of customers in the group, when the endpoint reports it
    #[serde(default)]
    pub customer_count: Option<i64>,
}

/// Create customer group payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerGroupCreate {
    pub name: String,
    pub discount_percent: f64,
    pub description: Option<String>,
}

/// Update customer group payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerGroupUpdate {
    pub name: Option<String>,
    pub discount_percent: Option<f64>,
    pub description: Option<String>,
}

impl From<CustomerGroupCreate> for CustomerGroupUpdate {
    fn from(c: CustomerGroupCreate) -> Self {
        Self {
            name: Some(c.name),
            discount_percent: Some(c.discount_percent),
            description: c.description,
        }
    }
}
