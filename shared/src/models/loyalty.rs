//! Loyalty Program & Promotion Models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a loyalty program rewards the guest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoyaltyKind {
    /// Percentage off the bill
    #[default]
    Discount,
    /// Percentage accrued as bonus points
    Bonus,
}

/// Loyalty program entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyProgram {
    pub id: i64,
    pub name: String,
    pub kind: LoyaltyKind,
    /// Discount or accrual percentage, 0..=100
    pub percent: f64,
    /// Lifetime spend needed to join the program
    #[serde(default)]
    pub min_total_spent: f64,
    pub is_active: bool,
}

/// Create loyalty program payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyProgramCreate {
    pub name: String,
    pub kind: LoyaltyKind,
    pub percent: f64,
    pub min_total_spent: f64,
    pub is_active: bool,
}

/// Update loyalty program payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyProgramUpdate {
    pub name: Option<String>,
    pub kind: Option<LoyaltyKind>,
    pub percent: Option<f64>,
    pub min_total_spent: Option<f64>,
    pub is_active: Option<bool>,
}

impl From<LoyaltyProgramCreate> for LoyaltyProgramUpdate {
    fn from(c: LoyaltyProgramCreate) -> Self {
        Self {
            name: Some(c.name),
            kind: Some(c.kind),
            percent: Some(c.percent),
            min_total_spent: Some(c.min_total_spent),
            is_active: Some(c.is_active),
        }
    }
}

/// Time-boxed promotion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: i64,
    pub name: String,
    pub discount_percent: f64,
    pub starts_on: NaiveDate,
    pub ends_on: Option<NaiveDate>,
    pub is_active: bool,
    #[serde(default)]
    pub product_ids: Vec<i64>,
}

impl Promotion {
    /// Whether the promotion applies on `date`
    pub fn is_running_on(&self, date: NaiveDate) -> bool {
        self.is_active && date >= self.starts_on && self.ends_on.is_none_or(|end| date <= end)
    }
}

/// Create promotion payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionCreate {
    pub name: String,
    pub discount_percent: f64,
    pub starts_on: NaiveDate,
    pub ends_on: Option<NaiveDate>,
    pub is_active: bool,
    pub product_ids: Vec<i64>,
}

/// Update promotion payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromotionUpdate {
    pub name: Option<String>,
    pub discount_percent: Option<f64>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
    pub is_active: Option<bool>,
    pub product_ids: Option<Vec<i64>>,
}

impl From<PromotionCreate> for PromotionUpdate {
    fn from(c: PromotionCreate) -> Self {
        Self {
            name: Some(c.name),
            discount_percent: Some(c.discount_percent),
            starts_on: Some(c.starts_on),
            ends_on: c.ends_on,
            is_active: Some(c.is_active),
            product_ids: Some(c.product_ids),
        }
    }
}
