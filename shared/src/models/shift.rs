//! Shift Model (cashier session)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shift status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftStatus {
    #[default]
    Open,
    Closed,
}

/// Shift record - a cashier's time-boxed session at the cash desk
///
/// Running totals are maintained by the backend as orders are paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: i64,
    pub cashier_id: i64,
    pub cashier_name: String,
    pub status: ShiftStatus,
    pub opened_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    /// Cash in the drawer when the shift was opened
    pub opening_cash: f64,
    /// Cash counted at close
    pub closing_cash: Option<f64>,
    #[serde(default)]
    pub cash_sales: f64,
    #[serde(default)]
    pub card_sales: f64,
    /// Cash deposited into the drawer during the shift
    #[serde(default)]
    pub cash_in: f64,
    /// Cash taken out of the drawer (collections, petty expenses)
    #[serde(default)]
    pub cash_out: f64,
    /// Cash refunds given back to guests
    #[serde(default)]
    pub refunds: f64,
    #[serde(default)]
    pub orders_count: i64,
}

impl Shift {
    pub fn is_open(&self) -> bool {
        self.status == ShiftStatus::Open
    }
}

/// Open shift payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftOpen {
    pub opening_cash: f64,
    pub note: Option<String>,
}

/// Close shift payload (`/shifts/end`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftEnd {
    pub closing_cash: f64,
    pub note: Option<String>,
}
