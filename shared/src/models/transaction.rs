//! Finance Transaction Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a money movement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    #[default]
    Income,
    Expense,
    /// Between two accounts (safe → cash desk, etc.)
    Transfer,
}

impl TransactionKind {
    /// Sign applied to the amount when totalling cash flow
    pub fn sign(&self) -> f64 {
        match self {
            Self::Income => 1.0,
            Self::Expense => -1.0,
            Self::Transfer => 0.0,
        }
    }
}

/// Finance transaction entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub kind: TransactionKind,
    /// Always positive; direction comes from `kind`
    pub amount: f64,
    pub account: String,
    /// Destination account for transfers
    pub to_account: Option<String>,
    pub category: Option<String>,
    pub comment: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Create transaction payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionCreate {
    pub kind: TransactionKind,
    pub amount: f64,
    pub account: String,
    pub to_account: Option<String>,
    pub category: Option<String>,
    pub comment: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Update transaction payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdate {
    pub kind: Option<TransactionKind>,
    pub amount: Option<f64>,
    pub account: Option<String>,
    pub to_account: Option<String>,
    pub category: Option<String>,
    pub comment: Option<String>,
    pub occurred_at: Option<DateTime<Utc>>,
}

impl From<TransactionCreate> for TransactionUpdate {
    fn from(c: TransactionCreate) -> Self {
        Self {
            kind: Some(c.kind),
            amount: Some(c.amount),
            account: Some(c.account),
            to_account: c.to_account,
            category: c.category,
            comment: c.comment,
            occurred_at: Some(c.occurred_at),
        }
    }
}
