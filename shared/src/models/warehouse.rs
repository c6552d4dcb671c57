//! Warehouse, Stock & Movement Models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ingredient::MeasureUnit;

/// Warehouse entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Create warehouse payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseCreate {
    pub name: String,
    pub address: Option<String>,
    pub is_active: bool,
}

/// Update warehouse payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WarehouseUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub is_active: Option<bool>,
}

impl From<WarehouseCreate> for WarehouseUpdate {
    fn from(c: WarehouseCreate) -> Self {
        Self {
            name: Some(c.name),
            address: c.address,
            is_active: Some(c.is_active),
        }
    }
}

/// Current stock of one item in one warehouse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockBalance {
    pub item_id: i64,
    pub item_name: String,
    #[serde(default)]
    pub unit: MeasureUnit,
    pub warehouse_id: i64,
    pub quantity: f64,
    /// Weighted-average cost per unit
    pub unit_price: f64,
}

/// Kind of ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    /// Receipt from a supplier
    Supply,
    /// Spoilage, staff meals, stocktake shortage
    WriteOff,
}

/// One line of a movement document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementLine {
    pub item_id: i64,
    pub item_name: String,
    #[serde(default)]
    pub unit: MeasureUnit,
    pub quantity: f64,
    /// Purchase price per unit (supplies); write-offs may leave it zero
    #[serde(default)]
    pub price: f64,
}

/// Movement document (supply receipt or write-off)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: i64,
    pub kind: MovementKind,
    pub date: NaiveDate,
    pub warehouse_id: i64,
    pub supplier_id: Option<i64>,
    pub reason: Option<String>,
    pub items: Vec<MovementLine>,
}
