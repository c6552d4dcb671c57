//! Technical Card Model (recipe / bill of materials)

use serde::{Deserialize, Serialize};

use super::ingredient::MeasureUnit;

/// One ingredient line of a technical card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalCardLine {
    pub ingredient_id: i64,
    #[serde(default)]
    pub ingredient_name: String,
    /// Gross quantity taken from stock
    pub gross: f64,
    /// Net quantity after cleaning / cooking losses
    pub net: f64,
}

/// Technical card entity linking a menu item to ingredient quantities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalCard {
    pub id: i64,
    pub product_name: String,
    /// Yield of one portion
    pub output_quantity: f64,
    pub unit: MeasureUnit,
    pub ingredients: Vec<TechnicalCardLine>,
    /// Cost of one portion as computed by the backend
    #[serde(default)]
    pub cost: f64,
    pub comment: Option<String>,
}

/// Create technical card payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalCardCreate {
    pub product_name: String,
    pub output_quantity: f64,
    pub unit: MeasureUnit,
    pub ingredients: Vec<TechnicalCardLine>,
    pub comment: Option<String>,
}

/// Update technical card payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalCardUpdate {
    pub product_name: Option<String>,
    pub output_quantity: Option<f64>,
    pub unit: Option<MeasureUnit>,
    pub ingredients: Option<Vec<TechnicalCardLine>>,
    pub comment: Option<String>,
}

impl From<TechnicalCardCreate> for TechnicalCardUpdate {
    fn from(c: TechnicalCardCreate) -> Self {
        Self {
            product_name: Some(c.product_name),
            output_quantity: Some(c.output_quantity),
            unit: Some(c.unit),
            ingredients: Some(c.ingredients),
            comment: c.comment,
        }
    }
}
