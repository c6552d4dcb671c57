//! Ingredient Model

use serde::{Deserialize, Serialize};

/// Unit an ingredient is stocked and counted in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureUnit {
    #[default]
    Kg,
    G,
    L,
    Ml,
    Pcs,
}

impl MeasureUnit {
    /// Short Russian label used in tables and reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Kg => "кг",
            Self::G => "г",
            Self::L => "л",
            Self::Ml => "мл",
            Self::Pcs => "шт",
        }
    }

    /// Whether quantities in this unit are counted in whole pieces
    pub fn is_countable(&self) -> bool {
        matches!(self, Self::Pcs)
    }
}

/// Ingredient entity (raw stock item)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub unit: MeasureUnit,
    pub category: Option<String>,
    /// Current weighted-average cost per unit
    #[serde(default)]
    pub cost_price: f64,
    /// Stock level below which the ingredient is flagged
    pub min_stock: Option<f64>,
}

/// Create ingredient payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientCreate {
    pub name: String,
    pub unit: MeasureUnit,
    pub category: Option<String>,
    pub cost_price: f64,
    pub min_stock: Option<f64>,
}

/// Update ingredient payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientUpdate {
    pub name: Option<String>,
    pub unit: Option<MeasureUnit>,
    pub category: Option<String>,
    pub cost_price: Option<f64>,
    pub min_stock: Option<f64>,
}

impl From<IngredientCreate> for IngredientUpdate {
    fn from(c: IngredientCreate) -> Self {
        Self {
            name: Some(c.name),
            unit: Some(c.unit),
            category: c.category,
            cost_price: Some(c.cost_price),
            min_stock: c.min_stock,
        }
    }
}
