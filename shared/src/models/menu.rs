//! Public Menu Models (QR menu)

use serde::{Deserialize, Serialize};

/// Menu category as published for guests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// Menu item as published for guests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// Portion weight / volume label, e.g. "250 г"
    pub portion: Option<String>,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

/// Complete public menu of one venue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicMenu {
    pub venue_name: String,
    #[serde(default)]
    pub categories: Vec<MenuCategory>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}
