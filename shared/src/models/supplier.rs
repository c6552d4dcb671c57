//! Supplier Model

use serde::{Deserialize, Serialize};

/// Supplier entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    /// Taxpayer number (ИНН), 10 digits for companies, 12 for individuals
    pub inn: Option<String>,
    pub comment: Option<String>,
}

/// Create supplier payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierCreate {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub inn: Option<String>,
    pub comment: Option<String>,
}

/// Update supplier payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub inn: Option<String>,
    pub comment: Option<String>,
}

impl From<SupplierCreate> for SupplierUpdate {
    fn from(c: SupplierCreate) -> Self {
        Self {
            name: Some(c.name),
            phone: c.phone,
            email: c.email,
            address: c.address,
            inn: c.inn,
            comment: c.comment,
        }
    }
}
