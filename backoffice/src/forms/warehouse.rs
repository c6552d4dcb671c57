use shared::models::{Warehouse, WarehouseCreate};
use shared::validation::{self, FieldErrors, MAX_ADDRESS_LEN, MAX_NAME_LEN};

use super::{EntityForm, opt_text_input};

#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseForm {
    pub name: String,
    pub address: String,
    pub is_active: bool,
}

impl Default for WarehouseForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            is_active: true,
        }
    }
}

impl EntityForm for WarehouseForm {
    type Record = Warehouse;

    fn from_record(w: &Warehouse) -> Self {
        Self {
            name: w.name.clone(),
            address: opt_text_input(w.address.as_ref()),
            is_active: w.is_active,
        }
    }

    fn build(&self) -> Result<WarehouseCreate, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.check("name", validation::required_text(&self.name, MAX_NAME_LEN));
        let address = errors.check("address", validation::optional_text(&self.address, MAX_ADDRESS_LEN));

        match (name, address) {
            (Some(name), Some(address)) => Ok(WarehouseCreate {
                name,
                address,
                is_active: self.is_active,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_warehouse_is_active() {
        let form = WarehouseForm {
            name: "Бар".into(),
            ..Default::default()
        };
        assert!(form.build().unwrap().is_active);
    }

    #[test]
    fn test_prefill_inactive() {
        let warehouse = Warehouse {
            id: 3,
            name: "Старый склад".into(),
            address: None,
            is_active: false,
        };
        let form = WarehouseForm::from_record(&warehouse);
        assert!(!form.is_active);
        assert_eq!(form.address, "");
    }
}
