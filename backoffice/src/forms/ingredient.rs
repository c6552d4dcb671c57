use shared::models::{Ingredient, IngredientCreate, MeasureUnit};
use shared::validation::{self, FieldErrors, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN};

use super::{EntityForm, number_input, opt_number_input, opt_text_input};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientForm {
    pub name: String,
    pub unit: MeasureUnit,
    pub category: String,
    pub cost_price: String,
    pub min_stock: String,
}

impl EntityForm for IngredientForm {
    type Record = Ingredient;

    fn from_record(i: &Ingredient) -> Self {
        Self {
            name: i.name.clone(),
            unit: i.unit,
            category: opt_text_input(i.category.as_ref()),
            cost_price: number_input(i.cost_price),
            min_stock: opt_number_input(i.min_stock),
        }
    }

    fn build(&self) -> Result<IngredientCreate, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.check("name", validation::required_text(&self.name, MAX_NAME_LEN));
        let category = errors.check(
            "category",
            validation::optional_text(&self.category, MAX_SHORT_TEXT_LEN),
        );
        // Blank cost means "not known yet"
        let cost_price = errors.check(
            "cost_price",
            validation::parse_number(&self.cost_price)
                .and_then(|v| validation::non_negative(v.unwrap_or(0.0))),
        );
        let min_stock = errors.check(
            "min_stock",
            validation::parse_number(&self.min_stock)
                .and_then(|v| v.map(validation::non_negative).transpose()),
        );

        match (name, category, cost_price, min_stock) {
            (Some(name), Some(category), Some(cost_price), Some(min_stock)) => Ok(IngredientCreate {
                name,
                unit: self.unit,
                category,
                cost_price,
                min_stock,
            }),
            _ => Err(errors),
        }
    }
}
