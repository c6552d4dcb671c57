use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::models::{Ingredient, MeasureUnit, TechnicalCard, TechnicalCardCreate, TechnicalCardLine};
use shared::money::{to_decimal, to_f64};
use shared::validation::{self, FieldErrors, MAX_NAME_LEN, MAX_NOTE_LEN};

use super::{EntityForm, number_input, opt_text_input};

/// One ingredient row as typed in the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechnicalCardLineInput {
    pub ingredient_id: Option<i64>,
    pub ingredient_name: String,
    pub gross: String,
    pub net: String,
}

/// Recipe card. `cost` is an estimate refreshed by [`TechnicalCardForm::recompute_cost`];
/// the backend computes the authoritative value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechnicalCardForm {
    pub product_name: String,
    pub output_quantity: String,
    pub unit: MeasureUnit,
    pub lines: Vec<TechnicalCardLineInput>,
    pub comment: String,
    pub cost: f64,
}

impl TechnicalCardForm {
    pub fn add_line(&mut self) {
        self.lines.push(TechnicalCardLineInput::default());
    }

    pub fn remove_line(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    /// Pick the ingredient of a row
    pub fn select_ingredient(&mut self, index: usize, ingredient: &Ingredient) {
        if let Some(line) = self.lines.get_mut(index) {
            line.ingredient_id = Some(ingredient.id);
            line.ingredient_name.clone_from(&ingredient.name);
        }
    }

    /// Portion cost: sum of gross quantity × ingredient cost price.
    /// Rows with an unknown ingredient or unparsable quantity count as zero.
    pub fn recompute_cost(&mut self, ingredients: &[Ingredient]) -> f64 {
        let prices: HashMap<i64, f64> = ingredients.iter().map(|i| (i.id, i.cost_price)).collect();
        let total: Decimal = self
            .lines
            .iter()
            .filter_map(|line| {
                let price = prices.get(&line.ingredient_id?)?;
                let gross = validation::parse_number(&line.gross).ok()??;
                Some(to_decimal(gross) * to_decimal(*price))
            })
            .sum();
        self.cost = to_f64(total);
        self.cost
    }
}

impl EntityForm for TechnicalCardForm {
    type Record = TechnicalCard;

    fn from_record(card: &TechnicalCard) -> Self {
        Self {
            product_name: card.product_name.clone(),
            output_quantity: number_input(card.output_quantity),
            unit: card.unit,
            lines: card
                .ingredients
                .iter()
                .map(|l| TechnicalCardLineInput {
                    ingredient_id: Some(l.ingredient_id),
                    ingredient_name: l.ingredient_name.clone(),
                    gross: number_input(l.gross),
                    net: number_input(l.net),
                })
                .collect(),
            comment: opt_text_input(card.comment.as_ref()),
            cost: card.cost,
        }
    }

    fn build(&self) -> Result<TechnicalCardCreate, FieldErrors> {
        let mut errors = FieldErrors::new();
        let product_name = errors.check(
            "product_name",
            validation::required_text(&self.product_name, MAX_NAME_LEN),
        );
        let output_quantity = errors.check(
            "output_quantity",
            validation::required_number(&self.output_quantity).and_then(validation::positive),
        );
        let comment = errors.check("comment", validation::optional_text(&self.comment, MAX_NOTE_LEN));

        if self.lines.is_empty() {
            errors.add("ingredients", "Добавьте хотя бы один ингредиент");
        }
        let mut lines = Vec::with_capacity(self.lines.len());
        for (i, line) in self.lines.iter().enumerate() {
            let ingredient_id = line.ingredient_id;
            if ingredient_id.is_none() {
                errors.add(format!("ingredients.{i}.ingredient_id"), "Выберите ингредиент");
            }
            let gross = errors.check(
                &format!("ingredients.{i}.gross"),
                validation::required_number(&line.gross).and_then(validation::positive),
            );
            let net = errors.check(
                &format!("ingredients.{i}.net"),
                validation::required_number(&line.net).and_then(validation::positive),
            );
            if let (Some(gross), Some(net)) = (gross, net)
                && net > gross
            {
                errors.add(format!("ingredients.{i}.net"), "Нетто не может превышать брутто");
            }
            if let (Some(ingredient_id), Some(gross), Some(net)) = (ingredient_id, gross, net) {
                lines.push(TechnicalCardLine {
                    ingredient_id,
                    ingredient_name: line.ingredient_name.clone(),
                    gross,
                    net,
                });
            }
        }

        match (product_name, output_quantity, comment) {
            (Some(product_name), Some(output_quantity), Some(comment)) if errors.is_empty() => {
                Ok(TechnicalCardCreate {
                    product_name,
                    output_quantity,
                    unit: self.unit,
                    ingredients: lines,
                    comment,
                })
            }
            _ => Err(errors),
        }
    }
}
