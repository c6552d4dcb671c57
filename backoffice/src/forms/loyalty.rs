use shared::models::{LoyaltyKind, LoyaltyProgram, LoyaltyProgramCreate, Promotion, PromotionCreate};
use shared::validation::{self, FieldErrors, MAX_NAME_LEN};

use super::{EntityForm, date_input, number_input};

#[derive(Debug, Clone, PartialEq)]
pub struct LoyaltyProgramForm {
    pub name: String,
    pub kind: LoyaltyKind,
    pub percent: String,
    pub min_total_spent: String,
    pub is_active: bool,
}

impl Default for LoyaltyProgramForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: LoyaltyKind::Discount,
            percent: String::new(),
            min_total_spent: String::new(),
            is_active: true,
        }
    }
}

impl EntityForm for LoyaltyProgramForm {
    type Record = LoyaltyProgram;

    fn from_record(p: &LoyaltyProgram) -> Self {
        Self {
            name: p.name.clone(),
            kind: p.kind,
            percent: number_input(p.percent),
            min_total_spent: number_input(p.min_total_spent),
            is_active: p.is_active,
        }
    }

    fn build(&self) -> Result<LoyaltyProgramCreate, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.check("name", validation::required_text(&self.name, MAX_NAME_LEN));
        let percent = errors.check("percent", validation::required_percent(&self.percent));
        let min_total_spent = errors.check(
            "min_total_spent",
            validation::parse_number(&self.min_total_spent)
                .and_then(|v| validation::non_negative(v.unwrap_or(0.0))),
        );

        match (name, percent, min_total_spent) {
            (Some(name), Some(percent), Some(min_total_spent)) => Ok(LoyaltyProgramCreate {
                name,
                kind: self.kind,
                percent,
                min_total_spent,
                is_active: self.is_active,
            }),
            _ => Err(errors),
        }
    }
}

/// Promotion with a discount window
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionForm {
    pub name: String,
    pub discount_percent: String,
    pub starts_on: String,
    pub ends_on: String,
    pub is_active: bool,
    pub product_ids: Vec<i64>,
}

impl Default for PromotionForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            discount_percent: String::new(),
            starts_on: String::new(),
            ends_on: String::new(),
            is_active: true,
            product_ids: Vec::new(),
        }
    }
}

impl PromotionForm {
    /// Add or remove a product from the promotion
    pub fn toggle_product(&mut self, product_id: i64) {
        if let Some(pos) = self.product_ids.iter().position(|&id| id == product_id) {
            self.product_ids.remove(pos);
        } else {
            self.product_ids.push(product_id);
        }
    }
}

impl EntityForm for PromotionForm {
    type Record = Promotion;

    fn from_record(p: &Promotion) -> Self {
        Self {
            name: p.name.clone(),
            discount_percent: number_input(p.discount_percent),
            starts_on: date_input(Some(p.starts_on)),
            ends_on: date_input(p.ends_on),
            is_active: p.is_active,
            product_ids: p.product_ids.clone(),
        }
    }

    fn build(&self) -> Result<PromotionCreate, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.check("name", validation::required_text(&self.name, MAX_NAME_LEN));
        let discount_percent = errors.check(
            "discount_percent",
            validation::required_percent(&self.discount_percent),
        );
        let starts_on = errors.check("starts_on", validation::required_date(&self.starts_on));
        let ends_on = errors.check("ends_on", validation::parse_date(&self.ends_on));
        if let (Some(start), Some(end)) = (starts_on, ends_on) {
            errors.check("ends_on", validation::date_range(start, end));
        }

        match (name, discount_percent, starts_on, ends_on) {
            (Some(name), Some(discount_percent), Some(starts_on), Some(ends_on)) if errors.is_empty() => {
                Ok(PromotionCreate {
                    name,
                    discount_percent,
                    starts_on,
                    ends_on,
                    is_active: self.is_active,
                    product_ids: self.product_ids.clone(),
                })
            }
            _ => Err(errors),
        }
    }
}
