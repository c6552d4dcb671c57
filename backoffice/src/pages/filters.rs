//! Per-screen filters on top of [`ListPage`]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{
    Customer, CustomerGroup, Ingredient, LoyaltyProgram, Promotion, Supplier, TechnicalCard,
    Transaction, TransactionKind, Warehouse,
};
use shared::money::{to_decimal, to_f64};

use super::ListPage;

pub type CustomersPage = ListPage<Customer>;
pub type CustomerGroupsPage = ListPage<CustomerGroup>;
pub type IngredientsPage = ListPage<Ingredient>;
pub type SuppliersPage = ListPage<Supplier>;
pub type WarehousesPage = ListPage<Warehouse>;
pub type LoyaltyProgramsPage = ListPage<LoyaltyProgram>;
pub type PromotionsPage = ListPage<Promotion>;
pub type TechnicalCardsPage = ListPage<TechnicalCard>;
pub type TransactionsPage = ListPage<Transaction>;

const GROUP: &str = "group";
const ACTIVE: &str = "active";
const CATEGORY: &str = "category";
const KIND: &str = "kind";
const DATES: &str = "dates";
const RUNNING: &str = "running";

impl ListPage<Customer> {
    /// Only customers of one group; `None` shows everybody
    pub fn filter_group(&mut self, group_id: Option<i64>) {
        match group_id {
            Some(id) => self.set_filter(GROUP, move |c: &Customer| c.group_id == Some(id)),
            None => self.clear_filter(GROUP),
        }
    }
}

impl ListPage<Ingredient> {
    /// Distinct categories for the filter drop-down
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .rows()
            .iter()
            .filter_map(|i| i.category.clone())
            .collect();
        categories.sort_by_key(|c| c.to_lowercase());
        categories.dedup();
        categories
    }

    pub fn filter_category(&mut self, category: Option<String>) {
        match category {
            Some(category) => {
                self.set_filter(CATEGORY, move |i: &Ingredient| i.category.as_deref() == Some(category.as_str()))
            }
            None => self.clear_filter(CATEGORY),
        }
    }
}

impl ListPage<Warehouse> {
    pub fn active_only(&mut self, active_only: bool) {
        if active_only {
            self.set_filter(ACTIVE, |w: &Warehouse| w.is_active);
        } else {
            self.clear_filter(ACTIVE);
        }
    }
}

impl ListPage<LoyaltyProgram> {
    pub fn active_only(&mut self, active_only: bool) {
        if active_only {
            self.set_filter(ACTIVE, |p: &LoyaltyProgram| p.is_active);
        } else {
            self.clear_filter(ACTIVE);
        }
    }
}

impl ListPage<Promotion> {
    pub fn active_only(&mut self, active_only: bool) {
        if active_only {
            self.set_filter(ACTIVE, |p: &Promotion| p.is_active);
        } else {
            self.clear_filter(ACTIVE);
        }
    }

    /// Only promotions running on the given day
    pub fn running_on(&mut self, date: Option<NaiveDate>) {
        match date {
            Some(date) => self.set_filter(RUNNING, move |p: &Promotion| p.is_running_on(date)),
            None => self.clear_filter(RUNNING),
        }
    }
}

impl ListPage<Transaction> {
    pub fn filter_kind(&mut self, kind: Option<TransactionKind>) {
        match kind {
            Some(kind) => self.set_filter(KIND, move |t: &Transaction| t.kind == kind),
            None => self.clear_filter(KIND),
        }
    }

    /// Inclusive date window on `occurred_at` (UTC date); open ends allowed
    pub fn date_window(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        if from.is_none() && to.is_none() {
            self.clear_filter(DATES);
            return;
        }
        self.set_filter(DATES, move |t: &Transaction| {
            let day = t.occurred_at.date_naive();
            from.is_none_or(|start| day >= start) && to.is_none_or(|end| day <= end)
        });
    }

    /// Net of the visible transactions: income minus expense, transfers ignored
    pub fn balance(&self) -> f64 {
        let total: Decimal = self
            .visible()
            .iter()
            .map(|t| to_decimal(t.amount) * to_decimal(t.kind.sign()))
            .sum();
        to_f64(total)
    }
}
