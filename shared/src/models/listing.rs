//! Search fields and sort columns of the admin list screens

use crate::query::{Searchable, SortKey, Sortable};

use super::{
    Customer, CustomerGroup, Ingredient, LoyaltyProgram, Promotion, Supplier, TechnicalCard,
    Transaction, Warehouse,
};

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.phone.as_deref());
        fields.extend(self.email.as_deref());
        fields.extend(self.group_name.as_deref());
        fields
    }
}

impl Sortable for Customer {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "name" => SortKey::text(&self.name),
            "phone" => SortKey::opt_text(self.phone.as_deref()),
            "group" => SortKey::opt_text(self.group_name.as_deref()),
            "birthday" => SortKey::opt_date(self.birthday),
            "bonus_balance" => SortKey::Number(self.bonus_balance),
            "total_spent" => SortKey::Number(self.total_spent),
            "created_at" => SortKey::opt_number(self.created_at.map(|t| t.timestamp() as f64)),
            _ => SortKey::Missing,
        }
    }
}

impl Searchable for CustomerGroup {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.description.as_deref());
        fields
    }
}

impl Sortable for CustomerGroup {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "name" => SortKey::text(&self.name),
            "discount_percent" => SortKey::Number(self.discount_percent),
            "customer_count" => SortKey::opt_number(self.customer_count.map(|c| c as f64)),
            _ => SortKey::Missing,
        }
    }
}

impl Searchable for Ingredient {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.category.as_deref());
        fields
    }
}

impl Sortable for Ingredient {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "name" => SortKey::text(&self.name),
            "category" => SortKey::opt_text(self.category.as_deref()),
            "unit" => SortKey::text(self.unit.label()),
            "cost_price" => SortKey::Number(self.cost_price),
            "min_stock" => SortKey::opt_number(self.min_stock),
            _ => SortKey::Missing,
        }
    }
}

impl Searchable for Supplier {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.phone.as_deref());
        fields.extend(self.email.as_deref());
        fields.extend(self.inn.as_deref());
        fields.extend(self.address.as_deref());
        fields
    }
}

impl Sortable for Supplier {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "name" => SortKey::text(&self.name),
            "inn" => SortKey::opt_text(self.inn.as_deref()),
            "phone" => SortKey::opt_text(self.phone.as_deref()),
            _ => SortKey::Missing,
        }
    }
}

impl Searchable for Warehouse {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.address.as_deref());
        fields
    }
}

impl Sortable for Warehouse {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "name" => SortKey::text(&self.name),
            "address" => SortKey::opt_text(self.address.as_deref()),
            _ => SortKey::Missing,
        }
    }
}

impl Searchable for LoyaltyProgram {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Sortable for LoyaltyProgram {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "name" => SortKey::text(&self.name),
            "percent" => SortKey::Number(self.percent),
            "min_total_spent" => SortKey::Number(self.min_total_spent),
            _ => SortKey::Missing,
        }
    }
}

impl Searchable for Promotion {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Sortable for Promotion {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "name" => SortKey::text(&self.name),
            "discount_percent" => SortKey::Number(self.discount_percent),
            "starts_on" => SortKey::Date(self.starts_on),
            "ends_on" => SortKey::opt_date(self.ends_on),
            _ => SortKey::Missing,
        }
    }
}

impl Searchable for TechnicalCard {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.product_name.as_str()];
        fields.extend(self.ingredients.iter().map(|l| l.ingredient_name.as_str()));
        fields
    }
}

impl Sortable for TechnicalCard {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "product_name" => SortKey::text(&self.product_name),
            "output_quantity" => SortKey::Number(self.output_quantity),
            "cost" => SortKey::Number(self.cost),
            _ => SortKey::Missing,
        }
    }
}

impl Searchable for Transaction {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.account.as_str()];
        fields.extend(self.to_account.as_deref());
        fields.extend(self.category.as_deref());
        fields.extend(self.comment.as_deref());
        fields
    }
}

impl Sortable for Transaction {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "occurred_at" => SortKey::Number(self.occurred_at.timestamp() as f64),
            "amount" => SortKey::Number(self.amount),
            "account" => SortKey::text(&self.account),
            "category" => SortKey::opt_text(self.category.as_deref()),
            _ => SortKey::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{SortState, apply_sort, matches_search};

    fn supplier(id: i64, name: &str, inn: Option<&str>) -> Supplier {
        Supplier {
            id,
            name: name.into(),
            phone: None,
            email: None,
            address: None,
            inn: inn.map(Into::into),
            comment: None,
        }
    }

    #[test]
    fn test_supplier_search_by_inn() {
        let s = supplier(1, "ООО Ромашка", Some("7701234567"));
        assert!(matches_search(&s, "770123"));
        assert!(matches_search(&s, "ромашка"));
        assert!(!matches_search(&s, "лютик"));
    }

    #[test]
    fn test_sort_by_optional_column() {
        let mut rows = vec![
            supplier(1, "Б", None),
            supplier(2, "А", Some("5000000000")),
            supplier(3, "В", Some("1000000000")),
        ];
        apply_sort(&mut rows, &SortState::new("inn"));
        assert_eq!(rows.iter().map(|s| s.id).collect::<Vec<_>>(), [3, 2, 1]);
    }
}
