use shared::models::{Customer, CustomerCreate, CustomerGroup, CustomerGroupCreate};
use shared::validation::{self, FieldErrors, MAX_NAME_LEN, MAX_NOTE_LEN};

use super::{EntityForm, date_input, number_input, opt_text_input};

/// Customer card
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub birthday: String,
    pub group_id: Option<i64>,
    pub comment: String,
}

impl EntityForm for CustomerForm {
    type Record = Customer;

    fn from_record(c: &Customer) -> Self {
        Self {
            name: c.name.clone(),
            phone: opt_text_input(c.phone.as_ref()),
            email: opt_text_input(c.email.as_ref()),
            birthday: date_input(c.birthday),
            group_id: c.group_id,
            comment: opt_text_input(c.comment.as_ref()),
        }
    }

    fn build(&self) -> Result<CustomerCreate, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.check("name", validation::required_text(&self.name, MAX_NAME_LEN));
        let phone = errors.check("phone", validation::phone(&self.phone));
        let email = errors.check("email", validation::email(&self.email));
        let birthday = errors.check("birthday", validation::parse_date(&self.birthday));
        let comment = errors.check("comment", validation::optional_text(&self.comment, MAX_NOTE_LEN));

        match (name, phone, email, birthday, comment) {
            (Some(name), Some(phone), Some(email), Some(birthday), Some(comment)) => {
                Ok(CustomerCreate {
                    name,
                    phone,
                    email,
                    birthday,
                    group_id: self.group_id,
                    comment,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Customer group (discount tier)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerGroupForm {
    pub name: String,
    pub discount_percent: String,
    pub description: String,
}

impl EntityForm for CustomerGroupForm {
    type Record = CustomerGroup;

    fn from_record(g: &CustomerGroup) -> Self {
        Self {
            name: g.name.clone(),
            discount_percent: number_input(g.discount_percent),
            description: opt_text_input(g.description.as_ref()),
        }
    }

    fn build(&self) -> Result<CustomerGroupCreate, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.check("name", validation::required_text(&self.name, MAX_NAME_LEN));
        let discount_percent = errors.check(
            "discount_percent",
            validation::required_percent(&self.discount_percent),
        );
        let description = errors.check(
            "description",
            validation::optional_text(&self.description, MAX_NOTE_LEN),
        );

        match (name, discount_percent, description) {
            (Some(name), Some(discount_percent), Some(description)) => Ok(CustomerGroupCreate {
                name,
                discount_percent,
                description,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::validation::{MSG_PERCENT_RANGE, MSG_PHONE, MSG_REQUIRED};

    fn customer() -> Customer {
        Customer {
            id: 5,
            name: "Анна Петрова".into(),
            phone: Some("+7 999 123-45-67".into()),
            email: None,
            birthday: NaiveDate::from_ymd_opt(1992, 8, 3),
            group_id: Some(2),
            group_name: Some("VIP".into()),
            bonus_balance: 120.0,
            total_spent: 15_300.0,
            comment: None,
            created_at: None,
        }
    }

    #[test]
    fn test_customer_prefill() {
        let form = CustomerForm::from_record(&customer());
        assert_eq!(form.name, "Анна Петрова");
        assert_eq!(form.phone, "+7 999 123-45-67");
        assert_eq!(form.email, "");
        assert_eq!(form.birthday, "1992-08-03");
        assert_eq!(form.group_id, Some(2));
    }

    #[test]
    fn test_customer_prefill_builds_same_values() {
        let create = CustomerForm::from_record(&customer()).build().unwrap();
        assert_eq!(create.name, "Анна Петрова");
        assert_eq!(create.birthday, NaiveDate::from_ymd_opt(1992, 8, 3));
        assert_eq!(create.email, None);
    }

    #[test]
    fn test_customer_errors_per_field() {
        let form = CustomerForm {
            name: " ".into(),
            phone: "12".into(),
            birthday: "31.02.2020".into(),
            ..Default::default()
        };
        let errors = form.build().unwrap_err();
        assert_eq!(errors.get("name"), Some(MSG_REQUIRED));
        assert_eq!(errors.get("phone"), Some(MSG_PHONE));
        assert!(errors.contains("birthday"));
        assert!(!errors.contains("email"));
    }

    #[test]
    fn test_group_percent_out_of_range_is_rejected() {
        for bad in ["-0.5", "100.01", "250", "abc"] {
            let form = CustomerGroupForm {
                name: "Постоянные".into(),
                discount_percent: bad.into(),
                description: String::new(),
            };
            let errors = form.build().unwrap_err();
            assert!(errors.contains("discount_percent"), "{bad}");
        }
        let form = CustomerGroupForm {
            name: "Постоянные".into(),
            discount_percent: "101".into(),
            description: String::new(),
        };
        assert_eq!(form.build().unwrap_err().get("discount_percent"), Some(MSG_PERCENT_RANGE));
    }

    #[test]
    fn test_group_percent_bounds_inclusive() {
        for ok in ["0", "100", "7,5"] {
            let form = CustomerGroupForm {
                name: "Постоянные".into(),
                discount_percent: ok.into(),
                description: String::new(),
            };
            assert!(form.build().is_ok(), "{ok}");
        }
    }
}
