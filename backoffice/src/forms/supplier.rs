use shared::models::{Supplier, SupplierCreate};
use shared::validation::{self, FieldErrors, MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN};

use super::{EntityForm, opt_text_input};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub inn: String,
    pub comment: String,
}

impl EntityForm for SupplierForm {
    type Record = Supplier;

    fn from_record(s: &Supplier) -> Self {
        Self {
            name: s.name.clone(),
            phone: opt_text_input(s.phone.as_ref()),
            email: opt_text_input(s.email.as_ref()),
            address: opt_text_input(s.address.as_ref()),
            inn: opt_text_input(s.inn.as_ref()),
            comment: opt_text_input(s.comment.as_ref()),
        }
    }

    fn build(&self) -> Result<SupplierCreate, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.check("name", validation::required_text(&self.name, MAX_NAME_LEN));
        let phone = errors.check("phone", validation::phone(&self.phone));
        let email = errors.check("email", validation::email(&self.email));
        let address = errors.check("address", validation::optional_text(&self.address, MAX_ADDRESS_LEN));
        let inn = errors.check("inn", validation::inn(&self.inn));
        let comment = errors.check("comment", validation::optional_text(&self.comment, MAX_NOTE_LEN));

        match (name, phone, email, address, inn, comment) {
            (Some(name), Some(phone), Some(email), Some(address), Some(inn), Some(comment)) => {
                Ok(SupplierCreate {
                    name,
                    phone,
                    email,
                    address,
                    inn,
                    comment,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::validation::{MSG_EMAIL, MSG_INN};

    #[test]
    fn test_inn_and_email() {
        let mut form = SupplierForm {
            name: "ООО Овощебаза".into(),
            inn: "77071234".into(),
            email: "sales@".into(),
            ..Default::default()
        };
        let errors = form.build().unwrap_err();
        assert_eq!(errors.get("inn"), Some(MSG_INN));
        assert_eq!(errors.get("email"), Some(MSG_EMAIL));

        form.inn = "7707123456".into();
        form.email = "sales@ovoschi.ru".into();
        let create = form.build().unwrap();
        assert_eq!(create.inn.as_deref(), Some("7707123456"));
        assert_eq!(create.phone, None);
    }
}
