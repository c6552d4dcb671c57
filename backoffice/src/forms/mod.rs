//! Entity form modals
//!
//! Each admin entity has a form struct holding the raw input values (as
//! typed by the operator) and an [`EntityForm`] impl that turns them into
//! a create payload or a set of field errors. [`FormModal`] drives the
//! open / edit / validate / submit cycle for any of them.

mod customer;
mod ingredient;
mod loyalty;
mod supplier;
mod technical_card;
mod transaction;
mod warehouse;

pub use customer::{CustomerForm, CustomerGroupForm};
pub use ingredient::IngredientForm;
pub use loyalty::{LoyaltyProgramForm, PromotionForm};
pub use supplier::SupplierForm;
pub use technical_card::{TechnicalCardForm, TechnicalCardLineInput};
pub use transaction::TransactionForm;
pub use warehouse::WarehouseForm;

use pos_client::{HttpClient, PosClient, Resource};
use shared::validation::FieldErrors;

use crate::{BackofficeError, BackofficeResult};

type CreateOf<F> = <<F as EntityForm>::Record as Resource>::Create;
type UpdateOf<F> = <<F as EntityForm>::Record as Resource>::Update;

/// Input state of one entity's form
pub trait EntityForm: Default + Clone {
    type Record: Resource + Clone;

    /// Form pre-populated with a record's current values
    fn from_record(record: &Self::Record) -> Self;

    /// Validate every field and build the create payload
    fn build(&self) -> Result<CreateOf<Self>, FieldErrors>;
}

/// Whether the modal creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(i64),
}

/// Modal dialog state around an entity form
#[derive(Debug, Clone, Default)]
pub struct FormModal<F: EntityForm> {
    open: bool,
    mode: FormMode,
    form: F,
    errors: FieldErrors,
    submit_error: Option<String>,
}

impl<F: EntityForm> FormModal<F> {
    pub fn new() -> Self {
        Self {
            open: false,
            mode: FormMode::Create,
            form: F::default(),
            errors: FieldErrors::new(),
            submit_error: None,
        }
    }

    /// Open with an empty form
    pub fn open_create(&mut self) {
        self.reset();
        self.open = true;
    }

    /// Open with the record's current values
    pub fn open_edit(&mut self, record: &F::Record) {
        self.reset();
        self.form = F::from_record(record);
        self.mode = FormMode::Edit(record.id());
        self.open = true;
    }

    /// Close and reset the form to its defaults
    pub fn close(&mut self) {
        self.reset();
        self.open = false;
    }

    fn reset(&mut self) {
        self.form = F::default();
        self.mode = FormMode::Create;
        self.errors.clear();
        self.submit_error = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error message of the field, for display under the input
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    /// Error of the last submit, shown at the bottom of the modal
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Validate the form, storing field errors; `true` when valid
    pub fn validate(&mut self) -> bool {
        match self.form.build() {
            Ok(_) => {
                self.errors.clear();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// Validate and save. Invalid forms never reach the backend. On
    /// success the modal closes and the saved record is returned.
    pub async fn submit<H: HttpClient>(&mut self, client: &PosClient<H>) -> BackofficeResult<F::Record>
    where
        CreateOf<F>: Into<UpdateOf<F>>,
    {
        self.submit_error = None;
        let payload = match self.form.build() {
            Ok(payload) => {
                self.errors.clear();
                payload
            }
            Err(errors) => {
                self.errors = errors.clone();
                return Err(BackofficeError::Validation(errors));
            }
        };

        let saved = match self.mode {
            FormMode::Create => client.create::<F::Record>(&payload).await,
            FormMode::Edit(id) => client.update::<F::Record>(id, &payload.into()).await,
        };

        match saved {
            Ok(record) => {
                self.close();
                Ok(record)
            }
            Err(e) => {
                tracing::warn!(mode = ?self.mode, error = %e, "Form submit failed");
                self.submit_error = Some(e.user_message());
                Err(e.into())
            }
        }
    }
}

/// Text input value of a number: `15` rather than `15.0`
pub(crate) fn number_input(value: f64) -> String {
    value.to_string()
}

pub(crate) fn opt_number_input(value: Option<f64>) -> String {
    value.map(number_input).unwrap_or_default()
}

pub(crate) fn opt_text_input(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

pub(crate) fn date_input(value: Option<chrono::NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_input() {
        assert_eq!(number_input(15.0), "15");
        assert_eq!(number_input(12.5), "12.5");
        assert_eq!(opt_number_input(None), "");
    }

    #[test]
    fn test_modal_lifecycle() {
        let mut modal: FormModal<CustomerGroupForm> = FormModal::new();
        modal.open_create();
        assert!(modal.is_open());
        assert_eq!(modal.mode(), FormMode::Create);

        modal.form_mut().name = "VIP".into();
        modal.form_mut().discount_percent = "150".into();
        assert!(!modal.validate());
        assert!(modal.field_error("discount_percent").is_some());

        modal.close();
        assert!(!modal.is_open());
        assert!(modal.errors().is_empty());
        assert_eq!(modal.form().name, "");
    }
}
