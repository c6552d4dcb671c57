use pos_client::{HttpClient, PosClient};
use shared::models::Shift;
use shared::settlement::ShiftSummary;
use shared::validation;

use super::field_error;
use crate::{BackofficeError, BackofficeResult};

/// The logged-in cashier's shift
#[derive(Debug, Clone, Default)]
pub struct ShiftSession {
    shift: Option<Shift>,
    /// Summary of the shift closed last in this session
    last_summary: Option<ShiftSummary>,
    error: Option<String>,
}

impl ShiftSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift(&self) -> Option<&Shift> {
        self.shift.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.shift.as_ref().is_some_and(Shift::is_open)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_summary(&self) -> Option<&ShiftSummary> {
        self.last_summary.as_ref()
    }

    /// Running reconciliation of the open shift
    pub fn summary(&self) -> Option<ShiftSummary> {
        self.shift.as_ref().map(ShiftSummary::from_shift)
    }

    fn fail<T>(&mut self, err: BackofficeError) -> BackofficeResult<T> {
        self.error = Some(match &err {
            BackofficeError::Validation(errors) => errors
                .iter()
                .next()
                .map(|(_, message)| message.to_string())
                .unwrap_or_else(|| err.user_message()),
            _ => err.user_message(),
        });
        Err(err)
    }

    /// Fetch the cashier's open shift, if any
    pub async fn load<H: HttpClient>(&mut self, client: &PosClient<H>) -> BackofficeResult<Option<&Shift>> {
        match client.active_shift().await {
            Ok(shift) => {
                self.shift = shift;
                self.error = None;
                Ok(self.shift.as_ref())
            }
            Err(e) => self.fail(e.into()),
        }
    }

    /// Open a shift with the cash counted into the drawer
    pub async fn open<H: HttpClient>(&mut self, client: &PosClient<H>, opening_cash: &str) -> BackofficeResult<&Shift> {
        let cash = match validation::required_number(opening_cash).and_then(validation::non_negative) {
            Ok(cash) => cash,
            Err(message) => return self.fail(field_error("opening_cash", message)),
        };
        match client.open_shift(cash).await {
            Ok(shift) => {
                tracing::info!(shift_id = shift.id, opening_cash = cash, "Shift opened");
                self.error = None;
                Ok(&*self.shift.insert(shift))
            }
            Err(e) => self.fail(e.into()),
        }
    }

    /// Close the open shift with the counted drawer cash and return its
    /// reconciliation
    pub async fn close<H: HttpClient>(
        &mut self,
        client: &PosClient<H>,
        counted_cash: &str,
    ) -> BackofficeResult<ShiftSummary> {
        if !self.is_open() {
            return self.fail(BackofficeError::NoActiveShift);
        }
        let counted = match validation::required_number(counted_cash).and_then(validation::non_negative) {
            Ok(counted) => counted,
            Err(message) => return self.fail(field_error("closing_cash", message)),
        };
        match client.end_shift(counted).await {
            Ok(closed) => {
                let mut summary = ShiftSummary::from_shift(&closed);
                if summary.counted_cash.is_none() {
                    summary = summary.with_counted(counted);
                }
                tracing::info!(
                    shift_id = closed.id,
                    expected = summary.expected_cash,
                    counted,
                    variance = ?summary.variance,
                    "Shift closed"
                );
                self.shift = None;
                self.error = None;
                self.last_summary = Some(summary.clone());
                Ok(summary)
            }
            Err(e) => self.fail(e.into()),
        }
    }
}
