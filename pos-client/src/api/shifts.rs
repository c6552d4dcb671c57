use shared::models::{Shift, ShiftEnd, ShiftOpen};

use super::PosClient;
use crate::{ClientError, ClientResult, HttpClient};

impl<H: HttpClient> PosClient<H> {
    /// Open shift of the logged-in cashier, `None` when there is none
    pub async fn active_shift(&self) -> ClientResult<Option<Shift>> {
        match self.http.get::<Option<Shift>>("shifts/me/active").await {
            Ok(shift) => Ok(shift),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn open_shift(&self, opening_cash: f64) -> ClientResult<Shift> {
        let req = ShiftOpen {
            opening_cash,
            note: None,
        };
        let shift: Shift = self.http.post("shifts", &req).await?;
        tracing::info!(shift_id = shift.id, opening_cash, "Shift opened");
        Ok(shift)
    }

    /// Close the active shift with the counted drawer cash
    pub async fn end_shift(&self, closing_cash: f64) -> ClientResult<Shift> {
        let req = ShiftEnd {
            closing_cash,
            note: None,
        };
        let shift: Shift = self.http.post("shifts/end", &req).await?;
        tracing::info!(shift_id = shift.id, closing_cash, "Shift closed");
        Ok(shift)
    }
}
