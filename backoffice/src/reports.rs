//! Inventory movement report screen

use pos_client::{HttpClient, PosClient};
use shared::models::{Movement, StockBalance};
use shared::report::MovementTotals;
use shared::validation::{self, FieldErrors};
use shared::{MovementReport, MovementReportRow, ReportPeriod, aggregate_movement_report};

use crate::BackofficeResult;

/// Period typed into the report filter (`YYYY-MM-DD` or `DD.MM.YYYY`)
pub fn parse_period(from: &str, to: &str) -> Result<ReportPeriod, FieldErrors> {
    let mut errors = FieldErrors::new();
    let from = errors.check("from", validation::required_date(from));
    let to = errors.check("to", validation::required_date(to));
    if let (Some(from), Some(to)) = (from, to) {
        errors.check("to", validation::date_range(from, Some(to)));
        if let Ok(period) = ReportPeriod::new(from, to)
            && errors.is_empty()
        {
            return Ok(period);
        }
    }
    Err(errors)
}

/// Movement report of one period, for all warehouses or one
///
/// Stock and movements are fetched on [`load`](Self::load); changing the
/// period afterwards rebuilds from the fetched data.
#[derive(Debug, Clone, Default)]
pub struct MovementReportScreen {
    stock: Vec<StockBalance>,
    movements: Vec<Movement>,
    warehouse_id: Option<i64>,
    report: Option<MovementReport>,
    loading: bool,
    error: Option<String>,
}

impl MovementReportScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch stock and movements, then build the report
    pub async fn load<H: HttpClient>(
        &mut self,
        client: &PosClient<H>,
        period: ReportPeriod,
        warehouse_id: Option<i64>,
    ) -> BackofficeResult<&MovementReport> {
        self.loading = true;
        let fetched = tokio::try_join!(client.stock(warehouse_id), client.movements());
        self.loading = false;
        let (stock, movements) = match fetched {
            Ok(data) => data,
            Err(e) => {
                self.error = Some(e.user_message());
                self.report = None;
                return Err(e.into());
            }
        };
        tracing::debug!(
            stock = stock.len(),
            movements = movements.len(),
            warehouse_id = ?warehouse_id,
            "Report data loaded"
        );
        self.stock = stock;
        self.movements = movements;
        self.warehouse_id = warehouse_id;
        self.error = None;
        Ok(self.build(period))
    }

    /// Rebuild for another period from the data already fetched;
    /// `None` until the first successful [`load`](Self::load)
    pub fn set_period(&mut self, period: ReportPeriod) -> Option<&MovementReport> {
        if self.report.is_none() {
            return None;
        }
        Some(self.build(period))
    }

    fn build(&mut self, period: ReportPeriod) -> &MovementReport {
        let report = aggregate_movement_report(&self.stock, &self.movements, period, self.warehouse_id);
        self.report.insert(report)
    }

    pub fn report(&self) -> Option<&MovementReport> {
        self.report.as_ref()
    }

    pub fn rows(&self) -> &[MovementReportRow] {
        self.report.as_ref().map(|r| r.rows.as_slice()).unwrap_or_default()
    }

    pub fn totals(&self) -> MovementTotals {
        self.report.as_ref().map(MovementReport::totals).unwrap_or_default()
    }

    pub fn warehouse_id(&self) -> Option<i64> {
        self.warehouse_id
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
