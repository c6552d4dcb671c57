use pos_client::{HttpClient, PosClient};
use rust_decimal::Decimal;
use shared::models::{Order, PaymentMethod};
use shared::money::{to_decimal, to_f64};
use shared::settlement::SplitPayment;
use uuid::Uuid;

use crate::{BackofficeError, BackofficeResult};

/// Paying one order
///
/// The operation id is fixed for the lifetime of the flow, so pressing
/// "pay" again after a lost response does not charge the guest twice.
#[derive(Debug, Clone)]
pub struct PaymentFlow {
    order_id: i64,
    order_number: String,
    payment: SplitPayment,
    operation_id: String,
    error: Option<String>,
    paid: Option<Order>,
}

impl PaymentFlow {
    /// Flow for the amount still due on the order
    pub fn new(order: &Order) -> Self {
        let due = (to_decimal(order.total) - to_decimal(order.paid_total)).max(Decimal::ZERO);
        Self {
            order_id: order.id,
            order_number: order.number.clone(),
            payment: SplitPayment::new(to_f64(due)),
            operation_id: Uuid::new_v4().to_string(),
            error: None,
            paid: None,
        }
    }

    pub fn order_id(&self) -> i64 {
        self.order_id
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    pub fn due(&self) -> f64 {
        self.payment.total()
    }

    pub fn payment(&self) -> &SplitPayment {
        &self.payment
    }

    /// Edit the split; clears the last error
    pub fn payment_mut(&mut self) -> &mut SplitPayment {
        self.error = None;
        &mut self.payment
    }

    /// Whole amount in cash, with the cash handed over by the guest
    pub fn cash(&mut self, tendered: Option<f64>) {
        let payment = self.payment_mut();
        payment.clear();
        payment.fill_remaining(PaymentMethod::Cash);
        payment.set_tendered(tendered);
    }

    /// Whole amount by card
    pub fn card(&mut self) {
        let payment = self.payment_mut();
        payment.clear();
        payment.fill_remaining(PaymentMethod::Card);
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The order as returned by the backend once paid
    pub fn paid_order(&self) -> Option<&Order> {
        self.paid.as_ref()
    }

    pub fn is_paid(&self) -> bool {
        self.paid.is_some()
    }

    /// Validate the split and submit it
    pub async fn pay<H: HttpClient>(&mut self, client: &PosClient<H>) -> BackofficeResult<&Order> {
        let request = match self.payment.to_request(self.operation_id.as_str()) {
            Ok(request) => request,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(BackofficeError::Payment(e));
            }
        };
        match client.pay_order(self.order_id, &request).await {
            Ok(order) => {
                tracing::info!(
                    order_id = self.order_id,
                    operation_id = %self.operation_id,
                    cash = self.payment.cash_total(),
                    card = self.payment.card_total(),
                    "Order paid"
                );
                self.error = None;
                Ok(&*self.paid.insert(order))
            }
            Err(e) => {
                tracing::warn!(order_id = self.order_id, error = %e, "Payment failed");
                self.error = Some(e.user_message());
                Err(e.into())
            }
        }
    }
}
