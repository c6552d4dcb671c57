//! Shift close and split-payment arithmetic
//!
//! Pure calculations for the cash desk. All sums go through `Decimal`
//! (see [`crate::money`]) and are compared with a one-cent tolerance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::{MONEY_TOLERANCE, money_eq, to_decimal, to_f64};
use crate::models::{PayOrderRequest, PaymentMethod, PaymentPart, Shift};

// =============================================================================
// Shift reconciliation
// =============================================================================

/// Cash reconciliation of one shift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftSummary {
    pub opening_cash: f64,
    pub cash_sales: f64,
    pub card_sales: f64,
    pub cash_in: f64,
    pub cash_out: f64,
    pub refunds: f64,
    /// opening + cash sales + cash in − cash out − refunds
    pub expected_cash: f64,
    /// cash sales + card sales
    pub total_revenue: f64,
    pub counted_cash: Option<f64>,
    /// counted − expected; negative means a shortage
    pub variance: Option<f64>,
}

impl ShiftSummary {
    pub fn from_shift(shift: &Shift) -> Self {
        let expected = to_decimal(shift.opening_cash) + to_decimal(shift.cash_sales)
            + to_decimal(shift.cash_in)
            - to_decimal(shift.cash_out)
            - to_decimal(shift.refunds);
        let revenue = to_decimal(shift.cash_sales) + to_decimal(shift.card_sales);
        let mut summary = Self {
            opening_cash: shift.opening_cash,
            cash_sales: shift.cash_sales,
            card_sales: shift.card_sales,
            cash_in: shift.cash_in,
            cash_out: shift.cash_out,
            refunds: shift.refunds,
            expected_cash: to_f64(expected),
            total_revenue: to_f64(revenue),
            counted_cash: None,
            variance: None,
        };
        if let Some(counted) = shift.closing_cash {
            summary = summary.with_counted(counted);
        }
        summary
    }

    /// Difference between counted and expected cash
    pub fn variance(&self, counted: f64) -> f64 {
        to_f64(to_decimal(counted) - to_decimal(self.expected_cash))
    }

    /// Record the counted cash and its variance
    pub fn with_counted(mut self, counted: f64) -> Self {
        self.variance = Some(self.variance(counted));
        self.counted_cash = Some(counted);
        self
    }

    /// Whether the drawer matches within one cent
    pub fn is_balanced(&self) -> bool {
        self.variance
            .is_some_and(|v| to_decimal(v).abs() < MONEY_TOLERANCE)
    }
}

// =============================================================================
// Split payment
// =============================================================================

/// Why a payment cannot be submitted
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaymentError {
    #[error("Добавьте способ оплаты")]
    NoParts,

    #[error("Сумма оплаты должна быть больше нуля")]
    NonPositivePart,

    #[error("Оплата картой превышает сумму счёта")]
    CardExceedsTotal,

    #[error("Не хватает {remaining:.2} ₽")]
    Underpaid { remaining: f64 },

    #[error("Сумма оплаты превышает счёт на {excess:.2} ₽")]
    Overpaid { excess: f64 },

    #[error("Получено наличных меньше, чем к оплате наличными")]
    InsufficientCash,
}

/// Payment of one order, possibly split between cash and card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitPayment {
    total: f64,
    parts: Vec<PaymentPart>,
    /// Cash handed over by the guest
    tendered: Option<f64>,
}

impl SplitPayment {
    pub fn new(total: f64) -> Self {
        Self {
            total,
            parts: Vec::new(),
            tendered: None,
        }
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn parts(&self) -> &[PaymentPart] {
        &self.parts
    }

    pub fn tendered(&self) -> Option<f64> {
        self.tendered
    }

    pub fn add_part(&mut self, method: PaymentMethod, amount: f64) {
        self.parts.push(PaymentPart { method, amount });
    }

    /// Remove a part by index; out-of-range indices are ignored
    pub fn remove_part(&mut self, index: usize) -> Option<PaymentPart> {
        (index < self.parts.len()).then(|| self.parts.remove(index))
    }

    pub fn clear(&mut self) {
        self.parts.clear();
        self.tendered = None;
    }

    pub fn set_tendered(&mut self, tendered: Option<f64>) {
        self.tendered = tendered;
    }

    fn sum_by(&self, method: Option<PaymentMethod>) -> Decimal {
        self.parts
            .iter()
            .filter(|p| method.is_none_or(|m| p.method == m))
            .map(|p| to_decimal(p.amount))
            .sum()
    }

    pub fn paid_total(&self) -> f64 {
        to_f64(self.sum_by(None))
    }

    pub fn cash_total(&self) -> f64 {
        to_f64(self.sum_by(Some(PaymentMethod::Cash)))
    }

    pub fn card_total(&self) -> f64 {
        to_f64(self.sum_by(Some(PaymentMethod::Card)))
    }

    /// Amount still to be covered; never negative
    pub fn remaining(&self) -> f64 {
        to_f64((to_decimal(self.total) - self.sum_by(None)).max(Decimal::ZERO))
    }

    /// Change to give back: tendered cash minus the cash part, never negative
    pub fn change_due(&self) -> f64 {
        match self.tendered {
            Some(t) => to_f64((to_decimal(t) - self.sum_by(Some(PaymentMethod::Cash))).max(Decimal::ZERO)),
            None => 0.0,
        }
    }

    /// Cover whatever is left with one more part of `method`
    pub fn fill_remaining(&mut self, method: PaymentMethod) {
        let remaining = self.remaining();
        if remaining > 0.0 {
            self.add_part(method, remaining);
        }
    }

    pub fn validate(&self) -> Result<(), PaymentError> {
        if self.parts.is_empty() {
            return Err(PaymentError::NoParts);
        }
        if self.parts.iter().any(|p| !p.amount.is_finite() || p.amount <= 0.0) {
            return Err(PaymentError::NonPositivePart);
        }
        let total = to_decimal(self.total);
        let paid = self.sum_by(None);
        let card = self.sum_by(Some(PaymentMethod::Card));
        if card - total >= MONEY_TOLERANCE {
            return Err(PaymentError::CardExceedsTotal);
        }
        if !money_eq(paid, total) {
            return Err(if paid < total {
                PaymentError::Underpaid { remaining: to_f64(total - paid) }
            } else {
                PaymentError::Overpaid { excess: to_f64(paid - total) }
            });
        }
        if let Some(tendered) = self.tendered {
            let cash = self.sum_by(Some(PaymentMethod::Cash));
            if cash - to_decimal(tendered) >= MONEY_TOLERANCE {
                return Err(PaymentError::InsufficientCash);
            }
        }
        Ok(())
    }

    /// Validated request body for the pay endpoint
    pub fn to_request(&self, operation_id: impl Into<String>) -> Result<PayOrderRequest, PaymentError> {
        self.validate()?;
        Ok(PayOrderRequest {
            payments: self.parts.clone(),
            tendered: self.tendered,
            operation_id: operation_id.into(),
        })
    }
}
