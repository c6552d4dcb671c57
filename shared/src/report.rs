//! Warehouse movement report
//!
//! Rolls supply / write-off documents up into per-item stock summaries
//! for a date range: opening balance, receipts, expenses and closing
//! balance, in quantity and money.
//!
//! The backend only knows *current* stock, so balances are derived
//! backwards: movements dated after the period are undone to get the
//! closing balance, then the period's net movement is undone to get the
//! opening balance. For every row `closing = opening + receipts - expenses`.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{MeasureUnit, Movement, MovementKind, StockBalance};
use crate::money::{QUANTITY_PLACES, to_decimal, to_f64, to_f64_dp};

/// Inclusive date range of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportPeriod {
    pub fn new(from: NaiveDate, to: NaiveDate) -> AppResult<Self> {
        if to < from {
            return Err(AppError::validation("Дата окончания раньше даты начала")
                .with_detail("from", from.to_string())
                .with_detail("to", to.to_string()));
        }
        Ok(Self { from, to })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// One item's line in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementReportRow {
    pub item_id: i64,
    pub item_name: String,
    pub unit: MeasureUnit,
    pub opening_qty: f64,
    pub opening_sum: f64,
    pub receipt_qty: f64,
    pub receipt_sum: f64,
    pub expense_qty: f64,
    pub expense_sum: f64,
    pub closing_qty: f64,
    pub closing_sum: f64,
    /// Weighted-average unit cost at the end of the period
    pub avg_cost: f64,
}

impl MovementReportRow {
    /// `closing = opening + receipts - expenses`, checked at quantity precision
    pub fn is_balanced(&self) -> bool {
        let q = |v: f64| to_decimal(v).round_dp(QUANTITY_PLACES);
        q(self.opening_qty) + q(self.receipt_qty) - q(self.expense_qty) == q(self.closing_qty)
    }
}

/// Money column totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementTotals {
    pub opening_sum: f64,
    pub receipt_sum: f64,
    pub expense_sum: f64,
    pub closing_sum: f64,
}

/// Aggregated movement report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementReport {
    pub period: ReportPeriod,
    pub warehouse_id: Option<i64>,
    pub rows: Vec<MovementReportRow>,
}

impl MovementReport {
    pub fn totals(&self) -> MovementTotals {
        let sum = |f: fn(&MovementReportRow) -> f64| {
            to_f64(self.rows.iter().map(|r| to_decimal(f(r))).sum())
        };
        MovementTotals {
            opening_sum: sum(|r| r.opening_sum),
            receipt_sum: sum(|r| r.receipt_sum),
            expense_sum: sum(|r| r.expense_sum),
            closing_sum: sum(|r| r.closing_sum),
        }
    }

    pub fn row(&self, item_id: i64) -> Option<&MovementReportRow> {
        self.rows.iter().find(|r| r.item_id == item_id)
    }
}

/// In-period ledger event of one item
struct Event {
    kind: MovementKind,
    quantity: Decimal,
    price: Decimal,
}

#[derive(Default)]
struct ItemAccumulator {
    name: String,
    unit: MeasureUnit,
    current_qty: Decimal,
    /// Stock of the warehouses holding a positive quantity
    positive_qty: Decimal,
    /// quantity × price of `positive_qty`, for the cross-warehouse average
    current_value: Decimal,
    /// Net quantity moved after the period end
    after_period_net: Decimal,
    events: Vec<Event>,
}

impl ItemAccumulator {
    fn seed_price(&self) -> Decimal {
        if self.positive_qty > Decimal::ZERO {
            self.current_value / self.positive_qty
        } else {
            Decimal::ZERO
        }
    }
}

fn signed(kind: MovementKind, quantity: Decimal) -> Decimal {
    match kind {
        MovementKind::Supply => quantity,
        MovementKind::WriteOff => -quantity,
    }
}

/// Build the movement report for `period`, optionally for one warehouse.
///
/// Items present only in movements start from zero stock. Movements
/// before the period are ignored; their effect is already part of the
/// derived opening balance.
pub fn aggregate_movement_report(
    stock: &[StockBalance],
    movements: &[Movement],
    period: ReportPeriod,
    warehouse_id: Option<i64>,
) -> MovementReport {
    let in_scope = |wh: i64| warehouse_id.is_none_or(|w| w == wh);
    let mut items: HashMap<i64, ItemAccumulator> = HashMap::new();

    for balance in stock.iter().filter(|b| in_scope(b.warehouse_id)) {
        let acc = items.entry(balance.item_id).or_default();
        acc.name.clone_from(&balance.item_name);
        acc.unit = balance.unit;
        let qty = to_decimal(balance.quantity);
        acc.current_qty += qty;
        if qty > Decimal::ZERO {
            acc.positive_qty += qty;
            acc.current_value += qty * to_decimal(balance.unit_price);
        }
    }

    let mut ordered: Vec<&Movement> = movements.iter().filter(|m| in_scope(m.warehouse_id)).collect();
    ordered.sort_by_key(|m| (m.date, m.id));

    for movement in ordered {
        let after = movement.date > period.to;
        let inside = period.contains(movement.date);
        if !after && !inside {
            continue;
        }
        for line in &movement.items {
            let acc = items.entry(line.item_id).or_insert_with(|| ItemAccumulator {
                name: line.item_name.clone(),
                unit: line.unit,
                ..Default::default()
            });
            let quantity = to_decimal(line.quantity);
            if after {
                acc.after_period_net += signed(movement.kind, quantity);
            } else {
                acc.events.push(Event {
                    kind: movement.kind,
                    quantity,
                    price: to_decimal(line.price),
                });
            }
        }
    }

    let mut rows: Vec<MovementReportRow> = items
        .into_iter()
        .map(|(item_id, acc)| build_row(item_id, acc))
        .collect();
    rows.sort_by(|a, b| {
        a.item_name
            .to_lowercase()
            .cmp(&b.item_name.to_lowercase())
            .then(a.item_id.cmp(&b.item_id))
    });

    tracing::debug!(
        from = %period.from,
        to = %period.to,
        warehouse_id = ?warehouse_id,
        rows = rows.len(),
        "Movement report aggregated"
    );

    MovementReport {
        period,
        warehouse_id,
        rows,
    }
}

/// One item's row. Quantities always satisfy
/// `closing = opening + receipts - expenses`.
///
/// The money columns satisfy the same identity only while the running
/// quantity stays non-negative. A receipt arriving on negative stock
/// averages from zero (the shortage carries no value), so for such an item
/// `closing_sum` differs from `opening_sum + receipt_sum - expense_sum`.
fn build_row(item_id: i64, acc: ItemAccumulator) -> MovementReportRow {
    let q = |d: Decimal| d.round_dp(QUANTITY_PLACES);

    let receipts: Decimal = acc
        .events
        .iter()
        .filter(|e| e.kind == MovementKind::Supply)
        .map(|e| e.quantity)
        .sum();
    let expenses: Decimal = acc
        .events
        .iter()
        .filter(|e| e.kind == MovementKind::WriteOff)
        .map(|e| e.quantity)
        .sum();

    let closing = q(acc.current_qty - acc.after_period_net);
    let (receipts, expenses) = (q(receipts), q(expenses));
    let opening = closing - receipts + expenses;

    // Roll the weighted-average cost forward through the period
    let opening_price = acc.seed_price();
    let mut running_qty = opening;
    let mut avg = opening_price;
    let mut receipt_sum = Decimal::ZERO;
    let mut expense_sum = Decimal::ZERO;
    for event in &acc.events {
        match event.kind {
            MovementKind::Supply => {
                let base = running_qty.max(Decimal::ZERO);
                let new_qty = base + event.quantity;
                if new_qty > Decimal::ZERO {
                    avg = (base * avg + event.quantity * event.price) / new_qty;
                }
                receipt_sum += event.quantity * event.price;
                running_qty += event.quantity;
            }
            MovementKind::WriteOff => {
                expense_sum += event.quantity * avg;
                running_qty -= event.quantity;
            }
        }
    }

    MovementReportRow {
        item_id,
        item_name: acc.name,
        unit: acc.unit,
        opening_qty: to_f64_dp(opening, QUANTITY_PLACES),
        opening_sum: to_f64(opening * opening_price),
        receipt_qty: to_f64_dp(receipts, QUANTITY_PLACES),
        receipt_sum: to_f64(receipt_sum),
        expense_qty: to_f64_dp(expenses, QUANTITY_PLACES),
        expense_sum: to_f64(expense_sum),
        closing_qty: to_f64_dp(closing, QUANTITY_PLACES),
        closing_sum: to_f64(closing * avg),
        avg_cost: to_f64(avg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovementLine;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn period(from: u32, to: u32) -> ReportPeriod {
        ReportPeriod::new(date(from), date(to)).unwrap()
    }

    fn balance(item_id: i64, name: &str, warehouse_id: i64, quantity: f64, unit_price: f64) -> StockBalance {
        StockBalance {
            item_id,
            item_name: name.into(),
            unit: MeasureUnit::Kg,
            warehouse_id,
            quantity,
            unit_price,
        }
    }

    fn movement(id: i64, kind: MovementKind, day: u32, warehouse_id: i64, lines: &[(i64, f64, f64)]) -> Movement {
        Movement {
            id,
            kind,
            date: date(day),
            warehouse_id,
            supplier_id: None,
            reason: None,
            items: lines
                .iter()
                .map(|&(item_id, quantity, price)| MovementLine {
                    item_id,
                    item_name: format!("item-{item_id}"),
                    unit: MeasureUnit::Kg,
                    quantity,
                    price,
                })
                .collect(),
        }
    }

    #[test]
    fn test_period_rejects_inverted_range() {
        assert!(ReportPeriod::new(date(10), date(9)).is_err());
        assert!(ReportPeriod::new(date(10), date(10)).is_ok());
    }

    #[test]
    fn test_basic_roll_forward() {
        let stock = vec![balance(1, "Картофель", 1, 30.0, 40.0)];
        let movements = vec![
            movement(1, MovementKind::Supply, 5, 1, &[(1, 20.0, 40.0)]),
            movement(2, MovementKind::WriteOff, 6, 1, &[(1, 5.0, 0.0)]),
        ];
        let report = aggregate_movement_report(&stock, &movements, period(1, 31), None);
        let row = report.row(1).unwrap();

        assert_eq!(row.closing_qty, 30.0);
        assert_eq!(row.receipt_qty, 20.0);
        assert_eq!(row.expense_qty, 5.0);
        assert_eq!(row.opening_qty, 15.0);
        assert_eq!(row.receipt_sum, 800.0);
        assert_eq!(row.expense_sum, 200.0);
        assert!(row.is_balanced());
    }

    #[test]
    fn test_movements_after_period_are_rolled_back() {
        let stock = vec![balance(1, "Мука", 1, 50.0, 30.0)];
        let movements = vec![
            movement(1, MovementKind::Supply, 10, 1, &[(1, 10.0, 30.0)]),
            // After the period: current stock includes these
            movement(2, MovementKind::Supply, 25, 1, &[(1, 25.0, 30.0)]),
            movement(3, MovementKind::WriteOff, 26, 1, &[(1, 5.0, 0.0)]),
        ];
        let report = aggregate_movement_report(&stock, &movements, period(1, 20), None);
        let row = report.row(1).unwrap();

        assert_eq!(row.closing_qty, 30.0);
        assert_eq!(row.receipt_qty, 10.0);
        assert_eq!(row.opening_qty, 20.0);
        assert!(row.is_balanced());
    }

    #[test]
    fn test_movements_before_period_ignored() {
        let stock = vec![balance(1, "Соль", 1, 8.0, 15.0)];
        let movements = vec![movement(1, MovementKind::Supply, 1, 1, &[(1, 100.0, 15.0)])];
        let report = aggregate_movement_report(&stock, &movements, period(10, 20), None);
        let row = report.row(1).unwrap();
        assert_eq!(row.opening_qty, 8.0);
        assert_eq!(row.closing_qty, 8.0);
        assert_eq!(row.receipt_qty, 0.0);
    }

    #[test]
    fn test_weighted_average_cost_on_receipt() {
        // 10 kg @ 100 on hand at start, +10 kg @ 200 → avg 150
        let stock = vec![balance(1, "Говядина", 1, 15.0, 100.0)];
        let movements = vec![
            movement(1, MovementKind::Supply, 2, 1, &[(1, 10.0, 200.0)]),
            movement(2, MovementKind::WriteOff, 3, 1, &[(1, 5.0, 0.0)]),
        ];
        let report = aggregate_movement_report(&stock, &movements, period(1, 31), None);
        let row = report.row(1).unwrap();

        assert_eq!(row.opening_qty, 10.0);
        assert_eq!(row.avg_cost, 150.0);
        assert_eq!(row.expense_sum, 750.0);
        assert_eq!(row.closing_sum, 2250.0);
    }

    #[test]
    fn test_item_only_in_movements_starts_at_zero() {
        let movements = vec![movement(1, MovementKind::Supply, 3, 1, &[(9, 2.5, 80.0)])];
        let report = aggregate_movement_report(&[], &movements, period(1, 31), None);
        let row = report.row(9).unwrap();
        assert_eq!(row.item_name, "item-9");
        assert_eq!(row.closing_qty, 0.0);
        assert_eq!(row.opening_qty, -2.5);
        assert!(row.is_balanced());
    }

    #[test]
    fn test_warehouse_filter() {
        let stock = vec![
            balance(1, "Молоко", 1, 10.0, 70.0),
            balance(1, "Молоко", 2, 4.0, 80.0),
        ];
        let movements = vec![
            movement(1, MovementKind::Supply, 5, 1, &[(1, 6.0, 70.0)]),
            movement(2, MovementKind::Supply, 5, 2, &[(1, 4.0, 80.0)]),
        ];

        let only_first = aggregate_movement_report(&stock, &movements, period(1, 31), Some(1));
        assert_eq!(only_first.row(1).unwrap().closing_qty, 10.0);
        assert_eq!(only_first.row(1).unwrap().receipt_qty, 6.0);

        let all = aggregate_movement_report(&stock, &movements, period(1, 31), None);
        let row = all.row(1).unwrap();
        assert_eq!(row.closing_qty, 14.0);
        assert_eq!(row.receipt_qty, 10.0);
        assert_eq!(row.opening_qty, 4.0);
    }

    #[test]
    fn test_negative_stock_does_not_inflate_average() {
        let stock = vec![
            balance(1, "Сливки", 1, 10.0, 100.0),
            balance(1, "Сливки", 2, -2.0, 50.0),
        ];
        let report = aggregate_movement_report(&stock, &[], period(1, 31), None);
        let row = report.row(1).unwrap();
        assert_eq!(row.closing_qty, 8.0);
        assert_eq!(row.avg_cost, 100.0);
        assert_eq!(row.closing_sum, 800.0);
    }

    #[test]
    fn test_receipt_on_negative_stock_values_shortage_at_zero() {
        let movements = vec![movement(1, MovementKind::Supply, 3, 1, &[(9, 2.5, 80.0)])];
        let report = aggregate_movement_report(&[], &movements, period(1, 31), None);
        let row = report.row(9).unwrap();
        assert!(row.is_balanced());
        assert_eq!(row.avg_cost, 80.0);
        assert_eq!(row.opening_sum, 0.0);
        assert_eq!(row.receipt_sum, 200.0);
        assert_eq!(row.closing_sum, 0.0);
    }

    #[test]
    fn test_rows_sorted_by_name() {
        let stock = vec![
            balance(1, "сахар", 1, 1.0, 1.0),
            balance(2, "Апельсин", 1, 1.0, 1.0),
            balance(3, "Лук", 1, 1.0, 1.0),
        ];
        let report = aggregate_movement_report(&stock, &[], period(1, 31), None);
        let names: Vec<_> = report.rows.iter().map(|r| r.item_name.as_str()).collect();
        assert_eq!(names, ["Апельсин", "Лук", "сахар"]);
    }

    #[test]
    fn test_closing_balance_identity_for_any_range() {
        let stock = vec![
            balance(1, "A", 1, 12.345, 10.0),
            balance(2, "B", 1, 0.0, 5.0),
            balance(3, "C", 2, 7.5, 3.3),
        ];
        let movements = vec![
            movement(1, MovementKind::Supply, 2, 1, &[(1, 3.333, 11.0), (2, 1.1, 5.0)]),
            movement(2, MovementKind::WriteOff, 4, 1, &[(1, 0.777, 0.0)]),
            movement(3, MovementKind::Supply, 9, 2, &[(3, 2.0, 3.0), (1, 0.5, 9.0)]),
            movement(4, MovementKind::WriteOff, 15, 1, &[(2, 2.2, 0.0)]),
            movement(5, MovementKind::Supply, 22, 1, &[(1, 4.0, 12.0)]),
            movement(6, MovementKind::WriteOff, 28, 2, &[(3, 1.25, 0.0)]),
        ];
        for from in 1..=28 {
            for to in from..=28 {
                for warehouse in [None, Some(1), Some(2)] {
                    let report = aggregate_movement_report(&stock, &movements, period(from, to), warehouse);
                    for row in &report.rows {
                        assert!(row.is_balanced(), "{from}..{to} {warehouse:?}: {row:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_totals() {
        let stock = vec![balance(1, "A", 1, 2.0, 10.0), balance(2, "B", 1, 3.0, 1.5)];
        let report = aggregate_movement_report(&stock, &[], period(1, 31), None);
        let totals = report.totals();
        assert_eq!(totals.opening_sum, 24.5);
        assert_eq!(totals.closing_sum, 24.5);
        assert_eq!(totals.receipt_sum, 0.0);
    }
}
