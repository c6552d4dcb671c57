//! Form input validation
//!
//! Checks run synchronously before a form is submitted. Each check takes
//! the raw text the operator typed and either returns the parsed value or
//! a user-facing (Russian) message. [`FieldErrors`] collects the messages
//! per field; a form with any error is not submitted.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: customer, ingredient, supplier, warehouse, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Comments and descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone, category, account name
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Messages ────────────────────────────────────────────────────────

pub const MSG_REQUIRED: &str = "Обязательное поле";
pub const MSG_NOT_A_NUMBER: &str = "Введите число";
pub const MSG_PERCENT_RANGE: &str = "Значение должно быть от 0 до 100";
pub const MSG_NEGATIVE: &str = "Значение не может быть отрицательным";
pub const MSG_NOT_POSITIVE: &str = "Значение должно быть больше нуля";
pub const MSG_EMAIL: &str = "Некорректный email";
pub const MSG_PHONE: &str = "Некорректный номер телефона";
pub const MSG_INN: &str = "ИНН должен содержать 10 или 12 цифр";
pub const MSG_PIN: &str = "PIN-код должен содержать от 4 до 6 цифр";
pub const MSG_DATE: &str = "Некорректная дата";
pub const MSG_DATE_RANGE: &str = "Дата окончания раньше даты начала";
pub const MSG_FORM_INVALID: &str = "Проверьте правильность заполнения полей";

fn too_long(max_len: usize) -> String {
    format!("Не более {max_len} символов")
}

/// Field name → first error message for that field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first message for a field wins
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Unwrap a check result, recording its message under `field` on failure
    pub fn check<T>(&mut self, field: &str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.add(field, message);
                None
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when empty, otherwise a validation [`AppError`] carrying every field
    pub fn into_result(self) -> AppResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        Err(self
            .0
            .into_iter()
            .fold(AppError::validation(MSG_FORM_INVALID), |err, (field, msg)| {
                err.with_detail(field, msg)
            }))
    }
}

// ── Text ────────────────────────────────────────────────────────────

/// Non-empty text within the length limit, trimmed
pub fn required_text(value: &str, max_len: usize) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MSG_REQUIRED.to_string());
    }
    if trimmed.chars().count() > max_len {
        return Err(too_long(max_len));
    }
    Ok(trimmed.to_string())
}

/// Optional text: blank becomes `None`, otherwise trimmed and length-checked
pub fn optional_text(value: &str, max_len: usize) -> Result<Option<String>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.chars().count() > max_len {
        return Err(too_long(max_len));
    }
    Ok(Some(trimmed.to_string()))
}

// ── Numbers ─────────────────────────────────────────────────────────

/// Parse a number typed with either `.` or `,` as decimal separator.
/// Blank input is `None`; spaces used as thousands separators are ignored.
pub fn parse_number(value: &str) -> Result<Option<f64>, String> {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return Ok(None);
    }
    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(MSG_NOT_A_NUMBER.to_string()),
    }
}

/// A number that must be present
pub fn required_number(value: &str) -> Result<f64, String> {
    parse_number(value)?.ok_or_else(|| MSG_REQUIRED.to_string())
}

/// Percentage in the inclusive range `[0, 100]`
pub fn percent(value: f64) -> Result<f64, String> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(MSG_PERCENT_RANGE.to_string());
    }
    Ok(value)
}

/// Required percentage typed as text
pub fn required_percent(value: &str) -> Result<f64, String> {
    percent(required_number(value)?)
}

pub fn non_negative(value: f64) -> Result<f64, String> {
    if value < 0.0 {
        return Err(MSG_NEGATIVE.to_string());
    }
    Ok(value)
}

pub fn positive(value: f64) -> Result<f64, String> {
    if value <= 0.0 {
        return Err(MSG_NOT_POSITIVE.to_string());
    }
    Ok(value)
}

// ── Formats ─────────────────────────────────────────────────────────

/// Optional email: one `@`, non-empty local part, dotted domain, no spaces
pub fn email(value: &str) -> Result<Option<String>, String> {
    let Some(trimmed) = optional_text(value, MAX_EMAIL_LEN)? else {
        return Ok(None);
    };
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !trimmed.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid { Ok(Some(trimmed)) } else { Err(MSG_EMAIL.to_string()) }
}

/// Optional phone: digits with optional leading `+`, spaces, dashes and
/// parentheses; 10 to 15 digits in total
pub fn phone(value: &str) -> Result<Option<String>, String> {
    let Some(trimmed) = optional_text(value, MAX_SHORT_TEXT_LEN)? else {
        return Ok(None);
    };
    let allowed = trimmed
        .char_indices()
        .all(|(i, c)| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')') || (c == '+' && i == 0));
    let digits = trimmed.chars().filter(char::is_ascii_digit).count();
    if allowed && (10..=15).contains(&digits) {
        Ok(Some(trimmed))
    } else {
        Err(MSG_PHONE.to_string())
    }
}

/// Optional taxpayer number: exactly 10 or 12 digits
pub fn inn(value: &str) -> Result<Option<String>, String> {
    let Some(trimmed) = optional_text(value, MAX_SHORT_TEXT_LEN)? else {
        return Ok(None);
    };
    if trimmed.chars().all(|c| c.is_ascii_digit()) && matches!(trimmed.len(), 10 | 12) {
        Ok(Some(trimmed))
    } else {
        Err(MSG_INN.to_string())
    }
}

/// Cash-desk PIN: 4 to 6 digits
pub fn pin(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MSG_REQUIRED.to_string());
    }
    if (4..=6).contains(&trimmed.len()) && trimmed.chars().all(|c| c.is_ascii_digit()) {
        Ok(trimmed.to_string())
    } else {
        Err(MSG_PIN.to_string())
    }
}

// ── Dates ───────────────────────────────────────────────────────────

/// Optional date in `YYYY-MM-DD` or `DD.MM.YYYY`
pub fn parse_date(value: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d.%m.%Y"))
        .map(Some)
        .map_err(|_| MSG_DATE.to_string())
}

/// A date that must be present
pub fn required_date(value: &str) -> Result<NaiveDate, String> {
    parse_date(value)?.ok_or_else(|| MSG_REQUIRED.to_string())
}

/// End date, if any, must not be before the start date
pub fn date_range(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), String> {
    match end {
        Some(end) if end < start => Err(MSG_DATE_RANGE.to_string()),
        _ => Ok(()),
    }
}
