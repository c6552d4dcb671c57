use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use shared::models::{Transaction, TransactionCreate, TransactionKind};
use shared::validation::{self, FieldErrors, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MSG_DATE, MSG_REQUIRED};

use super::{EntityForm, number_input, opt_text_input};

const DATETIME_INPUT: &str = "%Y-%m-%d %H:%M";

/// Finance transaction; times are entered and shown in UTC
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionForm {
    pub kind: TransactionKind,
    pub amount: String,
    pub account: String,
    pub to_account: String,
    pub category: String,
    pub comment: String,
    /// `YYYY-MM-DD HH:MM`, or just a date for midnight
    pub occurred_at: String,
}

fn parse_occurred_at(value: &str) -> Result<DateTime<Utc>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MSG_REQUIRED.to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, DATETIME_INPUT) {
        return Ok(dt.and_utc());
    }
    match validation::parse_date(trimmed) {
        Ok(Some(date)) => Ok(date.and_time(NaiveTime::MIN).and_utc()),
        _ => Err(MSG_DATE.to_string()),
    }
}

impl EntityForm for TransactionForm {
    type Record = Transaction;

    fn from_record(t: &Transaction) -> Self {
        Self {
            kind: t.kind,
            amount: number_input(t.amount),
            account: t.account.clone(),
            to_account: opt_text_input(t.to_account.as_ref()),
            category: opt_text_input(t.category.as_ref()),
            comment: opt_text_input(t.comment.as_ref()),
            occurred_at: t.occurred_at.format(DATETIME_INPUT).to_string(),
        }
    }

    fn build(&self) -> Result<TransactionCreate, FieldErrors> {
        let mut errors = FieldErrors::new();
        let amount = errors.check(
            "amount",
            validation::required_number(&self.amount).and_then(validation::positive),
        );
        let account = errors.check("account", validation::required_text(&self.account, MAX_SHORT_TEXT_LEN));
        let to_account = match self.kind {
            TransactionKind::Transfer => errors
                .check("to_account", validation::required_text(&self.to_account, MAX_SHORT_TEXT_LEN))
                .map(Some),
            // Only transfers have a destination
            _ => Some(None),
        };
        if let (Some(from), Some(Some(to))) = (&account, &to_account)
            && from == to
        {
            errors.add("to_account", "Счёт получателя совпадает со счётом списания");
        }
        let category = errors.check("category", validation::optional_text(&self.category, MAX_SHORT_TEXT_LEN));
        let comment = errors.check("comment", validation::optional_text(&self.comment, MAX_NOTE_LEN));
        let occurred_at = errors.check("occurred_at", parse_occurred_at(&self.occurred_at));

        match (amount, account, to_account, category, comment, occurred_at) {
            (Some(amount), Some(account), Some(to_account), Some(category), Some(comment), Some(occurred_at))
                if errors.is_empty() =>
            {
                Ok(TransactionCreate {
                    kind: self.kind,
                    amount,
                    account,
                    to_account,
                    category,
                    comment,
                    occurred_at,
                })
            }
            _ => Err(errors),
        }
    }
}
