use chrono::NaiveDate;

use crate::common::amount::Amount;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated transaction as stored by the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: String,
    pub amount: Amount,
    pub description: String,
}

impl Transaction {
    pub fn new(date: impl Into<String>, amount: Amount, description: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            amount,
            description: description.into(),
        }
    }

    /// The calendar date, if the stored date string is ISO formatted.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}
