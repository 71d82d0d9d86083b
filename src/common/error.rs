#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(
        "missing input csv path. usage: daily_ledger <transactions.csv> [--best-effort] [--inclusive-range] [--from YYYY-MM-DD --days N]"
    )]
    MissingArg,
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("option {0} requires a value")]
    MissingOptionValue(String),
    #[error("failed to open input file: {0}")]
    OpenInput(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

/// Errors from ledger queries. Unknown dates are not errors; they aggregate to zero.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("invalid date `{date}`, expected YYYY-MM-DD")]
    InvalidDate { date: String },
    #[error("date range starting at {start} overflows after {days} days")]
    RangeOverflow { start: String, days: u64 },
}

/// Why a raw record was not accepted into the ledger.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` must be {expected}, got {found}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("date must not be empty")]
    EmptyDate,
    #[error("amount is not a finite decimal: {0}")]
    InvalidAmount(String),
    #[error("amount must be greater than zero, got {0}")]
    NonPositiveAmount(String),
}
