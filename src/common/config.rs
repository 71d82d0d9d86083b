use chrono::NaiveDate;

/// How a batch reacts to records that fail validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Any rejected record discards the whole batch.
    #[default]
    AllOrNothing,
    /// Valid records are committed regardless of rejected neighbours.
    BestEffort,
}

/// Whether `start + days` itself belongs to a date-range query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangeEnd {
    /// `start <= d < start + days`: a 7 day query covers 7 calendar days.
    #[default]
    Exclusive,
    /// `start <= d <= start + days`: a 7 day query covers 8 calendar days.
    Inclusive,
}

impl RangeEnd {
    pub fn admits(&self, date: NaiveDate, end: NaiveDate) -> bool {
        match self {
            RangeEnd::Exclusive => date < end,
            RangeEnd::Inclusive => date <= end,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerConfig {
    pub batch_policy: BatchPolicy,
    pub range_end: RangeEnd,
}

impl LedgerConfig {
    pub fn new(batch_policy: BatchPolicy, range_end: RangeEnd) -> Self {
        Self {
            batch_policy,
            range_end,
        }
    }
}
