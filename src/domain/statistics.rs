use crate::common::amount::Amount;

/// Count, total and mean of one day's amounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub count: usize,
    pub total: Amount,
    pub average: Amount,
}

impl Statistics {
    pub fn empty() -> Self {
        Self {
            count: 0,
            total: Amount::zero(),
            average: Amount::zero(),
        }
    }
}

/// One output row: a date with its statistics and median amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    pub date: String,
    pub statistics: Statistics,
    pub median: Amount,
}
