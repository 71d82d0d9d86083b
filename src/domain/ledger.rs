use std::collections::{BTreeSet, HashMap};

use chrono::{Days, NaiveDate};

use crate::{
    common::{
        amount::Amount,
        config::LedgerConfig,
        error::{LedgerError, Rejection},
        record::RawRecord,
    },
    domain::{
        statistics::{DailySummary, Statistics},
        transaction::{DATE_FORMAT, Transaction},
    },
    worker::{
        calculator,
        processor::{BatchReport, Processor},
        validator,
    },
};

/// In-memory store of accepted transactions with per-day running totals and
/// a per-day statistics cache.
///
/// Queries hand out owned copies, so nothing a caller does to a result can
/// reach the stored records.
///
/// # Examples
/// ```
/// use daily_ledger::common::{amount::Amount, record::RawRecord};
/// use daily_ledger::domain::ledger::Ledger;
///
/// let mut ledger = Ledger::new();
/// let rec = RawRecord::new()
///     .with("date", "2024-01-01")
///     .with("amount", 0.1)
///     .with("description", "tea");
/// assert!(ledger.add(&rec));
/// assert!(ledger.add(&rec.clone().with("amount", 0.2)));
/// assert!(!ledger.add(&rec.clone().with("amount", -1)));
///
/// assert_eq!(ledger.daily_total("2024-01-01"), "0.3".parse::<Amount>().unwrap());
/// assert_eq!(ledger.statistics("2024-01-01").count, 2);
/// ```
#[derive(Debug, Default)]
pub struct Ledger {
    config: LedgerConfig,
    records: Vec<Transaction>,
    daily_totals: HashMap<String, Amount>,
    stats_cache: HashMap<String, Statistics>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
            daily_totals: HashMap::new(),
            stats_cache: HashMap::new(),
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validates and stores `record`. Returns `false`, changing nothing, if
    /// the record is rejected.
    pub fn add(&mut self, record: &RawRecord) -> bool {
        self.insert(record).is_ok()
    }

    /// Like [`Ledger::add`] but reports the stored transaction or the reason
    /// for rejection.
    pub fn insert(&mut self, record: &RawRecord) -> Result<Transaction, Rejection> {
        match validator::check(record) {
            Ok(tx) => {
                self.commit(tx.clone());
                Ok(tx)
            }
            Err(reason) => {
                tracing::warn!("rejected transaction: {reason}");
                Err(reason)
            }
        }
    }

    /// Appends an already validated transaction, keeping the running total
    /// and statistics cache for its date consistent.
    pub(crate) fn commit(&mut self, tx: Transaction) {
        let total = self.daily_totals.entry(tx.date.clone()).or_default();
        *total += &tx.amount;

        if self.stats_cache.remove(&tx.date).is_some() {
            tracing::debug!(date = %tx.date, "statistics cache invalidated");
        }

        tracing::debug!(date = %tx.date, amount = %tx.amount, "transaction stored");
        self.records.push(tx);
    }

    pub fn daily_total(&self, date: &str) -> Amount {
        self.daily_totals.get(date).cloned().unwrap_or_default()
    }

    pub fn all(&self) -> Vec<Transaction> {
        self.records.clone()
    }

    pub fn by_date(&self, date: &str) -> Vec<Transaction> {
        self.records
            .iter()
            .filter(|t| t.date == date)
            .cloned()
            .collect()
    }

    /// Transactions dated from `start_date` up to `start_date + days`.
    ///
    /// Whether the end date itself is included depends on the configured
    /// [`RangeEnd`](crate::common::config::RangeEnd); by default it is not.
    pub fn by_range(&self, start_date: &str, days: u64) -> Result<Vec<Transaction>, LedgerError> {
        let start = NaiveDate::parse_from_str(start_date, DATE_FORMAT).map_err(|_| {
            LedgerError::InvalidDate {
                date: start_date.to_string(),
            }
        })?;
        let end = start
            .checked_add_days(Days::new(days))
            .ok_or_else(|| LedgerError::RangeOverflow {
                start: start_date.to_string(),
                days,
            })?;

        let range_end = self.config.range_end;
        Ok(self
            .records
            .iter()
            .filter(|t| match t.calendar_date() {
                Some(d) => d >= start && range_end.admits(d, end),
                None => false,
            })
            .cloned()
            .collect())
    }

    pub fn median(&self, date: &str) -> Amount {
        calculator::median(&self.amounts_on(date))
    }

    pub fn process_batch(&mut self, records: &[RawRecord]) -> BatchReport {
        Processor::new(self.config.batch_policy).process(self, records)
    }

    /// Count, total and average for `date`, served from cache when possible.
    pub fn statistics(&mut self, date: &str) -> Statistics {
        if let Some(cached) = self.stats_cache.get(date) {
            return cached.clone();
        }

        let amounts = self.amounts_on(date);
        if amounts.is_empty() {
            return Statistics::empty();
        }

        let stats = Statistics {
            count: amounts.len(),
            total: calculator::total(&amounts),
            average: calculator::average(&amounts),
        };
        self.stats_cache.insert(date.to_string(), stats.clone());
        stats
    }

    pub fn summary(&mut self, date: &str) -> DailySummary {
        DailySummary {
            date: date.to_string(),
            statistics: self.statistics(date),
            median: self.median(date),
        }
    }

    /// Distinct dates with at least one transaction, ascending.
    pub fn dates(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|t| t.date.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn amounts_on(&self, date: &str) -> Vec<Amount> {
        self.records
            .iter()
            .filter(|t| t.date == date)
            .map(|t| t.amount.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::{BatchPolicy, RangeEnd};

    fn amt(s: &str) -> Amount {
        s.parse().unwrap()
    }

    fn record(date: &str, amount: &str) -> RawRecord {
        RawRecord::new()
            .with("date", date)
            .with("amount", amt(amount).into_decimal())
            .with("description", "test")
    }

    fn eight_days(ledger: &mut Ledger) {
        for day in 1..=8 {
            assert!(ledger.add(&record(&format!("2024-01-0{day}"), "100")));
        }
    }

    #[test]
    fn add_updates_running_total_exactly() {
        let mut ledger = Ledger::new();
        assert!(ledger.add(&record("2024-01-01", "0.1")));
        assert!(ledger.add(&RawRecord::new()
            .with("date", "2024-01-01")
            .with("amount", 0.2)
            .with("description", "float")));
        assert!(ledger.add(&record("2024-01-02", "5")));

        assert_eq!(ledger.daily_total("2024-01-01"), amt("0.3"));
        assert_eq!(ledger.daily_total("2024-01-02"), amt("5"));
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn running_total_matches_recomputation() {
        let mut ledger = Ledger::new();
        for (date, amount) in [
            ("2024-01-01", "10.10"),
            ("2024-01-01", "0.05"),
            ("2024-01-02", "7"),
            ("2024-01-01", "3.333"),
        ] {
            assert!(ledger.add(&record(date, amount)));
        }
        for date in ledger.dates() {
            let amounts: Vec<Amount> = ledger.by_date(&date).into_iter().map(|t| t.amount).collect();
            assert_eq!(ledger.daily_total(&date), calculator::total(&amounts));
        }
    }

    #[test]
    fn rejected_add_changes_nothing() {
        let mut ledger = Ledger::new();
        assert!(ledger.add(&record("2024-01-01", "100")));
        let stats = ledger.statistics("2024-01-01");

        let bad = record("2024-01-01", "-100");
        let before = bad.clone();
        assert!(!ledger.add(&bad));

        assert_eq!(bad, before);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.daily_total("2024-01-01"), amt("100"));
        assert_eq!(ledger.statistics("2024-01-01"), stats);
    }

    #[test]
    fn insert_reports_rejection_reason() {
        let mut ledger = Ledger::new();
        let mut rec = record("2024-01-01", "1");
        rec.remove("description");
        assert_eq!(
            ledger.insert(&rec),
            Err(Rejection::MissingField("description"))
        );
    }

    #[test]
    fn unseen_date_aggregates_to_zero() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.daily_total("2030-01-01"), Amount::zero());
        assert_eq!(ledger.median("2030-01-01"), Amount::zero());
        assert_eq!(ledger.statistics("2030-01-01"), Statistics::empty());
        assert!(ledger.by_date("2030-01-01").is_empty());
    }

    #[test]
    fn query_results_are_copies() {
        let mut ledger = Ledger::new();
        assert!(ledger.add(&record("2024-01-01", "100")));

        let mut all = ledger.all();
        all[0].amount = amt("999");
        all.clear();

        let mut by_date = ledger.by_date("2024-01-01");
        by_date[0].description.push_str(" (edited)");

        let stored = ledger.by_date("2024-01-01");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].amount, amt("100"));
        assert_eq!(stored[0].description, "test");
    }

    #[test]
    fn statistics_are_refreshed_after_add() {
        let mut ledger = Ledger::new();
        assert!(ledger.add(&record("2024-01-01", "100")));
        let first = ledger.statistics("2024-01-01");
        assert_eq!(first.count, 1);

        assert!(ledger.add(&record("2024-01-01", "200")));
        let second = ledger.statistics("2024-01-01");
        assert_eq!(second.count, 2);
        assert_eq!(second.total, amt("300"));
        assert_eq!(second.average, amt("150"));
    }

    #[test]
    fn statistics_for_other_dates_stay_cached() {
        let mut ledger = Ledger::new();
        assert!(ledger.add(&record("2024-01-01", "100")));
        ledger.statistics("2024-01-01");
        assert!(ledger.add(&record("2024-01-02", "5")));

        assert!(ledger.stats_cache.contains_key("2024-01-01"));
        assert!(!ledger.stats_cache.contains_key("2024-01-02"));
    }

    #[test]
    fn median_over_date() {
        let mut ledger = Ledger::new();
        for a in ["40", "10", "30", "20"] {
            assert!(ledger.add(&record("2024-01-01", a)));
        }
        assert_eq!(ledger.median("2024-01-01"), amt("25"));

        assert!(ledger.add(&record("2024-01-01", "50")));
        assert_eq!(ledger.median("2024-01-01"), amt("30"));
    }

    #[test]
    fn by_range_excludes_end_by_default() {
        let mut ledger = Ledger::new();
        eight_days(&mut ledger);

        let week = ledger.by_range("2024-01-01", 7).unwrap();
        assert_eq!(week.len(), 7);
        assert!(week.iter().all(|t| t.date.as_str() < "2024-01-08"));
    }

    #[test]
    fn by_range_includes_end_when_configured() {
        let mut ledger = Ledger::with_config(LedgerConfig::new(
            BatchPolicy::AllOrNothing,
            RangeEnd::Inclusive,
        ));
        eight_days(&mut ledger);

        assert_eq!(ledger.by_range("2024-01-01", 7).unwrap().len(), 8);
        assert_eq!(ledger.by_range("2024-01-03", 0).unwrap().len(), 1);
    }

    #[test]
    fn by_range_skips_unparseable_dates_and_rejects_bad_start() {
        let mut ledger = Ledger::new();
        assert!(ledger.add(&record("someday", "1")));
        assert!(ledger.add(&record("2024-01-02", "1")));

        assert_eq!(ledger.by_range("2024-01-01", 3).unwrap().len(), 1);
        assert_eq!(
            ledger.by_range("01/01/2024", 3),
            Err(LedgerError::InvalidDate {
                date: "01/01/2024".to_string()
            })
        );
        assert!(matches!(
            ledger.by_range("2024-01-01", u64::MAX),
            Err(LedgerError::RangeOverflow { .. })
        ));
    }

    #[test]
    fn dates_are_distinct_and_sorted() {
        let mut ledger = Ledger::new();
        for d in ["2024-01-03", "2024-01-01", "2024-01-03"] {
            assert!(ledger.add(&record(d, "1")));
        }
        assert_eq!(ledger.dates(), vec!["2024-01-01", "2024-01-03"]);
    }

    #[test]
    fn summary_combines_statistics_and_median() {
        let mut ledger = Ledger::new();
        for a in ["10", "20", "30"] {
            assert!(ledger.add(&record("2024-01-01", a)));
        }
        let s = ledger.summary("2024-01-01");
        assert_eq!(s.statistics.count, 3);
        assert_eq!(s.statistics.total, amt("60"));
        assert_eq!(s.median, amt("20"));
    }
}
