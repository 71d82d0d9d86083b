use crate::{
    common::{config::BatchPolicy, error::Rejection, record::RawRecord},
    domain::ledger::Ledger,
    worker::validator,
};

/// Outcome of a batch. `successful + failed == total_processed`, always equal
/// to the number of input records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Records that passed validation.
    pub successful: usize,
    /// Records that failed validation.
    pub failed: usize,
    pub total_processed: usize,
    /// Records actually written to the ledger.
    pub committed: usize,
    /// Input index and reason for every failed record.
    pub rejections: Vec<(usize, Rejection)>,
}

#[derive(Debug, Default)]
pub struct Processor {
    policy: BatchPolicy,
}

impl Processor {
    pub fn new(policy: BatchPolicy) -> Self {
        Self { policy }
    }

    /// Validates every record in order, then commits according to the policy.
    ///
    /// Under [`BatchPolicy::AllOrNothing`] one rejection leaves the ledger
    /// exactly as it was.
    pub fn process(&self, ledger: &mut Ledger, records: &[RawRecord]) -> BatchReport {
        let mut report = BatchReport {
            total_processed: records.len(),
            ..BatchReport::default()
        };
        let mut accepted = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            match validator::check(record) {
                Ok(tx) => {
                    report.successful += 1;
                    accepted.push(tx);
                }
                Err(reason) => {
                    tracing::warn!(index, "batch record rejected: {reason}");
                    report.failed += 1;
                    report.rejections.push((index, reason));
                }
            }
        }

        let commit = match self.policy {
            BatchPolicy::AllOrNothing => report.failed == 0,
            BatchPolicy::BestEffort => true,
        };
        if commit {
            report.committed = accepted.len();
            for tx in accepted {
                ledger.commit(tx);
            }
        } else {
            tracing::warn!(
                failed = report.failed,
                "batch rolled back, {} valid records discarded",
                report.successful
            );
        }

        tracing::info!(
            policy = ?self.policy,
            successful = report.successful,
            failed = report.failed,
            committed = report.committed,
            "batch processed"
        );
        report
    }
}
