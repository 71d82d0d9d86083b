use std::io::Write;

use crate::domain::statistics::DailySummary;

#[derive(serde::Serialize)]
/// Internal CSV output row representation matching the output headers.
///
/// Headers written (in this order): `date,count,total,average,median`.
/// Amounts are written as exact decimal strings.
struct OutputRow<'a> {
    date: &'a str,
    count: usize,
    total: String,
    average: String,
    median: String,
}

/// Writes per-day summaries to a CSV writer.
///
/// The output includes a header row: `date,count,total,average,median`.
/// For deterministic output, rows are sorted by date ascending before writing.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use daily_ledger::common::record::RawRecord;
/// use daily_ledger::domain::ledger::Ledger;
/// use daily_ledger::io::writer::write_summaries;
///
/// let mut ledger = Ledger::new();
/// for (date, amount) in [("2024-01-02", 20), ("2024-01-01", 10)] {
///     ledger.add(&RawRecord::new()
///         .with("date", date)
///         .with("amount", amount)
///         .with("description", "x"));
/// }
/// let summaries: Vec<_> = ledger.dates().iter().map(|d| ledger.summary(d)).collect();
///
/// let mut out = Vec::new();
/// write_summaries(&mut out, &summaries).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("date,count,total,average,median\n"));
/// assert!(s.contains("\n2024-01-01,1,10,"));
/// ```
pub fn write_summaries<W: Write>(writer: W, summaries: &[DailySummary]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let mut sorted: Vec<&DailySummary> = summaries.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    for summary in sorted {
        let row = OutputRow {
            date: &summary.date,
            count: summary.statistics.count,
            total: summary.statistics.total.to_string(),
            average: summary.statistics.average.to_string(),
            median: summary.median.to_string(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::amount::Amount;
    use crate::domain::statistics::Statistics;

    fn amt(s: &str) -> Amount {
        s.parse().unwrap()
    }

    fn summary(date: &str, count: usize, total: &str, average: &str, median: &str) -> DailySummary {
        DailySummary {
            date: date.to_string(),
            statistics: Statistics {
                count,
                total: amt(total),
                average: amt(average),
            },
            median: amt(median),
        }
    }

    // Helper: writes summaries to a Vec<u8> and returns UTF-8 string.
    fn write_to_string(summaries: &[DailySummary]) -> String {
        let mut out = Vec::new();
        write_summaries(&mut out, summaries).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_header_and_rows_in_date_order() {
        let s = write_to_string(&[
            summary("2024-01-02", 1, "5", "5", "5"),
            summary("2024-01-01", 2, "0.3", "0.15", "0.15"),
        ]);

        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 3, "expected header + 2 rows");
        assert_eq!(lines[0], "date,count,total,average,median");
        assert_eq!(lines[1], "2024-01-01,2,0.3,0.15,0.15");
        assert_eq!(lines[2], "2024-01-02,1,5,5,5");
    }
}
