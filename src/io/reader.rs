use crate::common::record::{Field, RawRecord};
use std::io::Read;

#[derive(serde::Deserialize)]
/// Internal CSV row representation. Every column is optional so that rows
/// with missing cells still reach validation and get a proper rejection.
struct CsvRow {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    amount: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Reads raw transaction records from a CSV reader.
///
/// Supported headers: `date,amount,description`. Empty cells become absent
/// fields. Amount cells are classified as integer or decimal when they parse
/// as such and are otherwise kept as text.
///
/// # Examples
///
/// ```
/// use daily_ledger::io::reader::read_records;
/// use daily_ledger::common::record::Field;
/// use csv::ReaderBuilder;
///
/// let data = "date,amount,description\n\
/// 2024-01-01,100,rent\n\
/// 2024-01-02,0.25,\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let records: Vec<_> = read_records(&mut rdr).collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(records[0].get("amount"), Some(&Field::Integer(100)));
/// assert!(!records[1].contains("description"));
/// ```
pub fn read_records<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<RawRecord, String>> + '_ {
    rdr.deserialize::<CsvRow>().enumerate().map(|(line, res)| {
        let row = res.map_err(|e| format!("row {}: {e}", line + 1))?;
        let mut record = RawRecord::new();

        if let Some(date) = row.date {
            record.insert("date", date);
        }
        if let Some(amount) = row.amount {
            record.insert("amount", Field::from_numeric_text(&amount));
        }
        if let Some(description) = row.description {
            record.insert("description", description);
        }
        Ok(record)
    })
}
