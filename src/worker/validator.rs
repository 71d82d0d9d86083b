use crate::{
    common::{
        amount::Amount,
        error::Rejection,
        record::{Field, RawRecord},
    },
    domain::transaction::Transaction,
};

pub const REQUIRED_FIELDS: [&str; 3] = ["date", "amount", "description"];

/// Checks a raw record and builds the normalized transaction it describes.
///
/// Field presence is checked for every required field before any value is
/// read. The input is never modified.
///
/// # Examples
/// ```
/// use daily_ledger::common::{amount::Amount, record::RawRecord};
/// use daily_ledger::worker::validator::check;
///
/// let rec = RawRecord::new()
///     .with("date", "2024-01-01")
///     .with("amount", 0.1)
///     .with("description", "coffee");
/// let tx = check(&rec).unwrap();
/// assert_eq!(tx.amount, "0.1".parse::<Amount>().unwrap());
///
/// let bad = rec.clone().with("amount", -5);
/// assert!(check(&bad).is_err());
/// ```
pub fn check(record: &RawRecord) -> Result<Transaction, Rejection> {
    if let Some(missing) = REQUIRED_FIELDS.into_iter().find(|f| !record.contains(f)) {
        return Err(Rejection::MissingField(missing));
    }

    let date = match record.get("date") {
        Some(Field::Text(s)) => s,
        Some(other) => return Err(wrong_type("date", "text", other)),
        None => return Err(Rejection::MissingField("date")),
    };
    if date.is_empty() {
        return Err(Rejection::EmptyDate);
    }

    let amount = match record.get("amount") {
        Some(field) => normalize_amount(field)?,
        None => return Err(Rejection::MissingField("amount")),
    };
    if !amount.is_positive() {
        return Err(Rejection::NonPositiveAmount(amount.to_string()));
    }

    let description = match record.get("description") {
        Some(Field::Text(s)) => s,
        Some(other) => return Err(wrong_type("description", "text", other)),
        None => return Err(Rejection::MissingField("description")),
    };

    Ok(Transaction::new(date.as_str(), amount, description.as_str()))
}

/// Boolean form of [`check`]. On success the record's amount is replaced by
/// its normalized decimal; on failure the record is left as it was.
pub fn validate(record: &mut RawRecord) -> bool {
    match check(record) {
        Ok(tx) => {
            record.insert("amount", tx.amount.into_decimal());
            true
        }
        Err(reason) => {
            tracing::debug!("record rejected: {reason}");
            false
        }
    }
}

/// Converts an integer, float or decimal field to an exact `Amount`.
pub fn normalize_amount(field: &Field) -> Result<Amount, Rejection> {
    match field {
        Field::Integer(i) => Ok(Amount::from(*i)),
        Field::Float(f) => {
            Amount::try_from(*f).map_err(|_| Rejection::InvalidAmount(f.to_string()))
        }
        Field::Decimal(d) => Ok(Amount::new(d.clone())),
        other => Err(wrong_type("amount", "a number", other)),
    }
}

fn wrong_type(field: &'static str, expected: &'static str, found: &Field) -> Rejection {
    Rejection::WrongType {
        field,
        expected,
        found: found.type_name(),
    }
}
