use std::collections::BTreeMap;

use bigdecimal::BigDecimal;

/// A dynamically typed field value, as it arrives from a caller or a CSV row.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text(String),
    Integer(i64),
    Float(f64),
    Decimal(BigDecimal),
    Bool(bool),
    Null,
}

impl Field {
    pub fn type_name(&self) -> &'static str {
        match self {
            Field::Text(_) => "text",
            Field::Integer(_) => "integer",
            Field::Float(_) => "float",
            Field::Decimal(_) => "decimal",
            Field::Bool(_) => "bool",
            Field::Null => "null",
        }
    }

    /// Classifies a textual cell: integers first, then decimals, otherwise text.
    pub fn from_numeric_text(s: &str) -> Field {
        let t = s.trim();
        if let Ok(i) = t.parse::<i64>() {
            return Field::Integer(i);
        }
        match t.parse::<BigDecimal>() {
            Ok(d) => Field::Decimal(d),
            Err(_) => Field::Text(t.to_string()),
        }
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Text(value.to_string())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Field::Text(value)
    }
}

impl From<i64> for Field {
    fn from(value: i64) -> Self {
        Field::Integer(value)
    }
}

impl From<i32> for Field {
    fn from(value: i32) -> Self {
        Field::Integer(value.into())
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::Float(value)
    }
}

impl From<BigDecimal> for Field {
    fn from(value: BigDecimal) -> Self {
        Field::Decimal(value)
    }
}

impl From<bool> for Field {
    fn from(value: bool) -> Self {
        Field::Bool(value)
    }
}

/// An unvalidated transaction: a bag of named fields.
///
/// Nothing about its shape is guaranteed until it passes
/// [`crate::worker::validator::check`].
///
/// # Examples
/// ```
/// use daily_ledger::common::record::{Field, RawRecord};
///
/// let rec = RawRecord::new()
///     .with("date", "2024-01-01")
///     .with("amount", 12.5)
///     .with("description", "lunch");
///
/// assert!(rec.contains("amount"));
/// assert_eq!(rec.get("amount"), Some(&Field::Float(12.5)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: BTreeMap<String, Field>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<Field>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<Field>) -> Option<Field> {
        self.fields.insert(name.to_string(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Field> {
        self.fields.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
