use bigdecimal::{BigDecimal, ParseBigDecimalError, Zero};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
/// An exact decimal monetary amount.
///
/// Every amount that enters the ledger is stored as an `Amount`, whatever
/// numeric type it arrived as. Floats are converted through their shortest
/// decimal text form, so `0.1` becomes exactly `0.1` rather than the nearest
/// binary fraction.
///
/// # Examples
/// ```
/// use daily_ledger::common::amount::Amount;
///
/// let a = Amount::try_from(0.1).unwrap();
/// let b = Amount::try_from(0.2).unwrap();
/// assert_eq!(a + b, "0.3".parse::<Amount>().unwrap());
/// ```
pub struct Amount(BigDecimal);

impl Amount {
    pub fn new(value: BigDecimal) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Amount(BigDecimal::zero())
    }

    pub fn is_positive(&self) -> bool {
        self.0 > BigDecimal::zero()
    }

    pub fn into_decimal(self) -> BigDecimal {
        self.0
    }

    /// Exact quotient of this amount by a record count.
    pub fn divide_by(&self, count: usize) -> Amount {
        if count == 0 {
            return Amount::zero();
        }
        Amount(&self.0 / &BigDecimal::from(count as u64))
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount(BigDecimal::from(value))
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Amount(BigDecimal::from(value))
    }
}

impl From<BigDecimal> for Amount {
    fn from(value: BigDecimal) -> Self {
        Amount(value)
    }
}

impl TryFrom<f64> for Amount {
    type Error = ParseBigDecimalError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ParseBigDecimalError::Other(format!(
                "non-finite amount {value}"
            )));
        }
        // f64 Display yields the shortest text that round-trips, never an exponent.
        value.to_string().parse()
    }
}

impl FromStr for Amount {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }
        Ok(Amount(t.parse()?))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Add for Amount {
    type Output = Amount;
    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Amount> for &'a Amount {
    type Output = Amount;
    fn add(self, rhs: &'a Amount) -> Amount {
        Amount(&self.0 + &rhs.0)
    }
}

impl AddAssign<&Amount> for Amount {
    fn add_assign(&mut self, rhs: &Amount) {
        self.0 += &rhs.0;
    }
}
