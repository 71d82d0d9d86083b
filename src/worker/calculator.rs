use crate::common::amount::Amount;

/// Exact sum of `amounts`; zero when empty.
pub fn total(amounts: &[Amount]) -> Amount {
    amounts.iter().fold(Amount::zero(), |mut acc, a| {
        acc += a;
        acc
    })
}

/// Exact arithmetic mean of `amounts`; zero when empty.
pub fn average(amounts: &[Amount]) -> Amount {
    if amounts.is_empty() {
        return Amount::zero();
    }
    total(amounts).divide_by(amounts.len())
}

/// Median of `amounts`. An even count averages the two middle values.
///
/// # Examples
/// ```
/// use daily_ledger::common::amount::Amount;
/// use daily_ledger::worker::calculator::median;
///
/// let even: Vec<Amount> = [40, 10, 30, 20].into_iter().map(Amount::from).collect();
/// assert_eq!(median(&even), Amount::from(25));
/// ```
pub fn median(amounts: &[Amount]) -> Amount {
    if amounts.is_empty() {
        return Amount::zero();
    }
    let mut sorted = amounts.to_vec();
    sorted.sort();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted.swap_remove(mid)
    } else {
        average(&sorted[mid - 1..=mid])
    }
}
