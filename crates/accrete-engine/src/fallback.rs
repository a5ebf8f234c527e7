//! Partition fallback rates.
//!
//! Rows without a computable rate of their own borrow the average of the
//! defined rates in their partition (one category group, or the whole table).

/// Averages the defined rates of a partition.
///
/// Undefined rates are excluded from the mean, not treated as zero. Returns
/// `None` when the partition has no defined rates at all; dependent rows
/// then cannot be imputed.
#[must_use]
pub fn fallback_rate<I>(rates: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for rate in rates.into_iter().flatten() {
        sum += rate;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}
