//! Per-row growth rate derivation.
//!
//! A row's rate is implied by its first and last observed values inside the
//! window, scaled by the number of periods between those two observations,
//! not by the full window width. Rows with fewer than two observations carry
//! no rate of their own and rely on a partition fallback.

use accrete_core::{Interpolation, Value};
use thiserror::Error;

/// Error raised while scanning a row's window cells.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    /// A present cell inside the window was not numeric.
    ///
    /// The offset is relative to the window start. Non-numeric data is never
    /// coerced; the whole row is excluded from rate derivation and filling.
    #[error("Non-numeric cell at window offset {offset}")]
    NonNumeric {
        /// Window-relative position of the offending cell.
        offset: usize,
    },
}

/// A row's derived rate and the span of its observations.
///
/// `first_observed`/`last_observed` are window-relative positions. A single
/// observation yields equal positions and no rate; an empty row yields
/// neither.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowRate {
    /// The derived rate, when two observations support one.
    pub rate: Option<f64>,
    /// Window-relative position of the first observation.
    pub first_observed: Option<usize>,
    /// Window-relative position of the last observation.
    pub last_observed: Option<usize>,
}

impl RowRate {
    /// Returns true if the row has at least one observation.
    #[must_use]
    pub fn has_observations(&self) -> bool {
        self.first_observed.is_some()
    }
}

/// Derives the growth rate implied by one row's window cells.
///
/// # Errors
///
/// Returns [`RateError::NonNumeric`] if a present cell is not numeric.
///
/// # Example
///
/// ```rust
/// use accrete_core::{Interpolation, Value};
/// use accrete_engine::growth::growth_rate;
///
/// let cells = vec![
///     Value::Number(1.0),
///     Value::Missing,
///     Value::Number(3.0),
///     Value::Missing,
///     Value::Number(5.0),
/// ];
/// let row = growth_rate(&cells, Interpolation::Linear).unwrap();
/// assert_eq!(row.rate, Some(1.0));
/// ```
pub fn growth_rate(cells: &[Value], mode: Interpolation) -> Result<RowRate, RateError> {
    let mut observations: Vec<(usize, f64)> = Vec::new();
    for (offset, cell) in cells.iter().enumerate() {
        match cell {
            Value::Number(n) => observations.push((offset, *n)),
            Value::Missing => {}
            Value::Text(_) => return Err(RateError::NonNumeric { offset }),
        }
    }

    let (Some(&(first_pos, first)), Some(&(last_pos, last))) =
        (observations.first(), observations.last())
    else {
        return Ok(RowRate {
            rate: None,
            first_observed: None,
            last_observed: None,
        });
    };

    let rate = if observations.len() < 2 {
        None
    } else {
        let periods = last_pos - first_pos;
        match mode {
            Interpolation::Linear => Some((last - first) / periods as f64),
            Interpolation::Exponential => exponential_rate(first, last, periods),
        }
    };

    Ok(RowRate {
        rate,
        first_observed: Some(first_pos),
        last_observed: Some(last_pos),
    })
}

/// Implied per-period multiplicative rate between two observations.
///
/// Undefined for a zero base, and for a negative ratio whenever the root
/// exponent is fractional (no real root exists).
fn exponential_rate(first: f64, last: f64, periods: usize) -> Option<f64> {
    if first == 0.0 {
        return None;
    }
    let ratio = last / first;
    let rate = if ratio < 0.0 {
        if periods == 1 {
            ratio - 1.0
        } else {
            return None;
        }
    } else {
        ratio.powf(1.0 / periods as f64) - 1.0
    };
    rate.is_finite().then_some(rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cells(values: &[Option<f64>]) -> Vec<Value> {
        values.iter().map(|v| Value::from(*v)).collect()
    }

    #[test]
    fn test_linear_rate_endpoints() {
        let row = cells(&[Some(1.0), None, Some(3.0), None, Some(5.0)]);
        let rate = growth_rate(&row, Interpolation::Linear).unwrap();
        assert_eq!(rate.rate, Some(1.0));
        assert_eq!(rate.first_observed, Some(0));
        assert_eq!(rate.last_observed, Some(4));
    }

    #[test]
    fn test_linear_rate_uses_observed_span() {
        // Observations at offsets 1 and 3: two periods apart, not four.
        let row = cells(&[None, Some(2.0), None, Some(6.0), None]);
        let rate = growth_rate(&row, Interpolation::Linear).unwrap();
        assert_eq!(rate.rate, Some(2.0));
        assert_eq!(rate.first_observed, Some(1));
        assert_eq!(rate.last_observed, Some(3));
    }

    #[test]
    fn test_linear_rate_trailing_gap() {
        let row = cells(&[Some(2.0), Some(3.0), None]);
        let rate = growth_rate(&row, Interpolation::Linear).unwrap();
        assert_eq!(rate.rate, Some(1.0));
    }

    #[test]
    fn test_single_observation_has_no_rate() {
        let row = cells(&[None, Some(4.0), None]);
        let rate = growth_rate(&row, Interpolation::Linear).unwrap();
        assert_eq!(rate.rate, None);
        assert_eq!(rate.first_observed, Some(1));
        assert_eq!(rate.last_observed, Some(1));
        assert!(rate.has_observations());
    }

    #[test]
    fn test_empty_row() {
        let row = cells(&[None, None, None]);
        let rate = growth_rate(&row, Interpolation::Linear).unwrap();
        assert_eq!(rate.rate, None);
        assert!(!rate.has_observations());
    }

    #[test]
    fn test_text_cell_fails_row() {
        let row = vec![Value::Number(1.0), Value::text("n/a"), Value::Number(3.0)];
        let err = growth_rate(&row, Interpolation::Linear).unwrap_err();
        assert_eq!(err, RateError::NonNumeric { offset: 1 });
    }

    #[test]
    fn test_exponential_rate() {
        let row = cells(&[Some(2.0), None, Some(8.0)]);
        let rate = growth_rate(&row, Interpolation::Exponential).unwrap();
        assert_relative_eq!(rate.rate.unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_exponential_zero_base_undefined() {
        let row = cells(&[Some(0.0), None, Some(8.0)]);
        let rate = growth_rate(&row, Interpolation::Exponential).unwrap();
        assert_eq!(rate.rate, None);
        assert_eq!(rate.first_observed, Some(0));
        assert_eq!(rate.last_observed, Some(2));
    }

    #[test]
    fn test_exponential_negative_ratio_undefined() {
        // No real square root of a negative ratio.
        let row = cells(&[Some(-2.0), None, Some(8.0)]);
        let rate = growth_rate(&row, Interpolation::Exponential).unwrap();
        assert_eq!(rate.rate, None);
    }

    #[test]
    fn test_exponential_negative_ratio_single_period() {
        let row = cells(&[Some(-2.0), Some(4.0)]);
        let rate = growth_rate(&row, Interpolation::Exponential).unwrap();
        assert_relative_eq!(rate.rate.unwrap(), -3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_exponential_negative_values_positive_ratio() {
        let row = cells(&[Some(-4.0), None, Some(-1.0)]);
        let rate = growth_rate(&row, Interpolation::Exponential).unwrap();
        assert_relative_eq!(rate.rate.unwrap(), -0.5, epsilon = 1e-12);
    }
}
