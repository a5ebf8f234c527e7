//! Row filling: forward propagation and backward derivation.
//!
//! Forward propagation from the left-most observation takes priority; only
//! cells left of the first observation are derived backward from it. Fills
//! are computed on an unrounded working copy so that interior values depend
//! only on the anchoring observation and the distance to it, with the
//! rounding policy applied at write time.

use accrete_core::{Interpolation, Rounding, Value};

/// The result of filling one row's window cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FillOutcome {
    /// The row's window cells after filling, in window order.
    pub cells: Vec<Value>,
    /// Number of previously-missing cells that received a value.
    pub filled: usize,
    /// True if backward derivation hit a zero divisor and left cells missing.
    pub backward_incomplete: bool,
}

/// Fills a row's missing window cells using the resolved rate.
///
/// Present cells are never overwritten. A row with no observations is
/// returned unchanged; the orchestrator reports it instead.
#[must_use]
pub fn fill_row(
    cells: &[Value],
    rate: f64,
    mode: Interpolation,
    rounding: Rounding,
) -> FillOutcome {
    let mut work: Vec<Option<f64>> = cells.iter().map(Value::as_number).collect();
    let mut out: Vec<Value> = cells.to_vec();
    let mut filled = 0usize;

    let Some(first_known) = work.iter().position(Option::is_some) else {
        return FillOutcome {
            cells: out,
            filled: 0,
            backward_incomplete: false,
        };
    };

    // Forward pass: each missing cell chains off its immediate predecessor,
    // previously-filled cells included.
    for pos in first_known + 1..work.len() {
        if !cells[pos].is_missing() {
            continue;
        }
        if let Some(prev) = work[pos - 1] {
            let value = match mode {
                Interpolation::Linear => prev + rate,
                Interpolation::Exponential => prev * (1.0 + rate),
            };
            work[pos] = Some(value);
            out[pos] = Value::Number(rounding.apply(value));
            filled += 1;
        }
    }

    // Backward pass: leading gaps anchor on the first observation, scaled by
    // the period distance to it.
    let mut backward_incomplete = false;
    if let Some(anchor) = work[first_known] {
        for pos in (0..first_known).rev() {
            if !cells[pos].is_missing() {
                continue;
            }
            let periods = first_known - pos;
            let value = match mode {
                Interpolation::Linear => anchor - rate * periods as f64,
                Interpolation::Exponential => {
                    let divisor = (1.0 + rate).powi(periods as i32);
                    if divisor == 0.0 {
                        backward_incomplete = true;
                        break;
                    }
                    anchor / divisor
                }
            };
            out[pos] = Value::Number(rounding.apply(value));
            filled += 1;
        }
    }

    FillOutcome {
        cells: out,
        filled,
        backward_incomplete,
    }
}
