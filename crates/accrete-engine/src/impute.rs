//! Batch orchestration of a single imputation pass.
//!
//! One stateless transform: partition rows (optionally by category), derive
//! per-row rates, resolve each partition's fallback, fill each row, and
//! assemble the output table. A row that cannot be imputed passes through
//! unchanged and is reported; the batch itself never retries.

use std::collections::BTreeMap;

use log::{debug, warn};

use accrete_core::{Interpolation, Rounding, Table, Value, Window};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::fallback::fallback_rate;
use crate::fill::{fill_row, FillOutcome};
use crate::growth::{growth_rate, RateError, RowRate};
use crate::parallel::maybe_parallel_map;
use crate::report::{ImputationReport, RowIssue};

/// The result of a batch pass: the output table plus what happened per row.
///
/// The output table has the same shape and column order as the input; only
/// previously-missing cells inside the window may differ.
#[derive(Debug, Clone, PartialEq)]
pub struct Imputation {
    /// The imputed table.
    pub table: Table,
    /// Per-row outcome summary.
    pub report: ImputationReport,
}

/// Configured growth-rate imputer.
///
/// # Example
///
/// ```rust
/// use accrete_core::{Column, Interpolation, Table, Value};
/// use accrete_engine::Imputer;
///
/// let table = Table::new(vec![
///     Column::new("2020", vec![Value::Number(1.0)]),
///     Column::new("2021", vec![Value::Missing]),
///     Column::new("2022", vec![Value::Number(3.0)]),
/// ])
/// .unwrap();
///
/// let result = Imputer::new(Interpolation::Linear)
///     .impute(&table, "2020", "2022")
///     .unwrap();
///
/// assert_eq!(result.table.value(1, 0), &Value::Number(2.0));
/// assert!(result.report.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct Imputer {
    mode: Interpolation,
    rounding: Rounding,
    category: Option<String>,
    config: EngineConfig,
}

impl Imputer {
    /// Creates an imputer for the given interpolation mode.
    #[must_use]
    pub fn new(mode: Interpolation) -> Self {
        Self {
            mode,
            rounding: Rounding::default(),
            category: None,
            config: EngineConfig::default(),
        }
    }

    /// Partitions rows by the given category column; each partition resolves
    /// its own fallback rate. Without a category the whole table is one
    /// partition.
    #[must_use]
    pub fn with_category(mut self, column: impl Into<String>) -> Self {
        self.category = Some(column.into());
        self
    }

    /// Overrides the rounding policy for imputed cells.
    #[must_use]
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Overrides the engine configuration.
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs one batch pass over the table.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidWindow`] if start/end do not resolve to an
    ///   ordered numeric period range; nothing is processed in that case
    /// - [`EngineError::InvalidCategory`] if the category column is missing
    ///   or lies inside the window
    ///
    /// Per-row data conditions never fail the call; they are collected in
    /// the returned report.
    pub fn impute(&self, table: &Table, start: &str, end: &str) -> EngineResult<Imputation> {
        let window = Window::resolve(table, start, end)?;
        let partitions = self.partition(table, &window)?;

        let mut out = table.clone();
        let mut report = ImputationReport::default();
        for (label, rows) in &partitions {
            self.impute_partition(table, &window, label, rows, &mut out, &mut report);
        }
        report.finish();

        Ok(Imputation { table: out, report })
    }

    fn partition(&self, table: &Table, window: &Window) -> EngineResult<Vec<(String, Vec<usize>)>> {
        let Some(name) = &self.category else {
            return Ok(vec![(
                "all rows".to_string(),
                (0..table.num_rows()).collect(),
            )]);
        };

        let pos = table
            .column_index(name)
            .ok_or_else(|| EngineError::invalid_category(format!("column {name} not found")))?;
        if window.contains(pos) {
            return Err(EngineError::invalid_category(format!(
                "column {name} lies inside the imputation window"
            )));
        }

        // Missing category values group together as their own partition.
        let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for row in 0..table.num_rows() {
            groups
                .entry(table.value(pos, row).to_string())
                .or_default()
                .push(row);
        }
        Ok(groups.into_iter().collect())
    }

    fn impute_partition(
        &self,
        table: &Table,
        window: &Window,
        label: &str,
        rows: &[usize],
        out: &mut Table,
        report: &mut ImputationReport,
    ) {
        let row_cells: Vec<Vec<Value>> = rows
            .iter()
            .map(|&row| {
                window
                    .positions()
                    .map(|pos| table.value(pos, row).clone())
                    .collect()
            })
            .collect();

        // Rate derivation has no cross-row dependency.
        let rates: Vec<Result<RowRate, RateError>> =
            maybe_parallel_map(&row_cells, &self.config, |cells| {
                growth_rate(cells, self.mode)
            });

        // The fallback needs every row's rate before any fill runs.
        let fallback = fallback_rate(rates.iter().map(|r| r.as_ref().ok().and_then(|rr| rr.rate)));
        debug!(
            "partition {label}: {} rows, fallback rate {fallback:?}",
            rows.len()
        );
        if fallback.is_none() {
            warn!("partition {label}: no defined growth rates");
        }

        let inputs: Vec<(Vec<Value>, Result<RowRate, RateError>)> =
            row_cells.into_iter().zip(rates).collect();
        let outcomes: Vec<RowOutcome> = maybe_parallel_map(&inputs, &self.config, |(cells, rate)| {
            self.fill_one(table, window, cells, rate, fallback)
        });

        // Writes are row-scoped; the column-major store applies them serially.
        for (&row, outcome) in rows.iter().zip(outcomes) {
            if let Some(filled) = outcome.fill {
                for (offset, value) in filled.cells.into_iter().enumerate() {
                    let pos = window.start() + offset;
                    if table.value(pos, row).is_missing() && !value.is_missing() {
                        out.set_value(pos, row, value);
                    }
                }
                report.record_filled(filled.filled);
                if outcome.used_fallback && filled.filled > 0 {
                    report.record_fallback_row();
                }
            }
            if let Some(issue) = outcome.issue {
                report.record_issue(row, issue);
            }
        }
    }

    fn fill_one(
        &self,
        table: &Table,
        window: &Window,
        cells: &[Value],
        rate: &Result<RowRate, RateError>,
        fallback: Option<f64>,
    ) -> RowOutcome {
        let row_rate = match rate {
            Err(RateError::NonNumeric { offset }) => {
                let column = table.columns()[window.start() + offset].name().to_string();
                return RowOutcome::issue(RowIssue::NonNumericData { column });
            }
            Ok(row_rate) => row_rate,
        };

        if !cells.iter().any(Value::is_missing) {
            return RowOutcome::untouched();
        }
        if !row_rate.has_observations() {
            return RowOutcome::issue(RowIssue::UndefinedRate);
        }
        let Some(resolved) = row_rate.rate.or(fallback) else {
            return RowOutcome::issue(RowIssue::UndefinedRate);
        };

        let outcome = fill_row(cells, resolved, self.mode, self.rounding);
        RowOutcome {
            issue: outcome
                .backward_incomplete
                .then_some(RowIssue::UndefinedRate),
            used_fallback: row_rate.rate.is_none(),
            fill: Some(outcome),
        }
    }
}

/// What happened to one row during the fill step.
struct RowOutcome {
    fill: Option<FillOutcome>,
    issue: Option<RowIssue>,
    used_fallback: bool,
}

impl RowOutcome {
    fn untouched() -> Self {
        Self {
            fill: None,
            issue: None,
            used_fallback: false,
        }
    }

    fn issue(issue: RowIssue) -> Self {
        Self {
            fill: None,
            issue: Some(issue),
            used_fallback: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accrete_core::Column;

    fn period(name: &str, values: Vec<Option<f64>>) -> Column {
        Column::new(name, values.into_iter().map(Value::from).collect())
    }

    #[test]
    fn test_global_linear_pass() {
        let table = Table::new(vec![
            period("2020", vec![Some(1.0), Some(2.0)]),
            period("2021", vec![None, Some(3.0)]),
            period("2022", vec![Some(3.0), None]),
        ])
        .unwrap();

        let result = Imputer::new(Interpolation::Linear)
            .impute(&table, "2020", "2022")
            .unwrap();

        assert_eq!(result.table.value(1, 0), &Value::Number(2.0));
        assert_eq!(result.table.value(2, 1), &Value::Number(4.0));
        assert_eq!(result.report.cells_filled(), 2);
        assert_eq!(result.report.fallback_rows(), 0);
        assert!(result.report.is_complete());
    }

    #[test]
    fn test_input_table_untouched() {
        let table = Table::new(vec![
            period("2020", vec![Some(1.0)]),
            period("2021", vec![None]),
            period("2022", vec![Some(3.0)]),
        ])
        .unwrap();
        let before = table.clone();

        Imputer::new(Interpolation::Linear)
            .impute(&table, "2020", "2022")
            .unwrap();
        assert_eq!(table, before);
    }

    #[test]
    fn test_unknown_category_column() {
        let table = Table::new(vec![
            period("2020", vec![Some(1.0)]),
            period("2021", vec![None]),
        ])
        .unwrap();

        let err = Imputer::new(Interpolation::Linear)
            .with_category("region")
            .impute(&table, "2020", "2021")
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidCategory { .. }));
    }

    #[test]
    fn test_category_inside_window_rejected() {
        let table = Table::new(vec![
            period("2020", vec![Some(1.0)]),
            period("2021", vec![None]),
            period("2022", vec![Some(3.0)]),
        ])
        .unwrap();

        let err = Imputer::new(Interpolation::Linear)
            .with_category("2021")
            .impute(&table, "2020", "2022")
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidCategory { .. }));
    }

    #[test]
    fn test_fully_observed_row_reports_nothing() {
        // Zero-base exponential row with no gaps: no rate, but also nothing
        // to fill, so no issue either.
        let table = Table::new(vec![
            period("2020", vec![Some(0.0)]),
            period("2021", vec![Some(5.0)]),
        ])
        .unwrap();

        let result = Imputer::new(Interpolation::Exponential)
            .impute(&table, "2020", "2021")
            .unwrap();
        assert!(result.report.is_complete());
        assert_eq!(result.report.cells_filled(), 0);
    }
}
