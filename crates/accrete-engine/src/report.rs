//! Per-row issue collection for a batch pass.
//!
//! Structural errors abort the call before any row work; per-row data issues
//! ride alongside the partially-imputed table instead of failing the batch.

use serde::{Deserialize, Serialize};

/// Why a row could not be (fully) imputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowIssue {
    /// The row has no computable rate and its partition offers no usable
    /// fallback, or the rate cannot reach every missing cell.
    UndefinedRate,
    /// A present window cell held non-numeric data; the row was skipped
    /// without coercion.
    NonNumericData {
        /// Name of the offending column.
        column: String,
    },
}

/// A row index paired with the issue that left it unimputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedRow {
    /// Row index in the input table.
    pub row: usize,
    /// The condition that blocked imputation.
    pub issue: RowIssue,
}

/// Summary of a batch imputation pass.
///
/// Counts what changed and which rows could not be served. An incomplete
/// pass is a reportable condition, never a fatal error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImputationReport {
    cells_filled: usize,
    fallback_rows: usize,
    issues: Vec<ReportedRow>,
}

impl ImputationReport {
    /// Number of previously-missing cells that received a value.
    #[must_use]
    pub fn cells_filled(&self) -> usize {
        self.cells_filled
    }

    /// Number of rows imputed with a partition fallback rate rather than a
    /// rate of their own.
    #[must_use]
    pub fn fallback_rows(&self) -> usize {
        self.fallback_rows
    }

    /// Per-row issues, ordered by row index.
    #[must_use]
    pub fn issues(&self) -> &[ReportedRow] {
        &self.issues
    }

    /// Returns true if every row was fully imputed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }

    /// Indices of rows left (partially) unimputed, ordered and deduplicated.
    #[must_use]
    pub fn unimputed_rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.issues.iter().map(|r| r.row).collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }

    pub(crate) fn record_filled(&mut self, cells: usize) {
        self.cells_filled += cells;
    }

    pub(crate) fn record_fallback_row(&mut self) {
        self.fallback_rows += 1;
    }

    pub(crate) fn record_issue(&mut self, row: usize, issue: RowIssue) {
        self.issues.push(ReportedRow { row, issue });
    }

    pub(crate) fn finish(&mut self) {
        self.issues.sort_by_key(|r| r.row);
    }
}
