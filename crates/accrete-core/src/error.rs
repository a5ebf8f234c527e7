//! Error types for table construction and window resolution.

use thiserror::Error;

/// A specialized Result type for core table operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building tables or resolving imputation windows.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A column name does not exist in the table.
    #[error("Column not found: {name}")]
    ColumnNotFound {
        /// The unresolved column name.
        name: String,
    },

    /// Two columns share the same name.
    #[error("Duplicate column name: {name}")]
    DuplicateColumn {
        /// The repeated column name.
        name: String,
    },

    /// Columns have differing lengths.
    #[error("Column {name} has {actual} rows, expected {expected}")]
    LengthMismatch {
        /// Name of the offending column.
        name: String,
        /// Row count of the first column.
        expected: usize,
        /// Row count of the offending column.
        actual: usize,
    },

    /// The start column lies to the right of the end column.
    #[error("Window out of order: start {start} is right of end {end}")]
    WindowOutOfOrder {
        /// Name of the start column.
        start: String,
        /// Name of the end column.
        end: String,
    },

    /// The window spans fewer than two period columns.
    #[error("Window too narrow: {columns} column(s), need at least 2")]
    WindowTooNarrow {
        /// Number of columns in the window.
        columns: usize,
    },

    /// A designated period column holds present non-numeric data.
    #[error("Column {name} holds non-numeric data at row {row}")]
    NonNumericColumn {
        /// Name of the offending column.
        name: String,
        /// Row index of the offending cell.
        row: usize,
    },
}

impl CoreError {
    /// Creates a column not found error.
    #[must_use]
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound { name: name.into() }
    }

    /// Creates a duplicate column error.
    #[must_use]
    pub fn duplicate_column(name: impl Into<String>) -> Self {
        Self::DuplicateColumn { name: name.into() }
    }

    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(name: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            name: name.into(),
            expected,
            actual,
        }
    }

    /// Creates a non-numeric column error.
    #[must_use]
    pub fn non_numeric_column(name: impl Into<String>, row: usize) -> Self {
        Self::NonNumericColumn {
            name: name.into(),
            row,
        }
    }
}
