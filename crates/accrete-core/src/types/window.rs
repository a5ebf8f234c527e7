//! Imputation windows over a period-column range.

use std::ops::RangeInclusive;

use crate::error::{CoreError, CoreResult};
use crate::types::Table;

/// A resolved, inclusive range of period-column positions.
///
/// The window is the contiguous set of columns between the configured start
/// and end column. Resolution validates ordering and that the endpoint
/// columns hold only numeric (or missing) data; interior cells are checked
/// per row during imputation.
///
/// # Example
///
/// ```rust
/// use accrete_core::{Column, Table, Value, Window};
///
/// let table = Table::new(vec![
///     Column::new("2020", vec![Value::Number(1.0)]),
///     Column::new("2021", vec![Value::Missing]),
///     Column::new("2022", vec![Value::Number(3.0)]),
/// ])
/// .unwrap();
///
/// let window = Window::resolve(&table, "2020", "2022").unwrap();
/// assert_eq!(window.len(), 3);
/// assert!(window.contains(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    start: usize,
    end: usize,
}

impl Window {
    /// Resolves start/end column names against a table.
    ///
    /// # Errors
    ///
    /// - [`CoreError::ColumnNotFound`] if either name does not resolve
    /// - [`CoreError::WindowOutOfOrder`] if start lies right of end
    /// - [`CoreError::WindowTooNarrow`] if the range spans fewer than 2 columns
    /// - [`CoreError::NonNumericColumn`] if an endpoint column holds present
    ///   non-numeric data
    pub fn resolve(table: &Table, start: &str, end: &str) -> CoreResult<Self> {
        let start_pos = table
            .column_index(start)
            .ok_or_else(|| CoreError::column_not_found(start))?;
        let end_pos = table
            .column_index(end)
            .ok_or_else(|| CoreError::column_not_found(end))?;

        if start_pos > end_pos {
            return Err(CoreError::WindowOutOfOrder {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let window = Self {
            start: start_pos,
            end: end_pos,
        };
        if window.len() < 2 {
            return Err(CoreError::WindowTooNarrow {
                columns: window.len(),
            });
        }

        for pos in [start_pos, end_pos] {
            let column = &table.columns()[pos];
            for (row, value) in column.values().iter().enumerate() {
                if !value.is_missing() && !value.is_number() {
                    return Err(CoreError::non_numeric_column(column.name(), row));
                }
            }
        }

        Ok(window)
    }

    /// Returns the position of the start column.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the position of the end column.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the number of columns in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Windows always span at least two columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the column positions in left-to-right order.
    pub fn positions(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Returns true if the column position lies inside the window.
    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, Value};

    fn sample() -> Table {
        Table::new(vec![
            Column::new("region", vec![Value::text("east")]),
            Column::new("2020", vec![Value::Number(1.0)]),
            Column::new("2021", vec![Value::Missing]),
            Column::new("2022", vec![Value::Number(3.0)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve() {
        let window = Window::resolve(&sample(), "2020", "2022").unwrap();
        assert_eq!(window.start(), 1);
        assert_eq!(window.end(), 3);
        assert_eq!(window.len(), 3);
        assert_eq!(window.positions().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_unknown_column() {
        let err = Window::resolve(&sample(), "2019", "2022").unwrap_err();
        assert!(matches!(err, CoreError::ColumnNotFound { .. }));
    }

    #[test]
    fn test_out_of_order() {
        let err = Window::resolve(&sample(), "2022", "2020").unwrap_err();
        assert!(matches!(err, CoreError::WindowOutOfOrder { .. }));
    }

    #[test]
    fn test_too_narrow() {
        let err = Window::resolve(&sample(), "2020", "2020").unwrap_err();
        assert_eq!(err, CoreError::WindowTooNarrow { columns: 1 });
    }

    #[test]
    fn test_non_numeric_endpoint() {
        let err = Window::resolve(&sample(), "region", "2022").unwrap_err();
        assert_eq!(
            err,
            CoreError::NonNumericColumn {
                name: "region".to_string(),
                row: 0
            }
        );
    }

    #[test]
    fn test_contains() {
        let window = Window::resolve(&sample(), "2020", "2021").unwrap();
        assert!(window.contains(1));
        assert!(window.contains(2));
        assert!(!window.contains(0));
        assert!(!window.contains(3));
    }
}
