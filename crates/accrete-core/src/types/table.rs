//! Ordered named columns and tables.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::Value;

/// A named, ordered column of cell values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    /// Creates a new column.
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column values in row order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An immutable-by-convention table of named ordered columns.
///
/// Column order is fixed left to right; names resolve to positions in
/// constant time. Transforms clone the table and write new values only into
/// previously-missing cells, leaving the input untouched.
///
/// # Example
///
/// ```rust
/// use accrete_core::{Column, Table, Value};
///
/// let table = Table::new(vec![
///     Column::new("region", vec![Value::text("east")]),
///     Column::new("2020", vec![Value::Number(10.0)]),
/// ])
/// .unwrap();
///
/// assert_eq!(table.column_index("2020"), Some(1));
/// assert_eq!(table.num_rows(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    index: HashMap<String, usize>,
}

impl Table {
    /// Creates a table from ordered columns.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate column names or unequal column lengths.
    pub fn new(columns: Vec<Column>) -> CoreResult<Self> {
        let mut index = HashMap::with_capacity(columns.len());
        for (pos, column) in columns.iter().enumerate() {
            if index.insert(column.name.clone(), pos).is_some() {
                return Err(CoreError::duplicate_column(&column.name));
            }
        }

        if let Some(first) = columns.first() {
            for column in &columns[1..] {
                if column.len() != first.len() {
                    return Err(CoreError::length_mismatch(
                        &column.name,
                        first.len(),
                        column.len(),
                    ));
                }
            }
        }

        Ok(Self { columns, index })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns the columns in left-to-right order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Resolves a column name to its position.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns the column with the given name, if present.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.column_index(name).map(|pos| &self.columns[pos])
    }

    /// Returns the cell at the given column position and row.
    #[must_use]
    pub fn value(&self, column: usize, row: usize) -> &Value {
        &self.columns[column].values[row]
    }

    /// Overwrites the cell at the given column position and row.
    ///
    /// Intended for transforms assembling an output table; the imputation
    /// engine only ever writes into previously-missing cells.
    pub fn set_value(&mut self, column: usize, row: usize, value: Value) {
        self.columns[column].values[row] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(vec![
            Column::new("region", vec![Value::text("east"), Value::text("west")]),
            Column::new("2020", vec![Value::Number(1.0), Value::Missing]),
            Column::new("2021", vec![Value::Missing, Value::Number(4.0)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_shape() {
        let table = sample();
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.num_columns(), 3);
    }

    #[test]
    fn test_name_resolution() {
        let table = sample();
        assert_eq!(table.column_index("region"), Some(0));
        assert_eq!(table.column_index("2021"), Some(2));
        assert_eq!(table.column_index("2019"), None);
        assert_eq!(table.column("2020").unwrap().name(), "2020");
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let err = Table::new(vec![
            Column::new("2020", vec![Value::Number(1.0)]),
            Column::new("2020", vec![Value::Number(2.0)]),
        ])
        .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateColumn { .. }));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = Table::new(vec![
            Column::new("2020", vec![Value::Number(1.0)]),
            Column::new("2021", vec![Value::Number(2.0), Value::Number(3.0)]),
        ])
        .unwrap_err();
        assert!(matches!(err, CoreError::LengthMismatch { .. }));
    }

    #[test]
    fn test_set_value() {
        let mut table = sample();
        table.set_value(2, 0, Value::Number(2.0));
        assert_eq!(table.value(2, 0), &Value::Number(2.0));
    }
}
