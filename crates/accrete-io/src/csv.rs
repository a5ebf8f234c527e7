//! CSV table codec.

use accrete_core::{Column, Table, Value};

use crate::error::{IoError, IoResult};

/// Decodes CSV bytes into a table.
///
/// The first record carries column names. Empty fields decode as missing,
/// numeric fields as numbers, anything else as text. Non-finite numerics
/// (`NaN`, `inf`) decode as missing.
pub fn parse_csv(bytes: &[u8]) -> IoResult<Table> {
    let mut reader = csv::ReaderBuilder::new().from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|e| IoError::Parse(e.to_string()))?
        .clone();

    let mut values: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        // Ragged records error out here; the reader enforces equal widths.
        let record = record.map_err(|e| IoError::Parse(e.to_string()))?;
        for (pos, field) in record.iter().enumerate() {
            values[pos].push(decode_field(field));
        }
    }

    let columns = headers
        .iter()
        .zip(values)
        .map(|(name, values)| Column::new(name, values))
        .collect();
    Ok(Table::new(columns)?)
}

/// Encodes a table as CSV bytes, header row first.
///
/// Missing cells serialize as empty fields.
pub fn serialize_csv(table: &Table) -> IoResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(table.columns().iter().map(Column::name))
        .map_err(|e| IoError::Serialize(e.to_string()))?;

    for row in 0..table.num_rows() {
        let record: Vec<String> = table
            .columns()
            .iter()
            .map(|column| column.values()[row].to_string())
            .collect();
        writer
            .write_record(&record)
            .map_err(|e| IoError::Serialize(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| IoError::Serialize(e.to_string()))
}

fn decode_field(field: &str) -> Value {
    if field.is_empty() {
        return Value::Missing;
    }
    match field.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::Number(n),
        Ok(_) => Value::Missing,
        Err(_) => Value::Text(field.to_string()),
    }
}
