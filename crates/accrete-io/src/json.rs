//! JSON table codec.
//!
//! Column-oriented layout:
//!
//! ```json
//! {"columns": [{"name": "2020", "values": [1.0, null, "east"]}]}
//! ```

use accrete_core::{Column, Table, Value};
use serde::{Deserialize, Serialize};

use crate::error::{IoError, IoResult};

#[derive(Serialize, Deserialize)]
struct JsonTable {
    columns: Vec<JsonColumn>,
}

#[derive(Serialize, Deserialize)]
struct JsonColumn {
    name: String,
    values: Vec<serde_json::Value>,
}

/// Decodes column-oriented JSON bytes into a table.
///
/// `null` decodes as missing, numbers as numbers, strings as text; any other
/// JSON value is rejected.
pub fn parse_json(bytes: &[u8]) -> IoResult<Table> {
    let decoded: JsonTable =
        serde_json::from_slice(bytes).map_err(|e| IoError::Parse(e.to_string()))?;

    let columns = decoded
        .columns
        .into_iter()
        .map(|column| {
            let values = column
                .values
                .into_iter()
                .map(decode_value)
                .collect::<IoResult<Vec<_>>>()?;
            Ok(Column::new(column.name, values))
        })
        .collect::<IoResult<Vec<_>>>()?;
    Ok(Table::new(columns)?)
}

/// Encodes a table as column-oriented JSON bytes.
pub fn serialize_json(table: &Table) -> IoResult<Vec<u8>> {
    let columns = table
        .columns()
        .iter()
        .map(|column| {
            let values = column
                .values()
                .iter()
                .map(encode_value)
                .collect::<IoResult<Vec<_>>>()?;
            Ok(JsonColumn {
                name: column.name().to_string(),
                values,
            })
        })
        .collect::<IoResult<Vec<_>>>()?;

    serde_json::to_vec(&JsonTable { columns }).map_err(|e| IoError::Serialize(e.to_string()))
}

fn decode_value(value: serde_json::Value) -> IoResult<Value> {
    match value {
        serde_json::Value::Null => Ok(Value::Missing),
        serde_json::Value::Number(n) => n
            .as_f64()
            .map(Value::Number)
            .ok_or_else(|| IoError::Parse(format!("number out of range: {n}"))),
        serde_json::Value::String(s) => Ok(Value::Text(s)),
        other => Err(IoError::Parse(format!("unsupported JSON value: {other}"))),
    }
}

fn encode_value(value: &Value) -> IoResult<serde_json::Value> {
    match value {
        Value::Missing => Ok(serde_json::Value::Null),
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .ok_or_else(|| IoError::Serialize(format!("non-finite number: {n}"))),
        Value::Text(s) => Ok(serde_json::Value::String(s.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_columns() {
        let bytes = br#"{"columns": [
            {"name": "region", "values": ["east", "west"]},
            {"name": "2020", "values": [1, null]}
        ]}"#;
        let table = parse_json(bytes).unwrap();

        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.value(0, 1), &Value::text("west"));
        assert_eq!(table.value(1, 0), &Value::Number(1.0));
        assert_eq!(table.value(1, 1), &Value::Missing);
    }

    #[test]
    fn test_unsupported_value_rejected() {
        let bytes = br#"{"columns": [{"name": "2020", "values": [true]}]}"#;
        let err = parse_json(bytes).unwrap_err();
        assert!(matches!(err, IoError::Parse(_)));
    }

    #[test]
    fn test_round_trip() {
        let bytes = br#"{"columns": [
            {"name": "region", "values": ["east", "west"]},
            {"name": "2020", "values": [1.5, null]}
        ]}"#;
        let table = parse_json(bytes).unwrap();
        let encoded = serialize_json(&table).unwrap();
        assert_eq!(parse_json(&encoded).unwrap(), table);
    }
}
