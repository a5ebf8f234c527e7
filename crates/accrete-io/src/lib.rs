//! # Accrete IO
//!
//! Byte-level table codecs for the Accrete imputation library.
//!
//! The engine itself performs no I/O; these collaborators decode uploaded
//! bytes into a [`Table`] and encode results back for download.

#![warn(missing_docs)]
#![warn(clippy::all)]

use accrete_core::Table;
use serde::{Deserialize, Serialize};

pub mod csv;
pub mod error;
pub mod json;

pub use error::{IoError, IoResult};

/// Supported table encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Comma-separated values, header row first.
    #[default]
    Csv,
    /// Column-oriented JSON.
    Json,
}

/// Decodes bytes into a table using the given format.
pub fn parse_table(bytes: &[u8], format: TableFormat) -> IoResult<Table> {
    match format {
        TableFormat::Csv => csv::parse_csv(bytes),
        TableFormat::Json => json::parse_json(bytes),
    }
}

/// Encodes a table into bytes using the given format.
pub fn serialize_table(table: &Table, format: TableFormat) -> IoResult<Vec<u8>> {
    match format {
        TableFormat::Csv => csv::serialize_csv(table),
        TableFormat::Json => json::serialize_json(table),
    }
}
