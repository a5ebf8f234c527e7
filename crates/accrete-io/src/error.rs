//! Error types for table codecs.

use accrete_core::CoreError;
use thiserror::Error;

/// A specialized Result type for codec operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors raised while decoding or encoding tables.
#[derive(Error, Debug)]
pub enum IoError {
    /// Input bytes could not be decoded into a table.
    #[error("parse error: {0}")]
    Parse(String),

    /// A table could not be encoded.
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Decoded columns do not form a valid table.
    #[error("invalid table: {0}")]
    InvalidTable(#[from] CoreError),
}
