//! Error types for the imputation engine.
//!
//! Only structural input errors surface here; per-row data conditions are
//! collected in the [`ImputationReport`](crate::report::ImputationReport).

use accrete_core::CoreError;
use thiserror::Error;

/// A specialized Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Structural errors that abort a batch pass before any row is processed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The start/end identifiers do not resolve to an ordered numeric
    /// period-column range.
    #[error("Invalid window: {0}")]
    InvalidWindow(#[from] CoreError),

    /// The category column is unusable for partitioning.
    #[error("Invalid category column: {reason}")]
    InvalidCategory {
        /// Description of what's invalid.
        reason: String,
    },
}

impl EngineError {
    /// Creates an invalid category error.
    #[must_use]
    pub fn invalid_category(reason: impl Into<String>) -> Self {
        Self::InvalidCategory {
            reason: reason.into(),
        }
    }
}
