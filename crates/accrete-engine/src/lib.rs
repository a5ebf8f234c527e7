//! # Accrete Engine
//!
//! Growth-rate imputation for time-indexed tables.
//!
//! Missing values are filled by inferring a per-row rate of change between
//! the first and last observed value inside a start/end period window, then
//! projecting that rate across the intervening periods. Rows without a
//! computable rate borrow the average rate of their partition (one category
//! group, or the whole table).
//!
//! This crate provides:
//!
//! - **Growth rates**: per-row rate derivation from observed endpoints
//! - **Fallbacks**: partition averages over defined rates
//! - **Filling**: forward propagation plus backward derivation for leading
//!   gaps, preserving every known value
//! - **Orchestration**: a single-pass batch transform with per-row issue
//!   reporting
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pass, no retries, no session state
//! - **Non-destructive**: present cells are never overwritten
//! - **Partial success**: rows that cannot be served are reported, not fatal
//!
//! ## Example
//!
//! ```rust
//! use accrete_core::{Column, Interpolation, Table, Value};
//! use accrete_engine::Imputer;
//!
//! let table = Table::new(vec![
//!     Column::new("2020", vec![Value::Number(1.0)]),
//!     Column::new("2021", vec![Value::Missing]),
//!     Column::new("2022", vec![Value::Number(3.0)]),
//! ])
//! .unwrap();
//!
//! let result = Imputer::new(Interpolation::Linear)
//!     .impute(&table, "2020", "2022")
//!     .unwrap();
//! assert!(result.report.is_complete());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]

pub mod config;
pub mod error;
pub mod fallback;
pub mod fill;
pub mod growth;
pub mod impute;
pub mod parallel;
pub mod report;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::error::{EngineError, EngineResult};
    pub use crate::fallback::fallback_rate;
    pub use crate::fill::{fill_row, FillOutcome};
    pub use crate::growth::{growth_rate, RateError, RowRate};
    pub use crate::impute::{Imputation, Imputer};
    pub use crate::report::{ImputationReport, ReportedRow, RowIssue};

    pub use accrete_core::prelude::*;
}

// Re-export commonly used types at crate root
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use impute::{Imputation, Imputer};
pub use report::{ImputationReport, ReportedRow, RowIssue};
