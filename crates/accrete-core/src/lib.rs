//! # Accrete Core
//!
//! Core types for the Accrete growth-rate imputation library.
//!
//! This crate provides the foundational building blocks used throughout
//! Accrete:
//!
//! - **Values**: the nullable cell type distinguishing numbers, text and
//!   missing data
//! - **Tables**: ordered named columns with constant-time name lookup
//! - **Windows**: resolved start/end period-column ranges
//! - **Vocabulary**: interpolation modes and rounding policies
//!
//! ## Design Philosophy
//!
//! - **Missing is a value**: absence is modelled explicitly, never as zero
//! - **Immutable inputs**: tables are read once; transforms produce new tables
//! - **Explicit over implicit**: position arithmetic over resolved windows,
//!   no label-based indexing magic
//!
//! ## Example
//!
//! ```rust
//! use accrete_core::prelude::*;
//!
//! let table = Table::new(vec![
//!     Column::new("2020", vec![Value::Number(1.0), Value::Missing]),
//!     Column::new("2021", vec![Value::Missing, Value::Number(4.0)]),
//! ])
//! .unwrap();
//!
//! let window = Window::resolve(&table, "2020", "2021").unwrap();
//! assert_eq!(window.len(), 2);
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
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::if_not_else)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Column, Interpolation, Rounding, Table, Value, Window};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Column, Interpolation, Rounding, Table, Value, Window};
