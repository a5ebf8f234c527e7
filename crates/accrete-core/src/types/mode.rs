//! Interpolation and rounding vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Interpolation mode for growth-rate imputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Additive rate: one period advances a value by `rate`.
    #[default]
    Linear,
    /// Multiplicative rate: one period scales a value by `1 + rate`.
    Exponential,
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Interpolation::Linear => "linear",
            Interpolation::Exponential => "exponential",
        };
        write!(f, "{name}")
    }
}

/// Precision policy applied to imputed cells.
///
/// Known cells are never rounded; the policy only shapes values written into
/// previously-missing cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Round imputed values to the nearest whole unit (the default).
    #[default]
    Integer,
    /// Preserve imputed values at full float precision.
    Exact,
}

impl Rounding {
    /// Applies the policy to a freshly imputed value.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Rounding::Integer => value.round(),
            Rounding::Exact => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Interpolation::Linear.to_string(), "linear");
        assert_eq!(Interpolation::Exponential.to_string(), "exponential");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(Rounding::Integer.apply(2.4), 2.0);
        assert_eq!(Rounding::Integer.apply(2.5), 3.0);
        assert_eq!(Rounding::Exact.apply(2.4), 2.4);
    }

    #[test]
    fn test_serde_names() {
        let mode: Interpolation = serde_json::from_str("\"exponential\"").unwrap();
        assert_eq!(mode, Interpolation::Exponential);
        assert_eq!(serde_json::to_string(&Rounding::Integer).unwrap(), "\"integer\"");
    }
}
