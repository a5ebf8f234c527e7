//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a batch imputation pass.
///
/// Controls only execution strategy; results are identical with or without
/// parallelism because rows are independent within a partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Whether parallel row processing may be used at all.
    pub parallel: bool,
    /// Minimum partition size before parallel iteration kicks in.
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 256,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration that always processes rows sequentially.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Overrides the parallel threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if a partition of `len` rows should be parallelized.
    #[must_use]
    pub fn should_parallelize(&self, len: usize) -> bool {
        self.parallel && len > self.parallel_threshold
    }
}
