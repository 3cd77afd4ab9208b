//! Configuration for the scaling sweep.

use std::time::Duration;

use crate::error::{Error, Result};

/// Configuration options for the benchmark harness.
///
/// The sweep measures every size from 1 to `max_size - 1` inclusive; row and
/// column repetition counts are independent so the two series can trade
/// precision for runtime separately.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Exclusive upper bound on matrix size. The sweep covers 1..max_size.
    ///
    /// Default: 100.
    pub max_size: usize,

    /// Consecutive `reduce(…, Rows)` invocations averaged into one sample.
    ///
    /// Default: 200.
    pub row_repetitions: usize,

    /// Consecutive `reduce(…, Columns)` invocations averaged into one sample.
    ///
    /// Default: 200.
    pub column_repetitions: usize,

    /// Untimed reduction calls per axis before measuring each size.
    ///
    /// Warms caches and stabilizes frequency scaling before the timed loop.
    /// Default: 5.
    pub warmup: usize,

    /// Optional hard bound on total sweep runtime.
    ///
    /// Total runtime grows with `max_size × (row_repetitions +
    /// column_repetitions)`; exceeding the deadline aborts the run with
    /// [`Error::DeadlineExceeded`]. No partial results are returned.
    /// Default: None.
    pub deadline: Option<Duration>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            max_size: 100,
            row_repetitions: 200,
            column_repetitions: 200,
            warmup: 5,
            deadline: None,
        }
    }
}

impl SweepConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Quick configuration for development and CI.
    ///
    /// Sweeps sizes 1..30 with 50 repetitions per axis.
    pub fn quick() -> Self {
        Self {
            max_size: 30,
            row_repetitions: 50,
            column_repetitions: 50,
            ..Default::default()
        }
    }

    /// Thorough configuration for detailed scaling curves.
    ///
    /// Sweeps sizes 1..500 with 500 repetitions per axis and a 10 minute
    /// deadline.
    pub fn thorough() -> Self {
        Self {
            max_size: 500,
            row_repetitions: 500,
            column_repetitions: 500,
            deadline: Some(Duration::from_secs(600)),
            ..Default::default()
        }
    }

    /// Configuration reproducing the reference measurement counts.
    ///
    /// Sizes 1..999 with the asymmetric 500/50 row/column repetitions the
    /// reference used. The asymmetry biases noise levels differently per
    /// series and is kept only for comparison runs.
    pub fn reference() -> Self {
        Self {
            max_size: 1000,
            row_repetitions: 500,
            column_repetitions: 50,
            warmup: 0,
            deadline: None,
        }
    }

    /// Set the exclusive upper bound on matrix size.
    pub fn max_size(mut self, n: usize) -> Self {
        assert!(n >= 2, "max_size must be >= 2 so the sweep is non-empty");
        self.max_size = n;
        self
    }

    /// Set the row repetition count.
    pub fn row_repetitions(mut self, n: usize) -> Self {
        assert!(n > 0, "row_repetitions must be > 0");
        self.row_repetitions = n;
        self
    }

    /// Set the column repetition count.
    pub fn column_repetitions(mut self, n: usize) -> Self {
        assert!(n > 0, "column_repetitions must be > 0");
        self.column_repetitions = n;
        self
    }

    /// Set the warmup iterations per axis and size.
    pub fn warmup(mut self, n: usize) -> Self {
        self.warmup = n;
        self
    }

    /// Bound total sweep runtime.
    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Check that the configuration describes a runnable sweep.
    pub fn validate(&self) -> Result<()> {
        if self.max_size < 2 {
            return Err(Error::InvalidSize { size: self.max_size });
        }
        if self.row_repetitions == 0 || self.column_repetitions == 0 {
            return Err(Error::InsufficientSamples {
                required: 1,
                actual: 0,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SweepConfig::default();
        assert_eq!(config.max_size, 100);
        assert_eq!(config.row_repetitions, 200);
        assert_eq!(config.column_repetitions, 200);
        assert!(config.deadline.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn preset_configs() {
        let quick = SweepConfig::quick();
        assert_eq!(quick.max_size, 30);
        assert_eq!(quick.row_repetitions, 50);

        let thorough = SweepConfig::thorough();
        assert_eq!(thorough.max_size, 500);
        assert_eq!(thorough.deadline, Some(Duration::from_secs(600)));

        let reference = SweepConfig::reference();
        assert_eq!(reference.max_size, 1000);
        assert_eq!(reference.row_repetitions, 500);
        assert_eq!(reference.column_repetitions, 50);
    }

    #[test]
    fn builder_methods() {
        let config = SweepConfig::new()
            .max_size(10)
            .row_repetitions(7)
            .column_repetitions(3)
            .warmup(0)
            .deadline(Duration::from_secs(5));
        assert_eq!(config.max_size, 10);
        assert_eq!(config.row_repetitions, 7);
        assert_eq!(config.column_repetitions, 3);
        assert_eq!(config.warmup, 0);
        assert_eq!(config.deadline, Some(Duration::from_secs(5)));
    }

    #[test]
    fn validation_rejects_degenerate_sweep() {
        let mut config = SweepConfig::default();
        config.max_size = 1;
        assert!(config.validate().is_err());

        let mut config = SweepConfig::default();
        config.column_repetitions = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[should_panic(expected = "max_size must be >= 2")]
    fn max_size_one_panics() {
        let _ = SweepConfig::new().max_size(1);
    }

    #[test]
    #[should_panic(expected = "row_repetitions must be > 0")]
    fn zero_row_repetitions_panics() {
        let _ = SweepConfig::new().row_repetitions(0);
    }
}
