//! Error types for axisbench operations.

use std::time::Duration;

use thiserror::Error;

use crate::fit::PowerLaw;

/// Main error type for axisbench operations.
///
/// No component catches and suppresses errors from a collaborator; every
/// failure propagates to the caller of the entry point, and a failure during
/// a sweep discards the whole run.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Matrix generation was asked for a zero-sized matrix.
    #[error("invalid matrix size {size}, must be at least 1")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },

    /// An axis selector string was neither ROWS nor COLUMNS.
    #[error("invalid axis `{input}`, use ROWS or COLUMNS")]
    InvalidAxis {
        /// The rejected selector text.
        input: String,
    },

    /// The size and time series handed to the fitter have different lengths.
    #[error("series length mismatch: {sizes} sizes vs {times} times")]
    LengthMismatch {
        /// Number of size entries.
        sizes: usize,
        /// Number of time entries.
        times: usize,
    },

    /// Too few samples to estimate three parameters and a residual variance.
    #[error("need at least {required} samples to fit a power law, got {actual}")]
    InsufficientSamples {
        /// Minimum sample count the fitter accepts.
        required: usize,
        /// Sample count that was provided.
        actual: usize,
    },

    /// The optimizer exhausted its evaluation budget without converging.
    ///
    /// Carries the last best-known parameters for diagnostics; they are not
    /// suitable for reporting.
    #[error("power-law fit did not converge within {evaluations} evaluations (best so far: {best})")]
    FitDidNotConverge {
        /// Function evaluations consumed.
        evaluations: usize,
        /// Best parameters found before the budget ran out.
        best: PowerLaw,
    },

    /// The sweep exceeded its configured deadline.
    #[error("sweep deadline of {deadline:?} exceeded after {elapsed:?}")]
    DeadlineExceeded {
        /// Wall-clock time consumed when the deadline check fired.
        elapsed: Duration,
        /// The configured bound.
        deadline: Duration,
    },
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, Error>;
