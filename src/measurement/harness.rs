//! The benchmark sweep: mean reduction time per axis across matrix sizes.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::SweepConfig;
use crate::error::{Error, Result};
use crate::matrix::SquareMatrix;
use crate::reduce::{reduce, Axis};

use super::timer::{black_box, mean_secs};

/// One `(size, mean seconds)` measurement for a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingSample {
    /// Matrix side length.
    pub size: usize,
    /// Mean wall-clock seconds per reduction call.
    pub mean_secs: f64,
}

/// The timing series collected by one sweep.
///
/// Invariants: `sizes` is strictly increasing by 1 starting at 1, and
/// `row_times[i]` / `column_times[i]` correspond to `sizes[i]`. Both series
/// always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSeries {
    sizes: Vec<usize>,
    row_times: Vec<f64>,
    column_times: Vec<f64>,
}

impl SweepSeries {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            sizes: Vec::with_capacity(capacity),
            row_times: Vec::with_capacity(capacity),
            column_times: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, size: usize, row_secs: f64, column_secs: f64) {
        debug_assert_eq!(size, self.sizes.len() + 1, "sizes must be contiguous from 1");
        self.sizes.push(size);
        self.row_times.push(row_secs);
        self.column_times.push(column_secs);
    }

    /// Number of sizes measured.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// True when nothing was measured.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// The measured matrix sizes, ascending and contiguous from 1.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// The sizes as `f64`, in the shape the fitter consumes.
    pub fn sizes_f64(&self) -> Vec<f64> {
        self.sizes.iter().map(|&n| n as f64).collect()
    }

    /// Mean row-reduction seconds, indexed like [`SweepSeries::sizes`].
    pub fn row_times(&self) -> &[f64] {
        &self.row_times
    }

    /// Mean column-reduction seconds, indexed like [`SweepSeries::sizes`].
    pub fn column_times(&self) -> &[f64] {
        &self.column_times
    }

    /// Samples for one axis as `(size, mean)` pairs.
    pub fn samples(&self, axis: Axis) -> Vec<TimingSample> {
        let times = match axis {
            Axis::Rows => &self.row_times,
            Axis::Columns => &self.column_times,
        };
        self.sizes
            .iter()
            .zip(times)
            .map(|(&size, &mean_secs)| TimingSample { size, mean_secs })
            .collect()
    }
}

/// Run the timing sweep described by `config`.
///
/// For each size n in `1..config.max_size`: generate the even test matrix,
/// run the configured warmup, then record the mean wall-clock duration of a
/// row reduction over `row_repetitions` calls and of a column reduction over
/// `column_repetitions` calls. Strictly sequential; each size completes
/// before the next begins.
///
/// Fails with [`Error::DeadlineExceeded`] if the configured deadline elapses
/// mid-sweep; the partial series is discarded.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepSeries> {
    config.validate()?;

    let started = Instant::now();
    let mut series = SweepSeries::with_capacity(config.max_size - 1);

    debug!(
        max_size = config.max_size,
        row_repetitions = config.row_repetitions,
        column_repetitions = config.column_repetitions,
        "starting sweep"
    );

    for n in 1..config.max_size {
        if let Some(deadline) = config.deadline {
            let elapsed = started.elapsed();
            if elapsed > deadline {
                return Err(Error::DeadlineExceeded { elapsed, deadline });
            }
        }

        let matrix = SquareMatrix::evens(n)?;

        for _ in 0..config.warmup {
            black_box(reduce(&matrix, Axis::Rows));
            black_box(reduce(&matrix, Axis::Columns));
        }

        let row_secs = mean_secs(config.row_repetitions, || reduce(&matrix, Axis::Rows));
        let column_secs = mean_secs(config.column_repetitions, || reduce(&matrix, Axis::Columns));

        trace!(n, row_secs, column_secs, "measured size");
        series.push(n, row_secs, column_secs);
    }

    debug!(
        sizes = series.len(),
        runtime_secs = started.elapsed().as_secs_f64(),
        "sweep complete"
    );
    Ok(series)
}
