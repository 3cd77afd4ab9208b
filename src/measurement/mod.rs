//! Measurement infrastructure for the scaling sweep.
//!
//! This module provides:
//! - Mean wall-clock timing of repeated invocations
//! - The sequential size sweep producing paired row/column timing series

mod harness;
mod timer;

pub use harness::{run_sweep, SweepSeries, TimingSample};
pub use timer::{black_box, mean_secs};
