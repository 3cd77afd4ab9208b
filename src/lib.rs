//! # axisbench
//!
//! Measure and model the empirical time complexity of summing a matrix along
//! its rows versus its columns.
//!
//! The crate generates deterministic square test matrices, times the axis
//! reduction across a range of matrix sizes, fits the power-law model
//! `time(n) = A * n^p + b` to each timing series, and exposes everything a
//! rendering layer needs:
//! - Raw and fitted timing series per axis
//! - Fitted exponent, scale, and offset with standard errors
//! - Human-readable terminal and JSON renderings
//!
//! ## Common Pitfall: Measuring Allocation Instead of Summation
//!
//! Keep matrix generation outside anything you time yourself. The harness
//! generates each test matrix once per size, before the timed loop, so the
//! series reflects summation cost rather than allocator behavior.
//!
//! ## Quick Start
//!
//! ```no_run
//! use axisbench::{output, ScalingProbe};
//!
//! let report = ScalingProbe::quick().run().unwrap();
//! println!("{}", output::format_report(&report));
//! ```
//!
//! Whether column summation is slower than row summation is an empirical
//! output of the benchmark on your machine, not a guarantee of this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod probe;
mod report;

// Functional modules
pub mod fit;
pub mod matrix;
pub mod measurement;
pub mod output;
pub mod reduce;

// Re-exports for public API
pub use config::SweepConfig;
pub use error::{Error, Result};
pub use fit::{fit_power_law, FitOptions, InitialGuess, PowerLaw, PowerLawFit};
pub use matrix::{generate_pair, MatrixPair, SquareMatrix};
pub use measurement::{run_sweep, SweepSeries, TimingSample};
pub use probe::ScalingProbe;
pub use reduce::{reduce, Axis};
pub use report::ScalingReport;
