//! Main `ScalingProbe` entry point and builder.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::SweepConfig;
use crate::error::Result;
use crate::fit::{fit_power_law, FitOptions, InitialGuess};
use crate::measurement::run_sweep;
use crate::report::ScalingReport;

/// Main entry point for the scaling benchmark.
///
/// Use the builder pattern to configure the sweep and the fit, then call
/// [`ScalingProbe::run`].
///
/// # Example
///
/// ```no_run
/// use axisbench::ScalingProbe;
///
/// let report = ScalingProbe::new()
///     .max_size(200)
///     .row_repetitions(500)
///     .column_repetitions(500)
///     .run()
///     .unwrap();
///
/// println!(
///     "rows scale as n^{:.2} ± {:.2}",
///     report.row_fit.params.exponent, report.row_fit.stderr_exponent
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScalingProbe {
    config: SweepConfig,
    fit: FitOptions,
}

impl ScalingProbe {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with the quick sweep preset.
    pub fn quick() -> Self {
        Self {
            config: SweepConfig::quick(),
            fit: FitOptions::default(),
        }
    }

    /// Create with the thorough sweep preset.
    pub fn thorough() -> Self {
        Self {
            config: SweepConfig::thorough(),
            fit: FitOptions::default(),
        }
    }

    /// Set the exclusive upper bound on matrix size.
    pub fn max_size(mut self, n: usize) -> Self {
        self.config = self.config.max_size(n);
        self
    }

    /// Set the row repetition count.
    pub fn row_repetitions(mut self, n: usize) -> Self {
        self.config = self.config.row_repetitions(n);
        self
    }

    /// Set the column repetition count.
    pub fn column_repetitions(mut self, n: usize) -> Self {
        self.config = self.config.column_repetitions(n);
        self
    }

    /// Set the warmup iterations per axis and size.
    pub fn warmup(mut self, n: usize) -> Self {
        self.config = self.config.warmup(n);
        self
    }

    /// Bound total sweep runtime.
    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.config = self.config.deadline(deadline);
        self
    }

    /// Set the optimizer starting point for both fits.
    pub fn initial_guess(mut self, guess: InitialGuess) -> Self {
        self.fit = self.fit.initial_guess(guess);
        self
    }

    /// Set the residual-evaluation budget for both fits.
    pub fn max_fit_evaluations(mut self, n: usize) -> Self {
        self.fit = self.fit.max_evaluations(n);
        self
    }

    /// Get the current sweep configuration.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Get the current fit options.
    pub fn fit_options(&self) -> &FitOptions {
        &self.fit
    }

    /// Run the sweep, fit both series, and assemble the report.
    ///
    /// Errors from the harness and the fitter propagate unchanged; nothing
    /// is retried and no partial report is produced.
    pub fn run(self) -> Result<ScalingReport> {
        let started = Instant::now();

        let series = run_sweep(&self.config)?;
        let sizes = series.sizes_f64();

        let row_fit = fit_power_law(&sizes, series.row_times(), &self.fit)?;
        let column_fit = fit_power_law(&sizes, series.column_times(), &self.fit)?;
        debug!(
            row_exponent = row_fit.params.exponent,
            column_exponent = column_fit.params.exponent,
            "fits complete"
        );

        let fitted_row_times = row_fit.predict_series(&sizes);
        let fitted_column_times = column_fit.predict_series(&sizes);

        Ok(ScalingReport {
            sizes: series.sizes().to_vec(),
            row_times: series.row_times().to_vec(),
            column_times: series.column_times().to_vec(),
            row_fit,
            column_fit,
            fitted_row_times,
            fitted_column_times,
            runtime_secs: started.elapsed().as_secs_f64(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_forwards_to_config() {
        let probe = ScalingProbe::new()
            .max_size(12)
            .row_repetitions(30)
            .column_repetitions(40)
            .warmup(2)
            .max_fit_evaluations(500);
        assert_eq!(probe.config().max_size, 12);
        assert_eq!(probe.config().row_repetitions, 30);
        assert_eq!(probe.config().column_repetitions, 40);
        assert_eq!(probe.config().warmup, 2);
        assert_eq!(probe.fit_options().max_evaluations, 500);
    }

    #[test]
    fn presets_pick_their_sweep_config() {
        assert_eq!(ScalingProbe::quick().config().max_size, 30);
        assert_eq!(ScalingProbe::thorough().config().max_size, 500);
    }
}
