//! Power-law fitting via Levenberg-Marquardt nonlinear least squares.
//!
//! Fits the three-parameter model `time(n) = A * n^p + b` to a timing series
//! by minimizing the sum of squared residuals. The model is ill-conditioned
//! for short, noisy series, so the initial guess matters and stays
//! configurable; damping keeps steps sane when the normal equations are
//! nearly singular.

use std::fmt;

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};

/// Damping growth/shrink factor per rejected/accepted step.
const LAMBDA_FACTOR: f64 = 10.0;
/// Damping value beyond which the fit is treated as stuck at a minimum.
const LAMBDA_MAX: f64 = 1e12;
/// Floor on diagonal entries when damping, to keep the solve well-posed.
const DIAG_FLOOR: f64 = 1e-12;

/// The fitted model parameters `A * n^p + b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerLaw {
    /// Exponent p.
    pub exponent: f64,
    /// Scale A.
    pub scale: f64,
    /// Offset b.
    pub offset: f64,
}

impl PowerLaw {
    /// Evaluate the model at size `n`.
    pub fn predict(&self, n: f64) -> f64 {
        self.scale * n.powf(self.exponent) + self.offset
    }
}

impl fmt::Display for PowerLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3e} * n^{:.3} + {:.3e}",
            self.scale, self.exponent, self.offset
        )
    }
}

/// Starting point for the optimizer.
///
/// The reference starting point is `(p, A, b) = (2, 1e-5, 0.3)`, which suits
/// second-order growth measured in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialGuess {
    /// Initial exponent p₀.
    pub exponent: f64,
    /// Initial scale A₀.
    pub scale: f64,
    /// Initial offset b₀.
    pub offset: f64,
}

impl Default for InitialGuess {
    fn default() -> Self {
        Self {
            exponent: 2.0,
            scale: 1e-5,
            offset: 0.3,
        }
    }
}

/// Options controlling the fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    /// Optimizer starting point.
    pub initial_guess: InitialGuess,
    /// Budget of residual evaluations before giving up.
    ///
    /// Default: 10,000.
    pub max_evaluations: usize,
    /// Relative reduction in the residual sum of squares below which an
    /// accepted step counts as convergence.
    pub ftol: f64,
    /// Infinity-norm of an accepted step below which the fit counts as
    /// converged.
    pub xtol: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            initial_guess: InitialGuess::default(),
            max_evaluations: 10_000,
            ftol: 1e-12,
            xtol: 1e-12,
        }
    }
}

impl FitOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the optimizer starting point.
    pub fn initial_guess(mut self, guess: InitialGuess) -> Self {
        self.initial_guess = guess;
        self
    }

    /// Set the residual-evaluation budget.
    pub fn max_evaluations(mut self, n: usize) -> Self {
        assert!(n > 0, "max_evaluations must be > 0");
        self.max_evaluations = n;
        self
    }
}

/// A completed fit: parameters, their standard errors, and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerLawFit {
    /// Fitted parameters.
    pub params: PowerLaw,
    /// Standard error of the exponent.
    pub stderr_exponent: f64,
    /// Standard error of the scale.
    pub stderr_scale: f64,
    /// Standard error of the offset.
    pub stderr_offset: f64,
    /// Residual sum of squares at the solution.
    pub ssr: f64,
    /// Residual evaluations consumed.
    pub evaluations: usize,
}

impl PowerLawFit {
    /// Evaluate the fitted model at size `n`.
    pub fn predict(&self, n: f64) -> f64 {
        self.params.predict(n)
    }

    /// Evaluate the fitted model over a size series.
    pub fn predict_series(&self, sizes: &[f64]) -> Vec<f64> {
        sizes.iter().map(|&n| self.predict(n)).collect()
    }
}

/// Fit `time(n) = A * n^p + b` to the given series.
///
/// Levenberg-Marquardt with the analytic Jacobian, starting from
/// `options.initial_guess`. Standard errors come from the parameter
/// covariance estimate `s² (JᵀJ)⁻¹` at the solution, with
/// `s² = SSR / (m - 3)`.
///
/// Deterministic and reentrant: identical inputs and identical options yield
/// identical parameters. Fails with [`Error::FitDidNotConverge`] (carrying
/// the best parameters found) if the evaluation budget runs out, and with
/// [`Error::LengthMismatch`] / [`Error::InsufficientSamples`] on malformed
/// input.
pub fn fit_power_law(sizes: &[f64], times: &[f64], options: &FitOptions) -> Result<PowerLawFit> {
    if sizes.len() != times.len() {
        return Err(Error::LengthMismatch {
            sizes: sizes.len(),
            times: times.len(),
        });
    }
    // Three parameters plus at least one degree of freedom for s².
    if sizes.len() < 4 {
        return Err(Error::InsufficientSamples {
            required: 4,
            actual: sizes.len(),
        });
    }

    let y = DVector::from_column_slice(times);
    let guess = options.initial_guess;
    let mut params = DVector::from_vec(vec![guess.exponent, guess.scale, guess.offset]);

    let mut evaluations = 0usize;
    let mut residuals = residual_vector(sizes, &y, &params);
    evaluations += 1;
    let mut ssr = residuals.norm_squared();
    let mut lambda = 1e-3;
    let mut converged = false;

    while !converged {
        let jacobian = jacobian_matrix(sizes, &params);
        let jtj = jacobian.transpose() * &jacobian;
        let jtr = jacobian.transpose() * &residuals;

        // Inner damping loop: grow lambda until a step reduces the SSR.
        let mut stepped = false;
        while evaluations < options.max_evaluations {
            let mut damped = jtj.clone();
            for i in 0..3 {
                damped[(i, i)] += lambda * jtj[(i, i)].max(DIAG_FLOOR);
            }

            if let Some(step) = damped.lu().solve(&jtr) {
                let trial = &params + &step;
                let trial_residuals = residual_vector(sizes, &y, &trial);
                evaluations += 1;
                let trial_ssr = trial_residuals.norm_squared();

                if trial_ssr.is_finite() && trial_ssr < ssr {
                    let improvement = ssr - trial_ssr;
                    params = trial;
                    residuals = trial_residuals;
                    let previous = ssr;
                    ssr = trial_ssr;
                    lambda = (lambda / LAMBDA_FACTOR).max(1e-14);
                    stepped = true;

                    trace!(ssr, lambda, evaluations, "accepted step");
                    if improvement <= options.ftol * previous.max(f64::EPSILON)
                        || step.amax() <= options.xtol
                    {
                        converged = true;
                    }
                    break;
                }
            }

            lambda *= LAMBDA_FACTOR;
            if lambda > LAMBDA_MAX {
                // No direction improves the SSR even with near-gradient
                // steps: we are at a (local) minimum.
                converged = true;
                break;
            }
        }

        if !converged && !stepped {
            return Err(Error::FitDidNotConverge {
                evaluations,
                best: PowerLaw {
                    exponent: params[0],
                    scale: params[1],
                    offset: params[2],
                },
            });
        }
    }

    let fitted = PowerLaw {
        exponent: params[0],
        scale: params[1],
        offset: params[2],
    };

    // Covariance estimate at the solution: s^2 (J^T J)^-1.
    let jacobian = jacobian_matrix(sizes, &params);
    let jtj = jacobian.transpose() * &jacobian;
    let dof = (sizes.len() - 3) as f64;
    let s2 = ssr / dof;
    let (stderr_exponent, stderr_scale, stderr_offset) = match jtj.try_inverse() {
        Some(inverse) => {
            let stderr = |i: usize| (s2 * inverse[(i, i)]).max(0.0).sqrt();
            (stderr(0), stderr(1), stderr(2))
        }
        // Singular information matrix: the parameters are unidentifiable
        // from this series, report unbounded uncertainty.
        None => (f64::INFINITY, f64::INFINITY, f64::INFINITY),
    };

    Ok(PowerLawFit {
        params: fitted,
        stderr_exponent,
        stderr_scale,
        stderr_offset,
        ssr,
        evaluations,
    })
}

/// Residuals `y_i - (A * n_i^p + b)` at the given parameters.
fn residual_vector(sizes: &[f64], y: &DVector<f64>, params: &DVector<f64>) -> DVector<f64> {
    let (p, a, b) = (params[0], params[1], params[2]);
    DVector::from_iterator(
        sizes.len(),
        sizes.iter().zip(y.iter()).map(|(&n, &t)| t - (a * n.powf(p) + b)),
    )
}

/// Jacobian of the model, one row per sample, columns (p, A, b).
fn jacobian_matrix(sizes: &[f64], params: &DVector<f64>) -> DMatrix<f64> {
    let (p, a, _) = (params[0], params[1], params[2]);
    DMatrix::from_fn(sizes.len(), 3, |i, j| {
        let n = sizes[i];
        let npow = n.powf(p);
        match j {
            0 => a * npow * n.ln(),
            1 => npow,
            _ => 1.0,
        }
    })
}
