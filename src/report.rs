//! The output contract of a completed probe run.

use serde::{Deserialize, Serialize};

use crate::fit::PowerLawFit;

/// Everything a rendering layer needs from one run.
///
/// Raw and fitted series share indexing: `row_times[i]`, `column_times[i]`,
/// `fitted_row_times[i]` and `fitted_column_times[i]` all correspond to
/// `sizes[i]`. Any plotting or reporting layer can be swapped in on top of
/// this struct; nothing in the crate depends on what a renderer does with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingReport {
    /// Measured matrix sizes, ascending and contiguous from 1.
    pub sizes: Vec<usize>,
    /// Mean row-reduction seconds per size.
    pub row_times: Vec<f64>,
    /// Mean column-reduction seconds per size.
    pub column_times: Vec<f64>,
    /// Power-law fit of the row series.
    pub row_fit: PowerLawFit,
    /// Power-law fit of the column series.
    pub column_fit: PowerLawFit,
    /// Row model evaluated at each measured size.
    pub fitted_row_times: Vec<f64>,
    /// Column model evaluated at each measured size.
    pub fitted_column_times: Vec<f64>,
    /// Total wall-clock seconds the run took, sweep and fits included.
    pub runtime_secs: f64,
}
