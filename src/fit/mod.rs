//! Model fitting for timing series.

mod power_law;

pub use power_law::{fit_power_law, FitOptions, InitialGuess, PowerLaw, PowerLawFit};
