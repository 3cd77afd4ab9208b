//! Tests for power-law parameter recovery.

use approx::assert_relative_eq;
use axisbench::{fit_power_law, FitOptions, InitialGuess, PowerLaw};

#[test]
fn quadratic_recovery_from_the_reference_initial_guess() {
    let sizes = [1.0, 2.0, 3.0, 4.0];
    let times = [1.0, 4.0, 9.0, 16.0];
    // The reference starting point (p, A, b) = (2, 1e-5, 0.3).
    let options = FitOptions::default();

    let fit = fit_power_law(&sizes, &times, &options).unwrap();
    assert_relative_eq!(fit.params.exponent, 2.0, epsilon = 1e-3);
    assert_relative_eq!(fit.params.scale, 1.0, max_relative = 1e-2);
    assert!(fit.params.offset.abs() < 1e-2);
    assert!(fit.evaluations <= options.max_evaluations);
}

#[test]
fn recovery_across_exponents() {
    let sizes: Vec<f64> = (1..=16).map(|n| n as f64).collect();
    for exponent in [1.0, 2.0, 3.0] {
        let truth = PowerLaw {
            exponent,
            scale: 4e-6,
            offset: 2e-5,
        };
        let times: Vec<f64> = sizes.iter().map(|&n| truth.predict(n)).collect();
        let options = FitOptions::new().initial_guess(InitialGuess {
            exponent: 1.5,
            scale: 1e-5,
            offset: 0.0,
        });

        let fit = fit_power_law(&sizes, &times, &options).unwrap();
        assert_relative_eq!(fit.params.exponent, exponent, epsilon = 5e-3);
    }
}

#[test]
fn identical_inputs_yield_identical_parameters() {
    let sizes: Vec<f64> = (1..=10).map(|n| n as f64).collect();
    let times: Vec<f64> = sizes.iter().map(|&n| 2e-7 * n.powf(2.1) + 3e-6).collect();
    let options = FitOptions::default();

    let first = fit_power_law(&sizes, &times, &options).unwrap();
    let second = fit_power_law(&sizes, &times, &options).unwrap();

    // Bitwise equality: no hidden randomness anywhere in the fit.
    assert_eq!(first.params.exponent.to_bits(), second.params.exponent.to_bits());
    assert_eq!(first.params.scale.to_bits(), second.params.scale.to_bits());
    assert_eq!(first.params.offset.to_bits(), second.params.offset.to_bits());
    assert_eq!(first.evaluations, second.evaluations);
}

#[test]
fn standard_errors_shrink_with_cleaner_data() {
    let sizes: Vec<f64> = (1..=20).map(|n| n as f64).collect();
    let clean: Vec<f64> = sizes.iter().map(|&n| 1e-6 * n * n + 1e-5).collect();
    let noisy: Vec<f64> = sizes
        .iter()
        .enumerate()
        .map(|(i, &n)| 1e-6 * n * n + 1e-5 + 2e-6 * ((i % 2) as f64 - 0.5))
        .collect();
    let options = FitOptions::default();

    let clean_fit = fit_power_law(&sizes, &clean, &options).unwrap();
    let noisy_fit = fit_power_law(&sizes, &noisy, &options).unwrap();
    assert!(clean_fit.stderr_exponent < noisy_fit.stderr_exponent);
}
