//! Run a small scaling sweep and print the fitted report.

use axisbench::{output, ScalingProbe};

fn main() {
    println!("axisbench sweep example\n");

    let report = ScalingProbe::new()
        .max_size(150)
        .row_repetitions(200)
        .column_repetitions(200)
        .run()
        .expect("sweep failed");

    println!("{}", output::format_report(&report));

    println!(
        "rows:    time(n) = {:.3e} * n^{:.3} + {:.3e}  (p ± {:.3})",
        report.row_fit.params.scale,
        report.row_fit.params.exponent,
        report.row_fit.params.offset,
        report.row_fit.stderr_exponent
    );
    println!(
        "columns: time(n) = {:.3e} * n^{:.3} + {:.3e}  (p ± {:.3})",
        report.column_fit.params.scale,
        report.column_fit.params.exponent,
        report.column_fit.params.offset,
        report.column_fit.stderr_exponent
    );
}
