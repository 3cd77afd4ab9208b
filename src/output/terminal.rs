//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::fit::PowerLawFit;
use crate::report::ScalingReport;

/// Format a `ScalingReport` for human-readable terminal output.
///
/// Uses ANSI colors and Unicode box drawing. Shows the fitted exponent with
/// its uncertainty for each axis, plus sweep shape and runtime; the raw
/// series stay on the report for plotting layers.
pub fn format_report(report: &ScalingReport) -> String {
    let mut output = String::new();

    let header = "AXIS SUMMATION SCALING".bold().to_string();
    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&header));
    output.push_str(&format_box_separator());

    let sweep_str = format!(
        "Sizes: 1..={}   Samples per axis: {}",
        report.sizes.last().copied().unwrap_or(0),
        report.sizes.len()
    );
    output.push_str(&format_box_line(&sweep_str));

    let runtime_str = format!("Runtime: {:.2} s", report.runtime_secs);
    output.push_str(&format_box_line(&runtime_str));

    output.push_str(&format_box_separator());
    output.push_str(&format_box_line(&"Rows".bold().to_string()));
    push_fit_lines(&mut output, &report.row_fit);

    output.push_str(&format_box_separator());
    output.push_str(&format_box_line(&"Columns".bold().to_string()));
    push_fit_lines(&mut output, &report.column_fit);

    output.push_str(&format_box_bottom());

    output.push_str(&format!(
        "\n{}\n",
        "Model: time(n) = A * n^p + b, fitted per axis by nonlinear least squares."
            .dimmed()
            .italic()
    ));

    output
}

fn push_fit_lines(output: &mut String, fit: &PowerLawFit) {
    let exponent_str = format!(
        "  Exponent p: {:.3} \u{00B1} {:.3}",
        fit.params.exponent, fit.stderr_exponent
    );
    output.push_str(&format_box_line(&exponent_colored(
        fit.params.exponent,
        &exponent_str,
    )));

    let scale_str = format!(
        "  Scale A:    {:.3e} \u{00B1} {:.3e}",
        fit.params.scale, fit.stderr_scale
    );
    output.push_str(&format_box_line(&scale_str));

    let offset_str = format!(
        "  Offset b:   {:.3e} \u{00B1} {:.3e}",
        fit.params.offset, fit.stderr_offset
    );
    output.push_str(&format_box_line(&offset_str));

    let diag_str = format!(
        "  SSR: {:.3e}   Evaluations: {}",
        fit.ssr, fit.evaluations
    );
    output.push_str(&format_box_line(&diag_str.dimmed().to_string()));
}

/// Color an exponent line by how far it sits from linear scaling.
fn exponent_colored(exponent: f64, text: &str) -> String {
    if exponent > 2.5 {
        text.red().to_string()
    } else if exponent > 1.5 {
        text.yellow().to_string()
    } else {
        text.green().to_string()
    }
}

// Box drawing helpers

const BOX_WIDTH: usize = 60;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Strip ANSI codes for length calculation
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = if visible_len < BOX_WIDTH - 2 {
        BOX_WIDTH - 2 - visible_len
    } else {
        0
    };
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}
