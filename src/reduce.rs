//! Axis reduction: collapse one dimension of a matrix by summation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::matrix::SquareMatrix;

/// Which axis collapses during reduction.
///
/// The typed API makes any other selector unrepresentable; textual selectors
/// (configuration, CLI flags) go through [`FromStr`], which rejects anything
/// that is not ROWS or COLUMNS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Element `i` of the result is the sum of row `i`.
    Rows,
    /// Element `j` of the result is the sum of column `j`.
    Columns,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => write!(f, "ROWS"),
            Axis::Columns => write!(f, "COLUMNS"),
        }
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ROWS" => Ok(Axis::Rows),
            "COLUMNS" => Ok(Axis::Columns),
            _ => Err(Error::InvalidAxis {
                input: s.to_string(),
            }),
        }
    }
}

/// Sum a matrix along the selected axis.
///
/// Returns a sequence of length n: row sums for [`Axis::Rows`], column sums
/// for [`Axis::Columns`]. Pure; identical results regardless of invocation
/// order or prior calls. Accumulation is exact `u64` addition from the
/// additive identity.
pub fn reduce(matrix: &SquareMatrix, axis: Axis) -> Vec<u64> {
    let n = matrix.size();
    match axis {
        Axis::Rows => (0..n).map(|i| matrix.row(i).iter().sum()).collect(),
        Axis::Columns => {
            // Single pass over the row-major data, accumulating into one
            // slot per column.
            let mut sums = vec![0u64; n];
            for row in 0..n {
                for (sum, value) in sums.iter_mut().zip(matrix.row(row)) {
                    *sum += value;
                }
            }
            sums
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::generate_pair;

    #[test]
    fn row_and_column_sums_match_reference() {
        let pair = generate_pair(3).unwrap();
        assert_eq!(reduce(&pair.even, Axis::Rows), vec![6, 24, 42]);
        assert_eq!(reduce(&pair.even, Axis::Columns), vec![18, 24, 30]);
    }

    #[test]
    fn both_axes_sum_to_matrix_total() {
        for n in 1..12 {
            let pair = generate_pair(n).unwrap();
            for m in [&pair.even, &pair.odd] {
                let rows: u64 = reduce(m, Axis::Rows).iter().sum();
                let cols: u64 = reduce(m, Axis::Columns).iter().sum();
                assert_eq!(rows, m.total());
                assert_eq!(cols, m.total());
            }
        }
    }

    #[test]
    fn reduction_has_no_hidden_state() {
        let pair = generate_pair(5).unwrap();
        let first = reduce(&pair.even, Axis::Columns);
        let _ = reduce(&pair.even, Axis::Rows);
        let second = reduce(&pair.even, Axis::Columns);
        assert_eq!(first, second);
    }

    #[test]
    fn axis_parses_both_selectors() {
        assert_eq!("ROWS".parse::<Axis>().unwrap(), Axis::Rows);
        assert_eq!("columns".parse::<Axis>().unwrap(), Axis::Columns);
        assert_eq!(" rows ".parse::<Axis>().unwrap(), Axis::Rows);
    }

    #[test]
    fn unknown_axis_rejected_with_usage_message() {
        let err = "depth".parse::<Axis>().unwrap_err();
        assert_eq!(err.to_string(), "invalid axis `depth`, use ROWS or COLUMNS");
    }

    #[test]
    fn axis_display_round_trips() {
        for axis in [Axis::Rows, Axis::Columns] {
            assert_eq!(axis.to_string().parse::<Axis>().unwrap(), axis);
        }
    }
}
