//! Deterministic square test matrices.
//!
//! The benchmark operates on matrices whose entries are fully determined by a
//! generation rule, so repeated runs time exactly the same data. Two rules are
//! provided: consecutive even integers starting at 0 and consecutive odd
//! integers starting at 1, both laid out row-major in increasing order.

use crate::error::{Error, Result};

/// An n×n grid of unsigned integers with row-major layout.
///
/// Immutable once created and owned solely by the caller that requested it.
/// Entries are `u64`, so sums over the generated matrices are exact at every
/// size the harness sweeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix {
    size: usize,
    data: Vec<u64>,
}

impl SquareMatrix {
    /// Build the n×n matrix of the first n² non-negative even integers
    /// (0, 2, 4, …) in row-major increasing order.
    ///
    /// Fails with [`Error::InvalidSize`] for `n = 0`.
    pub fn evens(n: usize) -> Result<Self> {
        Self::from_rule(n, |k| 2 * k as u64)
    }

    /// Build the n×n matrix of the first n² positive odd integers
    /// (1, 3, 5, …) in row-major increasing order.
    ///
    /// Fails with [`Error::InvalidSize`] for `n = 0`.
    pub fn odds(n: usize) -> Result<Self> {
        Self::from_rule(n, |k| 2 * k as u64 + 1)
    }

    /// Build an n×n matrix from a rule over the flat row-major index.
    fn from_rule(n: usize, rule: impl Fn(usize) -> u64) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidSize { size: n });
        }
        let data = (0..n * n).map(rule).collect();
        Ok(Self { size: n, data })
    }

    /// Side length of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> u64 {
        assert!(i < self.size && j < self.size, "index out of bounds");
        self.data[i * self.size + j]
    }

    /// Row `i` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn row(&self, i: usize) -> &[u64] {
        assert!(i < self.size, "row index out of bounds");
        &self.data[i * self.size..(i + 1) * self.size]
    }

    /// Sum of all entries.
    pub fn total(&self) -> u64 {
        self.data.iter().sum()
    }

    /// All entries in row-major order.
    pub fn entries(&self) -> &[u64] {
        &self.data
    }
}

/// The even/odd matrix pair produced by one generation call.
#[derive(Debug, Clone)]
pub struct MatrixPair {
    /// First n² non-negative even integers, row-major.
    pub even: SquareMatrix,
    /// First n² positive odd integers, row-major.
    pub odd: SquareMatrix,
}

/// Generate the even and odd n×n matrices for one sweep step.
///
/// Deterministic and side-effect free. Fails with [`Error::InvalidSize`] for
/// `n = 0`.
pub fn generate_pair(n: usize) -> Result<MatrixPair> {
    Ok(MatrixPair {
        even: SquareMatrix::evens(n)?,
        odd: SquareMatrix::odds(n)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_rejected() {
        assert!(matches!(
            SquareMatrix::evens(0),
            Err(Error::InvalidSize { size: 0 })
        ));
        assert!(matches!(generate_pair(0), Err(Error::InvalidSize { size: 0 })));
    }

    #[test]
    fn generate_three_matches_reference_layout() {
        let pair = generate_pair(3).unwrap();
        assert_eq!(pair.even.row(0), &[0, 2, 4]);
        assert_eq!(pair.even.row(1), &[6, 8, 10]);
        assert_eq!(pair.even.row(2), &[12, 14, 16]);
        assert_eq!(pair.odd.row(0), &[1, 3, 5]);
        assert_eq!(pair.odd.row(1), &[7, 9, 11]);
        assert_eq!(pair.odd.row(2), &[13, 15, 17]);
    }

    #[test]
    fn entry_bounds_hold_for_all_small_sizes() {
        for n in 1..20 {
            let pair = generate_pair(n).unwrap();
            let n64 = n as u64;
            assert_eq!(pair.even.size(), n);
            assert_eq!(pair.even.entries().len(), n * n);
            assert_eq!(pair.even.get(0, 0), 0);
            assert_eq!(pair.even.get(n - 1, n - 1), 2 * n64 * n64 - 2);
            assert!(pair.even.entries().iter().all(|e| e % 2 == 0));
            assert_eq!(pair.odd.get(0, 0), 1);
            assert_eq!(pair.odd.get(n - 1, n - 1), 2 * n64 * n64 - 1);
            assert!(pair.odd.entries().iter().all(|e| e % 2 == 1));
        }
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(SquareMatrix::evens(7).unwrap(), SquareMatrix::evens(7).unwrap());
        assert_eq!(SquareMatrix::odds(7).unwrap(), SquareMatrix::odds(7).unwrap());
    }

    #[test]
    fn total_sums_arithmetic_series() {
        // Sum of first k even integers 0..2(k-1) is k(k-1); k = n².
        let m = SquareMatrix::evens(4).unwrap();
        assert_eq!(m.total(), 16 * 15);
    }
}
