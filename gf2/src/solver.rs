//! In-place Gauss–Jordan elimination over GF(2).
//!
//! The right-hand side is kept as a [`BitVec`] parallel to the matrix rather
//! than as an extra matrix column, and is mutated in lock-step with every
//! row swap and row addition.

use crate::{
    error::LinearSystemError,
    matrix::{dot, BitMatrix, WORD_BITS},
    vector::BitVec,
};
use ark_std::{cfg_chunks_mut, vec, vec::Vec};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of [`eliminate`]: the rank of the matrix and, for each of the
/// first `rank` rows, the column holding that row's leading one.
#[derive(Clone, Debug)]
pub struct Echelon {
    /// Number of pivot rows found.
    pub rank: usize,
    /// `pivot_cols[i]` is the pivot column of row `i`, for `i < rank`.
    /// Rows at or beyond `rank` have no pivot.
    pub pivot_cols: Vec<usize>,
}

/// Reduce `a` to reduced row-echelon form with partial pivoting, applying
/// every row operation to `b` as well.
///
/// Sweeps columns left to right; for each, the first row at or below the
/// current one with a set bit becomes the pivot row, and the pivot column is
/// cleared from every other row.
pub fn eliminate(a: &mut BitMatrix, b: &mut BitVec) -> Echelon {
    assert_eq!(a.rows(), b.len());
    let rows = a.rows();
    let wpr = a.words_per_row();
    let mut pivot_cols = Vec::new();
    let mut pivot = vec![0u64; wpr];
    let mut current = 0;
    for col in 0..a.cols() {
        let Some(pivot_row) = (current..rows).find(|&r| a.get(r, col)) else {
            continue;
        };
        a.swap_rows(current, pivot_row);
        b.swap(current, pivot_row);
        pivot_cols.push(col);
        pivot.copy_from_slice(a.row(current));

        // Fold the right-hand side first: the row sweep below clears the
        // pivot column, and a zero pivot bit leaves b untouched anyway.
        if b.get(current) {
            for r in 0..rows {
                if r != current && a.get(r, col) {
                    let flipped = !b.get(r);
                    b.set(r, flipped);
                }
            }
        }

        let word = col / WORD_BITS;
        let mask = 1u64 << (col % WORD_BITS);
        cfg_chunks_mut!(a.words_mut(), wpr)
            .enumerate()
            .for_each(|(r, row)| {
                if r != current && row[word] & mask != 0 {
                    for (d, s) in row.iter_mut().zip(&pivot) {
                        *d ^= s;
                    }
                }
            });

        current += 1;
        if current == rows {
            break;
        }
    }
    Echelon {
        rank: current,
        pivot_cols,
    }
}

/// After elimination, a system is consistent iff every pivotless row has a
/// zero right-hand side.
pub fn is_consistent(b: &BitVec, rank: usize) -> bool {
    (rank..b.len()).all(|r| !b.get(r))
}

/// Solve the reduced system, assigning zero to every free variable.
///
/// Row `i` of the reduced matrix is zero at every pivot column other than
/// its own and free variables are zero, so `x[pivot_cols[i]]` is `b[i]` plus
/// the full-width GF(2) dot product of the row with the partially-built
/// solution.
pub fn back_substitute(a: &BitMatrix, b: &BitVec, echelon: &Echelon) -> BitVec {
    let mut x = BitVec::zero(a.cols());
    for i in (0..echelon.rank).rev() {
        let col = echelon.pivot_cols[i];
        let parity = dot(a.row(i), x.as_words()) ^ b.get(i);
        x.set(col, parity);
    }
    x
}

/// Solve `a · x = b` in place, destroying `a` and `b`.
///
/// Free variables are assigned zero, so an under-determined system still
/// yields one valid preimage rather than an error.
pub fn solve(a: &mut BitMatrix, b: &mut BitVec) -> Result<BitVec, LinearSystemError> {
    if a.rows() != b.len() {
        return Err(LinearSystemError::DimensionMismatch);
    }
    let echelon = eliminate(a, b);
    if !is_consistent(b, echelon.rank) {
        return Err(LinearSystemError::Inconsistent);
    }
    Ok(back_substitute(a, b, &echelon))
}
