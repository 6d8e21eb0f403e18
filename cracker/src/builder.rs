//! Materializes the GF(2) transformation matrix of the generator.
//!
//! Column `j` of the matrix is the observed-bit stream of a generator
//! started from the unit state `e_j`. Columns are harvested 64 at a time,
//! one block per storage word, so each block owns a disjoint word column
//! and the fan-out needs no shared mutable state.

use crate::{
    error::CrackError,
    mt::{Mt19937, STATE_WORDS},
};
use ark_std::{cfg_into_iter, vec, vec::Vec};
use gf2::{BitMatrix, WORD_BITS};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Number of state bits of the generator: 624 words of 32 bits.
pub const STATE_BITS: usize = STATE_WORDS * 32;

/// Supported observation widths: powers of two up to a whole output word.
pub(crate) fn supported_width(v: u32) -> bool {
    matches!(v, 1 | 2 | 4 | 8 | 16 | 32)
}

/// Materialize the transformation matrix for top-`v`-bit observations.
///
/// Row `o·v + t`, column `j` is set iff a generator started from unit state
/// `e_j` emits, on its `o`-th extraction, a word whose bit `31 − t` is one.
/// For `v = 1` this is the MSB stream. The matrix depends only on the
/// generator constants and `v`; two builds are identical.
///
/// Fails with [`CrackError::BadParameter`] unless `v` is a power of two in
/// `{1, 2, 4, 8, 16, 32}`.
pub fn build_matrix(v: u32) -> Result<BitMatrix, CrackError> {
    if !supported_width(v) {
        return Err(CrackError::BadParameter);
    }
    Ok(build(v))
}

pub(crate) fn build(v: u32) -> BitMatrix {
    let _span = tracing::info_span!(target: "cracker", "build_matrix", v).entered();
    let blocks = STATE_BITS / WORD_BITS;
    let columns: Vec<Vec<u64>> = cfg_into_iter!(0..blocks)
        .map(|block| column_block(block, v))
        .collect();
    let mut a = BitMatrix::zero(STATE_BITS, STATE_BITS);
    for (w, block) in columns.iter().enumerate() {
        for (r, &word) in block.iter().enumerate() {
            a.row_mut(r)[w] = word;
        }
    }
    a
}

/// Harvest one 64-column block: bit `lane` of entry `r` is the matrix cell
/// `(r, block · 64 + lane)`.
fn column_block(block: usize, v: u32) -> Vec<u64> {
    let v = v as usize;
    let mut engines: Vec<Mt19937> = (0..WORD_BITS)
        .map(|lane| Mt19937::from_state(unit_state(block * WORD_BITS + lane)))
        .collect();
    let mut words = vec![0u64; STATE_BITS];
    for output in 0..STATE_BITS / v {
        for (lane, engine) in engines.iter_mut().enumerate() {
            let y = engine.next_u32();
            for t in 0..v {
                if (y >> (31 - t)) & 1 != 0 {
                    words[output * v + t] |= 1u64 << lane;
                }
            }
        }
    }
    words
}

/// The all-zero state with state bit `j` set: word `j / 32`, bit `j mod 32`.
fn unit_state(j: usize) -> [u32; STATE_WORDS] {
    let mut state = [0u32; STATE_WORDS];
    state[j / 32] = 1 << (j % 32);
    state
}
