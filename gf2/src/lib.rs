//! Dense linear algebra over GF(2), bit-packed into 64-bit words.
//!
//! The crate provides a row-major [`BitMatrix`], a matching [`BitVec`], and
//! an in-place Gauss–Jordan solver for systems `A · x = b`. Addition is XOR
//! and multiplication is AND, so every row operation runs word-parallel.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![deny(unsafe_code)]

pub mod error;
pub mod matrix;
pub mod solver;
pub mod vector;

pub use crate::{
    error::LinearSystemError,
    matrix::{mat_vec_mul, BitMatrix, WORD_BITS},
    solver::{back_substitute, eliminate, is_consistent, solve, Echelon},
    vector::BitVec,
};

/// A result type specialized to `LinearSystemError`.
pub type Result<T> = core::result::Result<T, LinearSystemError>;
