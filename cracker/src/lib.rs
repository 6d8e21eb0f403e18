//! Recovery of MT19937 internal state from observed outputs.
//!
//! MT19937 is linear over GF(2): every output bit is an XOR of a fixed
//! subset of the 19 968 bits of initial state. This crate materializes that
//! linear map as a 19 968 × 19 968 bit matrix, solves it against an observed
//! bit stream with the `gf2` solver, and arms a predictor that reproduces
//! every subsequent output of the observed generator.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![deny(unsafe_code)]

mod builder;
mod cracker;
mod error;
mod mt;

pub mod observation;

#[cfg(feature = "std")]
pub mod cache;

#[cfg(test)]
mod tests;

pub use crate::{
    builder::{build_matrix, STATE_BITS},
    cracker::Cracker,
    error::CrackError,
    mt::{Mt19937, STATE_WORDS},
};
pub use gf2::{BitMatrix, BitVec};

/// A result type specialized to `CrackError`.
pub type Result<T> = core::result::Result<T, CrackError>;
