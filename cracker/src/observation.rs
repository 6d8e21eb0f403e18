//! Re-packing of observed generator outputs into solver bit order.
//!
//! Callers frequently see only the top `v` bits of each 32-bit output. The
//! matrix rows for width `v` are exactly those bits, most significant first,
//! so packing is a concatenation; bits are never reordered across outputs.

use crate::{
    builder::{supported_width, STATE_BITS},
    error::CrackError,
};
use gf2::BitVec;

/// Pack the top `v` bits of each output into the observation vector.
///
/// Requires at least `19 968 / v` outputs ([`CrackError::NotEnoughBits`])
/// and uses the most recent ones, so a longer capture is trimmed to the
/// final window.
pub fn pack_outputs(outputs: &[u32], v: u32) -> Result<BitVec, CrackError> {
    if !supported_width(v) {
        return Err(CrackError::BadParameter);
    }
    let v = v as usize;
    let needed = STATE_BITS / v;
    if outputs.len() < needed {
        return Err(CrackError::NotEnoughBits);
    }
    let window = &outputs[outputs.len() - needed..];
    let mut bits = BitVec::zero(STATE_BITS);
    for (o, &y) in window.iter().enumerate() {
        for t in 0..v {
            bits.set(o * v + t, (y >> (31 - t)) & 1 != 0);
        }
    }
    Ok(bits)
}
