//! State recovery and prediction.

use crate::{
    builder::{self, supported_width, STATE_BITS},
    error::CrackError,
    mt::{Mt19937, STATE_WORDS},
    observation,
};
use gf2::{solve, BitMatrix, BitVec};

/// Recovers the internal state of an observed MT19937 and predicts its
/// subsequent outputs.
///
/// A `Cracker` owns the transformation matrix for its observation width.
/// Recovery clones the matrix (elimination is destructive), so one instance
/// can be reused across observation sets.
#[derive(Debug)]
pub struct Cracker {
    matrix: BitMatrix,
    width: u32,
    state: Option<[u32; STATE_WORDS]>,
    predictor: Option<Mt19937>,
}

impl Cracker {
    /// A cracker for MSB observations, building the matrix internally.
    pub fn new() -> Self {
        Self {
            matrix: builder::build(1),
            width: 1,
            state: None,
            predictor: None,
        }
    }

    /// A cracker consuming the top `v` bits of each observed output.
    pub fn with_observed_width(v: u32) -> Result<Self, CrackError> {
        if !supported_width(v) {
            return Err(CrackError::BadParameter);
        }
        Ok(Self {
            matrix: builder::build(v),
            width: v,
            state: None,
            predictor: None,
        })
    }

    /// A cracker over a pre-built matrix, e.g. one loaded from the disk
    /// cache. The matrix must be 19 968 × 19 968 and built for width `v`.
    pub fn from_matrix(matrix: BitMatrix, v: u32) -> Result<Self, CrackError> {
        if !supported_width(v) || matrix.rows() != STATE_BITS || matrix.cols() != STATE_BITS {
            return Err(CrackError::BadParameter);
        }
        Ok(Self {
            matrix,
            width: v,
            state: None,
            predictor: None,
        })
    }

    /// Recover the generator state from an observed bit stream and arm the
    /// predictor.
    ///
    /// `observed` must hold at least 19 968 bits in matrix row order (see
    /// [`observation::pack_outputs`]); only the final 19 968 are used. On
    /// failure the predictor stays disarmed and any previously recovered
    /// state is untouched.
    pub fn recover(&mut self, observed: &BitVec) -> Result<(), CrackError> {
        if observed.len() < STATE_BITS {
            return Err(CrackError::NotEnoughBits);
        }
        let _span =
            tracing::info_span!(target: "cracker", "recover", bits = observed.len()).entered();
        let mut a = self.matrix.clone();
        let mut b = BitVec::from_bits(observed.iter().skip(observed.len() - STATE_BITS));
        let x = solve(&mut a, &mut b)?;

        let mut state = [0u32; STATE_WORDS];
        for j in 0..STATE_BITS {
            if x.get(j) {
                state[j / 32] |= 1 << (j % 32);
            }
        }

        // the observation window covered STATE_BITS / width outputs; skip
        // them so the next draw lines up with the victim's next draw
        let mut predictor = Mt19937::from_state(state);
        predictor.discard(STATE_BITS / self.width as usize);

        self.state = Some(state);
        self.predictor = Some(predictor);
        Ok(())
    }

    /// Recover from raw 32-bit outputs, packing their top bits first.
    pub fn recover_outputs(&mut self, outputs: &[u32]) -> Result<(), CrackError> {
        let bits = observation::pack_outputs(outputs, self.width)?;
        self.recover(&bits)
    }

    /// The next predicted 32-bit output of the observed generator.
    pub fn next_u32(&mut self) -> Result<u32, CrackError> {
        self.predictor
            .as_mut()
            .map(Mt19937::next_u32)
            .ok_or(CrackError::NotRecovered)
    }

    /// The reconstructed state as it was at the start of the observation
    /// window, before the predictor advanced past it.
    pub fn state(&self) -> Result<&[u32; STATE_WORDS], CrackError> {
        self.state.as_ref().ok_or(CrackError::NotRecovered)
    }
}
