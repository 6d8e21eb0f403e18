use core::fmt;
use gf2::LinearSystemError;

/// This is an error that could occur during state recovery or prediction.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CrackError {
    /// The observation carries fewer bits than the generator has state bits.
    NotEnoughBits,
    /// The observations are not explainable by any MT19937 state; they came
    /// from a different generator, were corrupted, or were packed with the
    /// wrong width.
    Inconsistent,
    /// A prediction or state read was requested before a successful
    /// recovery.
    NotRecovered,
    /// The observation width is unsupported, or an injected matrix has the
    /// wrong shape.
    BadParameter,
}

impl ark_std::error::Error for CrackError {}

impl fmt::Display for CrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            CrackError::NotEnoughBits => {
                write!(f, "observation is shorter than the generator state")
            },
            CrackError::Inconsistent => {
                write!(f, "observations do not come from an MT19937 stream")
            },
            CrackError::NotRecovered => write!(f, "state has not been recovered yet"),
            CrackError::BadParameter => write!(f, "unsupported observation width or matrix"),
        }
    }
}

impl From<LinearSystemError> for CrackError {
    fn from(err: LinearSystemError) -> Self {
        match err {
            LinearSystemError::Inconsistent => CrackError::Inconsistent,
            // dimensions are validated before solving; a mismatch means the
            // caller injected a matrix with the wrong shape
            LinearSystemError::DimensionMismatch => CrackError::BadParameter,
        }
    }
}
