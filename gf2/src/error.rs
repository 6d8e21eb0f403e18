use core::fmt;

/// This is an error that could occur while solving a GF(2) linear system.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum LinearSystemError {
    /// The right-hand side has a different number of entries than the matrix
    /// has rows.
    DimensionMismatch,
    /// Elimination produced a zero row whose right-hand side bit is nonzero;
    /// no solution exists.
    Inconsistent,
}

impl ark_std::error::Error for LinearSystemError {}

impl fmt::Display for LinearSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            LinearSystemError::DimensionMismatch => {
                write!(f, "right-hand side length does not match the matrix")
            },
            LinearSystemError::Inconsistent => write!(f, "the system has no solution"),
        }
    }
}
