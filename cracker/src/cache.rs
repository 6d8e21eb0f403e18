//! On-disk persistence of the transformation matrix.
//!
//! The matrix is a pure function of the generator constants and the
//! observation width, so it can be built once and reloaded. Layout: a
//! 16-byte header (magic `MTMX`, then format version, matrix dimension `N`,
//! and width `v` as little-endian `u32`s), followed by the `N × ⌈N/64⌉`
//! packed row words, little-endian. Any mismatch of magic, version, `N`, or
//! `v` invalidates the cache.

use gf2::BitMatrix;
use std::{
    fmt, fs,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
    vec::Vec,
};

/// File magic, `b"MTMX"`.
pub const MAGIC: [u8; 4] = *b"MTMX";

/// Current format version.
pub const VERSION: u32 = 1;

/// This is an error that could occur while reading or writing a cached
/// matrix.
#[derive(Debug)]
pub enum CacheError {
    /// Underlying I/O failure.
    Io(io::Error),
    /// The magic or version bytes do not match this format.
    BadHeader,
    /// The cached matrix was built for a different dimension or width.
    Mismatch,
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CacheError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            CacheError::Io(err) => write!(f, "cache i/o failed: {err}"),
            CacheError::BadHeader => write!(f, "not a matrix cache, or incompatible version"),
            CacheError::Mismatch => write!(f, "cached matrix has different parameters"),
        }
    }
}

impl From<io::Error> for CacheError {
    fn from(err: io::Error) -> Self {
        CacheError::Io(err)
    }
}

/// Serialize `matrix` (which must be square) and its width `v`.
pub fn write_matrix<W: Write>(mut w: W, matrix: &BitMatrix, v: u32) -> Result<(), CacheError> {
    assert_eq!(matrix.rows(), matrix.cols());
    w.write_all(&MAGIC)?;
    w.write_all(&VERSION.to_le_bytes())?;
    w.write_all(&(matrix.rows() as u32).to_le_bytes())?;
    w.write_all(&v.to_le_bytes())?;
    for &word in matrix.as_words() {
        w.write_all(&word.to_le_bytes())?;
    }
    Ok(())
}

/// Deserialize a matrix expected to be `n × n` with width `v`.
pub fn read_matrix<R: Read>(mut r: R, n: usize, v: u32) -> Result<BitMatrix, CacheError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC || read_u32(&mut r)? != VERSION {
        return Err(CacheError::BadHeader);
    }
    if read_u32(&mut r)? as usize != n || read_u32(&mut r)? != v {
        return Err(CacheError::Mismatch);
    }
    let words_per_row = n.div_ceil(u64::BITS as usize);
    let mut words = Vec::with_capacity(n * words_per_row);
    let mut buf = [0u8; 8];
    for _ in 0..n * words_per_row {
        r.read_exact(&mut buf)?;
        words.push(u64::from_le_bytes(buf));
    }
    Ok(BitMatrix::from_words(n, n, words))
}

/// Write the matrix to `path`, buffered.
pub fn store<P: AsRef<Path>>(path: P, matrix: &BitMatrix, v: u32) -> Result<(), CacheError> {
    let mut file = BufWriter::new(fs::File::create(path)?);
    write_matrix(&mut file, matrix, v)?;
    file.flush()?;
    Ok(())
}

/// Load an `n × n` width-`v` matrix from `path`, buffered.
pub fn load<P: AsRef<Path>>(path: P, n: usize, v: u32) -> Result<BitMatrix, CacheError> {
    read_matrix(BufReader::new(fs::File::open(path)?), n, v)
}

fn read_u32<R: Read>(r: &mut R) -> Result<u32, CacheError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::rand::Rng;

    fn random_matrix(n: usize) -> BitMatrix {
        let mut rng = ark_std::test_rng();
        let mut m = BitMatrix::zero(n, n);
        for r in 0..n {
            for c in 0..n {
                m.set(r, c, rng.gen());
            }
        }
        m
    }

    #[test]
    fn roundtrips_through_bytes() {
        let m = random_matrix(130);
        let mut bytes = Vec::new();
        write_matrix(&mut bytes, &m, 2).unwrap();
        assert_eq!(bytes.len(), 16 + 130 * 3 * 8);
        let back = read_matrix(bytes.as_slice(), 130, 2).unwrap();
        assert!(back == m);
    }

    #[test]
    fn rejects_corrupted_magic() {
        let m = random_matrix(64);
        let mut bytes = Vec::new();
        write_matrix(&mut bytes, &m, 1).unwrap();
        bytes[0] ^= 0xff;
        assert!(matches!(
            read_matrix(bytes.as_slice(), 64, 1),
            Err(CacheError::BadHeader)
        ));
    }

    #[test]
    fn rejects_parameter_mismatch() {
        let m = random_matrix(64);
        let mut bytes = Vec::new();
        write_matrix(&mut bytes, &m, 1).unwrap();
        assert!(matches!(
            read_matrix(bytes.as_slice(), 64, 2),
            Err(CacheError::Mismatch)
        ));
        assert!(matches!(
            read_matrix(bytes.as_slice(), 128, 1),
            Err(CacheError::Mismatch)
        ));
    }

    #[test]
    fn rejects_truncated_payload() {
        let m = random_matrix(64);
        let mut bytes = Vec::new();
        write_matrix(&mut bytes, &m, 1).unwrap();
        bytes.truncate(bytes.len() - 5);
        assert!(matches!(
            read_matrix(bytes.as_slice(), 64, 1),
            Err(CacheError::Io(_))
        ));
    }
}
