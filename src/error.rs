use std::{error, fmt, io, result};

/// Result is a specialized [`result::Result`] for this crate.
pub type Result<T> = result::Result<T, Error>;

/// Error is the error type returned by this crate.
#[derive(Debug)]
pub enum Error {
    /// The block size is invalid (it must be at least one byte).
    InvalidBlockSize(usize),
    /// The keyed-hash key size is outside
    /// [`HashKey::MIN_SIZE`][crate::HashKey::MIN_SIZE]..=[`HashKey::MAX_SIZE`][crate::HashKey::MAX_SIZE].
    InvalidHashKeySize(usize),
    /// The digest size is outside
    /// [`StreamHash::MIN_SIZE`][crate::StreamHash::MIN_SIZE]..=[`StreamHash::MAX_SIZE`][crate::StreamHash::MAX_SIZE].
    InvalidHashSize(usize),
    /// A record could not be authenticated.
    ///
    /// Either its tag failed verification, or the record is too
    /// short to carry a tag at all.
    Authentication,
    /// The trailer digest does not match the record stream.
    ///
    /// The stream was truncated, or records and trailer were
    /// tampered with in a way per-record authentication cannot
    /// see.
    Integrity,
    /// The stream is shorter than one trailer.
    ///
    /// It contains the stream's length.
    StreamTooShort(u64),
    /// The trailer could not be read in full.
    ///
    /// It contains the number of bytes read.
    TruncatedTrailer(usize),
    /// The plaintext could not be encrypted.
    Encryption(aead::Error),
    /// The CSPRNG failed.
    Rand(rand_core::Error),
    /// An I/O operation failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBlockSize(n) => {
                write!(f, "invalid block size: {}", n)
            }
            Error::InvalidHashKeySize(n) => {
                write!(f, "invalid hash key size: {}", n)
            }
            Error::InvalidHashSize(n) => {
                write!(f, "invalid digest size: {}", n)
            }
            Error::Authentication => write!(f, "authentication error"),
            Error::Integrity => write!(f, "trailer digest mismatch"),
            Error::StreamTooShort(n) => {
                write!(f, "stream of {} bytes is shorter than one trailer", n)
            }
            Error::TruncatedTrailer(n) => {
                write!(f, "trailer truncated after {} bytes", n)
            }
            Error::Encryption(err) => write!(f, "encryption error: {}", err),
            Error::Rand(err) => write!(f, "CSPRNG failure: {}", err),
            Error::Io(err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<aead::Error> for Error {
    fn from(value: aead::Error) -> Self {
        Error::Encryption(value)
    }
}

impl From<rand_core::Error> for Error {
    fn from(value: rand_core::Error) -> Self {
        Error::Rand(value)
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::Io(value)
    }
}
