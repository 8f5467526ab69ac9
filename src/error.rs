use std::fmt;
use std::io;

/// Unified error type for merges and the sources shipped with this crate.
///
/// Running out of elements is never an error: sources report exhaustion
/// as `Ok(None)`. Everything here aborts the call that produced it.
#[derive(Debug)]
pub enum Error {
    /// Caller misuse detected before any work was done (absent initial
    /// element, initial element above the upper bound, zero size limit,
    /// out-of-order append).
    InvalidInput(String),
    /// A source lookup failed during a merge. Carries the source's id
    /// and the underlying error.
    SourceFailure {
        source_id: String,
        cause: Box<Error>,
    },
    /// IO error from disk operations.
    Io(io::Error),
    /// Data corruption detected (CRC mismatch, bad format, etc).
    Corruption(String),
}

impl Error {
    pub(crate) fn source_failure(source_id: impl fmt::Display, cause: Error) -> Self {
        Error::SourceFailure {
            source_id: source_id.to_string(),
            cause: Box::new(cause),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Error::SourceFailure { source_id, cause } => {
                write!(f, "Source {source_id} failed: {cause}")
            }
            Error::Io(e) => write!(f, "IO error: {e}"),
            Error::Corruption(msg) => write!(f, "Corruption: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SourceFailure { cause, .. } => Some(cause.as_ref()),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
