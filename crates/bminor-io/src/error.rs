//! Input error types.

use std::error::Error;
use std::fmt;
use std::io;

/// Why a numeric or line read produced no value.
///
/// Only visible through the `try_*` methods of
/// [`Scanner`](crate::Scanner). The total read methods absorb every variant
/// and return zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanError {
    /// Input ended before a token started.
    Eof,
    /// The next token has no prefix of the expected numeric form.
    Invalid {
        /// The offending token, lossily decoded.
        token: String,
    },
    /// The underlying reader failed.
    Io {
        /// Rendered I/O error.
        reason: String,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eof => write!(f, "end of input"),
            Self::Invalid { token } => write!(f, "invalid numeric input {token:?}"),
            Self::Io { reason } => write!(f, "input error: {reason}"),
        }
    }
}

impl Error for ScanError {}

impl From<io::Error> for ScanError {
    fn from(e: io::Error) -> Self {
        Self::Io {
            reason: e.to_string(),
        }
    }
}
