use core::fmt::Display;

use crate::MAX_INDEX;

/// Errors that can occur while computing or writing a Fibonacci table
#[derive(Debug)]
pub enum Error {
    /// The value at this index does not fit in a `u64`
    Overflow {
        /// The requested index
        index: u32,
    },

    #[cfg(feature = "std")]
    /// An I/O error occurred while writing rows
    Io(std::io::Error),
}

impl Error {
    /// Get the message of the error
    pub fn message(&self) -> &'static str {
        match self {
            Self::Overflow { .. } => "integer overflow",
            #[cfg(feature = "std")]
            Self::Io(_) => "i/o error",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Overflow { index } => {
                write!(f, "integer overflow: fib({index}) exceeds u64 (max index is {MAX_INDEX})")
            }

            #[cfg(feature = "std")]
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            #[cfg(feature = "std")]
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// A wrapper around [`core::result::Result`] for fibtable operations
pub type Result<T, E = Error> = core::result::Result<T, E>;
