// error.rs - Error types for verbex.
//
// Every variant is raised by the call that violated its contract; the
// builder is left exactly as it was before that call.

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument was of the wrong shape (e.g. an empty range bound).
    Type,
    /// A numeric argument or argument count violated its bound.
    Range,
    /// A capture or group was closed while none was open.
    Nesting,
    /// The matching engine rejected the finished pattern.
    Engine,
}

/// Error type for builder operations and pattern compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A quantifier count of zero was given to `op`.
    ZeroCount { op: &'static str },
    /// `max` did not exceed `min` in `op`.
    InvertedBounds {
        op: &'static str,
        min: usize,
        max: usize,
    },
    /// `range` was given no bounds or an odd number of them.
    RangeBoundCount { count: usize },
    /// The `range` bound at `index` was an empty string.
    EmptyRangeBound { index: usize },
    /// `end_capture` was called with no capture open.
    UnbalancedCapture,
    /// `end_group` was called with no group open.
    UnbalancedGroup,
    /// The engine failed to compile the pattern.
    #[cfg(feature = "engine")]
    Engine { pattern: String, message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroCount { op } => write!(f, "{}: count must be greater than zero", op),
            Error::InvertedBounds { op, min, max } => write!(
                f,
                "{}: maximum ({}) must be greater than minimum ({})",
                op, max, min
            ),
            Error::RangeBoundCount { count } => write!(
                f,
                "range: expected a non-zero even number of bounds, got {}",
                count
            ),
            Error::EmptyRangeBound { index } => {
                write!(f, "range: bound at position {} is empty", index)
            }
            Error::UnbalancedCapture => write!(f, "end_capture: no capture is open"),
            Error::UnbalancedGroup => write!(f, "end_group: no group is open"),
            #[cfg(feature = "engine")]
            Error::Engine { pattern, message } => {
                write!(f, "engine rejected pattern {:?}: {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Returns the taxonomy bucket this error falls into.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyRangeBound { .. } => ErrorKind::Type,
            Error::ZeroCount { .. }
            | Error::InvertedBounds { .. }
            | Error::RangeBoundCount { .. } => ErrorKind::Range,
            Error::UnbalancedCapture | Error::UnbalancedGroup => ErrorKind::Nesting,
            #[cfg(feature = "engine")]
            Error::Engine { .. } => ErrorKind::Engine,
        }
    }
}
