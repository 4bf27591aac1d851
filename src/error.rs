//! Error types for rekha-split.

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by dataset construction, simplification, and splitting.
///
/// The subsystem is purely computational, so every error is reported
/// immediately to the caller; nothing is retried and no partial results are
/// produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The x and y columns have different lengths
    #[error("xs and ys have different lengths: {xs_len} vs {ys_len}")]
    LengthMismatch {
        /// Length of the x column
        xs_len: usize,
        /// Length of the y column
        ys_len: usize,
    },

    /// The x column is not strictly increasing
    #[error("x values must be strictly increasing (violation at index {index})")]
    UnsortedX {
        /// Index of the first element that is not greater than its predecessor
        index: usize,
    },

    /// A threshold parameter was negative or NaN
    #[error("threshold must be a non-negative number, got {value}")]
    InvalidThreshold {
        /// The rejected threshold
        value: f64,
    },

    /// The dataset is too small for the requested operation
    #[error("need at least {min} points, got {len}")]
    TooFewPoints {
        /// Number of points supplied
        len: usize,
        /// Minimum the operation requires
        min: usize,
    },

    /// An index window was empty or out of bounds
    #[error("invalid subrange {start}..{end} for dataset of {len} points")]
    InvalidSubrange {
        /// Inclusive start of the window
        start: usize,
        /// Exclusive end of the window
        end: usize,
        /// Dataset length
        len: usize,
    },

    /// An accessor index was outside `[0, len)`
    #[error("index {index} out of range for dataset of {len} points")]
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Dataset length
        len: usize,
    },

    /// An internal postcondition failed; signals a bug, not a user error
    #[error("internal invariant violated: {0}")]
    InternalInvariant(&'static str),
}

impl Error {
    /// True for every flavor of malformed caller input (as opposed to an
    /// out-of-range accessor index or an internal bug).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. }
                | Self::UnsortedX { .. }
                | Self::InvalidThreshold { .. }
                | Self::TooFewPoints { .. }
                | Self::InvalidSubrange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::LengthMismatch { xs_len: 3, ys_len: 2 };
        assert_eq!(err.to_string(), "xs and ys have different lengths: 3 vs 2");

        let err = Error::IndexOutOfRange { index: 7, len: 4 };
        assert_eq!(err.to_string(), "index 7 out of range for dataset of 4 points");
    }

    #[test]
    fn test_invalid_input_classification() {
        assert!(Error::UnsortedX { index: 1 }.is_invalid_input());
        assert!(Error::TooFewPoints { len: 1, min: 2 }.is_invalid_input());
        assert!(!Error::IndexOutOfRange { index: 0, len: 0 }.is_invalid_input());
        assert!(!Error::InternalInvariant("oops").is_invalid_input());
    }
}
