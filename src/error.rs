//! Error type for truth-table parsing.

/// Errors produced while validating an input bit string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The bit string length is not a power of two.
    #[error("Invalid string length (not 2^n)")]
    InvalidLength {
        /// Length of the rejected input.
        len: usize,
    },

    /// The bit string contains something other than `0` or `1`.
    #[error("Invalid character {ch:?} at position {position} (expected '0' or '1')")]
    InvalidChar { ch: char, position: usize },

    /// Fixed-width projection input has the wrong length.
    #[error("Invalid string length {len} (expected {expected})")]
    ProjectionLength { len: usize, expected: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_length_message() {
        let err = Error::InvalidLength { len: 3 };
        assert_eq!(err.to_string(), "Invalid string length (not 2^n)");
    }

    #[test]
    fn test_invalid_char_message() {
        let err = Error::InvalidChar { ch: 'x', position: 2 };
        assert_eq!(
            err.to_string(),
            "Invalid character 'x' at position 2 (expected '0' or '1')"
        );
    }
}
