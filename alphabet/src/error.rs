//! Error types for alphabet validation.

use std::fmt;

/// Result type for alphabet operations.
pub type AlphabetResult<T> = Result<T, AlphabetError>;

/// Errors that can occur while validating an alphabet string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// The alphabet contains grapheme clusters wider than one byte.
    ContainsMultibyteGraphemes {
        /// The offending graphemes, in order of first appearance.
        graphemes: Vec<String>,
    },

    /// The alphabet has fewer symbols than the required minimum.
    TooSmall {
        /// The rejected alphabet string.
        alphabet: String,
        /// The minimum number of symbols required.
        min_length: usize,
    },

    /// The alphabet contains the same grapheme more than once.
    ///
    /// Repeats are detected across the NFC, NFD, NFKC, and NFKD
    /// normalization forms of the input, not just its raw bytes.
    ContainsRepeatedGraphemes {
        /// The repeated graphemes, sorted.
        graphemes: Vec<String>,
    },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContainsMultibyteGraphemes { graphemes } => {
                write!(
                    f,
                    "alphabet contains multibyte graphemes: {graphemes:?}"
                )
            }
            Self::TooSmall {
                alphabet,
                min_length,
            } => {
                write!(
                    f,
                    "alphabet {alphabet:?} is too small, at least {min_length} symbols are required"
                )
            }
            Self::ContainsRepeatedGraphemes { graphemes } => {
                write!(f, "alphabet contains repeated graphemes: {graphemes:?}")
            }
        }
    }
}

impl std::error::Error for AlphabetError {}
