//! Error types for codec construction and encoding.

use std::fmt;

use alphabet::AlphabetError;

/// Result type for codec construction.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while building a [`Codec`](crate::Codec).
///
/// Configuration errors fail the whole construction and are not retryable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configured alphabet failed validation.
    Alphabet(AlphabetError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alphabet(err) => write!(f, "invalid alphabet: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Alphabet(err) => Some(err),
        }
    }
}

impl From<AlphabetError> for ConfigError {
    fn from(err: AlphabetError) -> Self {
        Self::Alphabet(err)
    }
}

/// Errors that can occur during encoding.
///
/// This is the only runtime failure mode, and it is tied to configuration:
/// a small alphabet combined with a minimum length and an aggressive
/// blocklist can leave no unblocked candidate id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Every re-encoding attempt produced a blocked id.
    AllAttemptsCensored {
        /// The final attempt index reached before giving up.
        attempts: usize,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllAttemptsCensored { attempts } => {
                write!(
                    f,
                    "every candidate id was blocked after {attempts} re-encoding attempts"
                )
            }
        }
    }
}

impl std::error::Error for EncodeError {}
