//! Symbol-set primitives for the cloakid codec.
//!
//! This crate provides [`Alphabet`]: an ordered, fixed-size set of unique
//! single-byte symbols, together with the deterministic permutation
//! operations (shuffle, rotate, reverse) that the encoder and decoder build
//! on. It knows nothing about ids, numbers, or blocklists.
//!
//! # Design Principles
//!
//! - **Immutable values** - Every permutation returns a new `Alphabet`;
//!   nothing is mutated in place after construction.
//! - **Deterministic** - The shuffle takes no external randomness; the same
//!   input always produces the same permutation.
//! - **Validated once** - Construction rejects multibyte, too-short, and
//!   duplicated symbol sets; afterwards every operation is total.
//!
//! # Example
//!
//! ```
//! use alphabet::Alphabet;
//!
//! let alphabet = Alphabet::new("abcdefgh").unwrap();
//! assert_eq!(alphabet.len(), 8);
//!
//! // Rotation moves a suffix in front of the prefix.
//! let rotated = alphabet.rotate(3);
//! assert_eq!(rotated.len(), 8);
//!
//! // Lookups are a bidirectional symbol <-> index mapping.
//! let symbol = alphabet.symbol_at(0);
//! assert_eq!(alphabet.index_of(symbol), Some(0));
//! ```

mod error;
mod symbols;

pub use error::{AlphabetError, AlphabetResult};
pub use symbols::{Alphabet, MIN_ALPHABET_LENGTH};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = MIN_ALPHABET_LENGTH;
        let alphabet = Alphabet::new("abc").unwrap();
        let _ = alphabet.len();

        // Error types
        let _: AlphabetResult<()> = Ok(());
    }

    #[test]
    fn min_length_constant() {
        assert_eq!(MIN_ALPHABET_LENGTH, 3);
        assert!(Alphabet::new("abc").is_ok());
        assert!(Alphabet::new("ab").is_err());
    }
}
