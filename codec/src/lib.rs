//! Reversible, deterministic numeric-id obfuscation codec.
//!
//! This is the main codec crate: it ties together [`alphabet`] and
//! [`blocklist`] to turn sequences of non-negative integers into short,
//! URL-safe, visually randomized ids and back. Typical use is publishing
//! internal numeric keys (database ids) without exposing them directly.
//!
//! This is **not** an encryption or hashing primitive: there is no
//! confidentiality, and multiple ids may decode to the same numbers.
//!
//! # Design Principles
//!
//! - **Immutable codec** - A [`Codec`] is built once from [`Options`] and
//!   is safe to share across threads; `encode`/`decode` are pure functions
//!   of the codec value and their arguments.
//! - **Deterministic** - Same options and same input always produce the
//!   same id. There is no entropy source anywhere.
//! - **Total decode** - Malformed input decodes to an empty sequence,
//!   never an error.
//! - **Bounded retry** - Blocked ids are re-encoded at most
//!   alphabet-size + 1 times before giving up with a structured error.
//!
//! # Example
//!
//! ```
//! use codec::{BigUint, Codec, Options};
//!
//! let codec = Codec::new(Options::default()).unwrap();
//!
//! let numbers: Vec<BigUint> = [1u32, 2, 3].iter().copied().map(BigUint::from).collect();
//! let id = codec.encode(&numbers).unwrap();
//! assert_eq!(id, "86Rf07");
//! assert_eq!(codec.decode(&id), numbers);
//! ```

mod error;
mod id;
mod options;

pub use error::{ConfigError, ConfigResult, EncodeError};
pub use id::Codec;
pub use options::{Options, DEFAULT_ALPHABET};

// Encode input / decode output values are arbitrary-precision non-negative
// integers; re-exported so callers do not need a direct num-bigint dep.
pub use num_bigint::BigUint;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = DEFAULT_ALPHABET;
        let options = Options::default();
        let codec = Codec::new(options).unwrap();
        let _ = codec.decode("");

        // Error types
        let _: ConfigResult<()> = Ok(());
    }

    #[test]
    fn codec_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Codec>();
    }

    #[test]
    fn default_alphabet_is_valid_configuration() {
        assert_eq!(DEFAULT_ALPHABET.len(), 62);
        assert!(Codec::new(Options::default()).is_ok());
    }
}
