//! Blocked-word handling for the cloakid codec.
//!
//! This crate classifies a raw word list against an alphabet into an
//! immutable [`Blocklist`] and answers one question: is a candidate id
//! blocked? It knows nothing about how ids are generated.
//!
//! # Design Principles
//!
//! - **Derived once** - A `Blocklist` is built at codec-construction time
//!   and never mutated afterwards.
//! - **Conservative matching** - Substring and affix matching accepts false
//!   positives as the cost of simplicity.
//! - **Alphabet-relative** - Words that cannot appear in an id built from
//!   the configured alphabet are dropped at construction.
//!
//! # Example
//!
//! ```
//! use blocklist::Blocklist;
//!
//! let blocklist = Blocklist::new(["curse", "cab"], "abcdefghijklmnopqrstuvwxyz");
//! assert!(blocklist.is_blocked("mycurseword"));
//! assert!(blocklist.is_blocked("CAB"));
//! assert!(!blocklist.is_blocked("cabin"));
//! ```

mod default;
mod words;

pub use default::default_words;
pub use words::{Blocklist, MIN_WORD_LENGTH};
