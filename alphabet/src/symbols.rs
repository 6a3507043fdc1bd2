//! The alphabet value and its deterministic permutation operations.

use std::collections::{BTreeSet, HashSet};

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{AlphabetError, AlphabetResult};

/// Minimum number of symbols an alphabet must contain.
pub const MIN_ALPHABET_LENGTH: usize = 3;

/// An ordered, fixed-size sequence of unique single-byte symbols.
///
/// An `Alphabet` is constructed once from a validated string and immediately
/// passed through the deterministic [`shuffle`](Self::shuffle); callers never
/// observe the unshuffled form. All subsequent operations are pure: each
/// returns a new `Alphabet` of the same size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    /// The ordered symbols, indexed 0..len-1.
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Validates `raw` and builds the shuffled alphabet.
    ///
    /// Validation stops at the first failure, in this order: multibyte
    /// graphemes, minimum length, repeated graphemes (checked under the
    /// NFC, NFD, NFKC, and NFKD normalization forms of the input).
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::ContainsMultibyteGraphemes`],
    /// [`AlphabetError::TooSmall`], or
    /// [`AlphabetError::ContainsRepeatedGraphemes`].
    pub fn new(raw: &str) -> AlphabetResult<Self> {
        let multibyte: Vec<String> = raw
            .graphemes(true)
            .filter(|grapheme| grapheme.len() > 1)
            .map(ToOwned::to_owned)
            .collect();
        if !multibyte.is_empty() {
            return Err(AlphabetError::ContainsMultibyteGraphemes {
                graphemes: multibyte,
            });
        }

        if raw.len() < MIN_ALPHABET_LENGTH {
            return Err(AlphabetError::TooSmall {
                alphabet: raw.to_owned(),
                min_length: MIN_ALPHABET_LENGTH,
            });
        }

        let repeated = repeated_graphemes(raw);
        if !repeated.is_empty() {
            return Err(AlphabetError::ContainsRepeatedGraphemes {
                graphemes: repeated,
            });
        }

        let unshuffled = Self {
            symbols: raw.bytes().collect(),
        };
        Ok(unshuffled.shuffle())
    }

    /// Returns the number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the alphabet has no symbols.
    ///
    /// Never true for a validated alphabet; provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbols in order.
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Returns the symbol at `index`.
    ///
    /// Indexes are always drawn from the same alphabet; an out-of-range
    /// index is a programmer error and panics.
    #[must_use]
    pub fn symbol_at(&self, index: usize) -> u8 {
        self.symbols[index]
    }

    /// Returns the index of `symbol`, or `None` if it is not present.
    #[must_use]
    pub fn index_of(&self, symbol: u8) -> Option<usize> {
        self.symbols.iter().position(|&candidate| candidate == symbol)
    }

    /// Returns `true` if `grapheme` is a single byte present in the alphabet.
    ///
    /// Any multibyte grapheme is absent by definition.
    #[must_use]
    pub fn contains(&self, grapheme: &str) -> bool {
        match grapheme.as_bytes() {
            [byte] => self.symbols.contains(byte),
            _ => false,
        }
    }

    /// Applies the deterministic, seedless permutation.
    ///
    /// For `i` in `0..len-1` with `j = len-1-i`, the positions `i` and
    /// `(i*j + symbols[i] + symbols[j]) % len` are swapped. This is the sole
    /// source of "randomization" in the codec; the exact byte-for-byte
    /// behavior is load-bearing for interoperability and must not change.
    #[must_use]
    pub fn shuffle(&self) -> Self {
        let mut symbols = self.symbols.clone();
        let len = symbols.len();
        for i in 0..len - 1 {
            let j = len - 1 - i;
            let r = (i * j + symbols[i] as usize + symbols[j] as usize) % len;
            symbols.swap(i, r);
        }
        Self { symbols }
    }

    /// Left-rotates the alphabet by `offset` positions.
    ///
    /// The suffix starting at `offset` moves in front of the prefix
    /// ("split and exchange"). Encoding rotates by a computed offset;
    /// decoding rotates by the recovered offset to undo it.
    #[must_use]
    pub fn rotate(&self, offset: usize) -> Self {
        let mut symbols = self.symbols.clone();
        let len = symbols.len();
        symbols.rotate_left(offset % len);
        Self { symbols }
    }

    /// Reverses the symbol order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut symbols = self.symbols.clone();
        symbols.reverse();
        Self { symbols }
    }
}

/// Collects graphemes that appear more than once in any normalization form.
fn repeated_graphemes(raw: &str) -> Vec<String> {
    let forms: [String; 4] = [
        raw.nfc().collect(),
        raw.nfd().collect(),
        raw.nfkc().collect(),
        raw.nfkd().collect(),
    ];

    let mut repeated = BTreeSet::new();
    for form in &forms {
        let mut seen = HashSet::new();
        for grapheme in form.graphemes(true) {
            if !seen.insert(grapheme) {
                repeated.insert(grapheme.to_owned());
            }
        }
    }
    repeated.into_iter().collect()
}
