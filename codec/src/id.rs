//! The codec value and the encode/decode algorithms.

use alphabet::Alphabet;
use blocklist::Blocklist;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::error::{ConfigResult, EncodeError};
use crate::options::Options;

/// An immutable id codec.
///
/// Built once via [`new`](Self::new) from raw [`Options`]; afterwards
/// [`encode`](Self::encode) and [`decode`](Self::decode) are pure functions
/// of the codec value and their arguments. A `Codec` can be shared across
/// any number of threads without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    /// The validated, shuffled alphabet.
    alphabet: Alphabet,
    /// Minimum length of every generated non-empty id.
    min_length: u8,
    /// Blocked words, classified against the pre-shuffle alphabet.
    blocklist: Blocklist,
}

impl Codec {
    /// Builds a codec from raw configuration.
    ///
    /// Validates and shuffles the alphabet, then classifies the blocklist
    /// words against the pre-shuffle alphabet string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`](crate::ConfigError) if the alphabet fails
    /// validation.
    pub fn new(options: Options) -> ConfigResult<Self> {
        let alphabet = Alphabet::new(&options.alphabet)?;
        let blocklist = Blocklist::new(&options.blocklist, &options.alphabet);
        Ok(Self {
            alphabet,
            min_length: options.min_length,
            blocklist,
        })
    }

    /// Encodes a sequence of non-negative integers into an id.
    ///
    /// An empty sequence encodes to the empty string. Otherwise candidates
    /// are generated until one clears the blocklist, perturbing the
    /// alphabet split offset on each attempt; the loop is bounded by the
    /// alphabet size.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::AllAttemptsCensored`] if every candidate id
    /// was blocked.
    pub fn encode(&self, numbers: &[BigUint]) -> Result<String, EncodeError> {
        if numbers.is_empty() {
            return Ok(String::new());
        }

        for attempt in 0..=self.alphabet.len() {
            let id = self.encode_attempt(numbers, attempt);
            if !self.blocklist.is_blocked(&id) {
                return Ok(id);
            }
        }

        Err(EncodeError::AllAttemptsCensored {
            attempts: self.alphabet.len(),
        })
    }

    /// Decodes an id back into its number sequence.
    ///
    /// This is a total function: an empty id, or an id containing any
    /// symbol outside the alphabet, decodes to an empty sequence rather
    /// than an error. Trailing padding after a separator is ignored.
    #[must_use]
    pub fn decode(&self, id: &str) -> Vec<BigUint> {
        let mut numbers = Vec::new();
        if id.is_empty() {
            return numbers;
        }
        if !id.bytes().all(|byte| self.alphabet.index_of(byte).is_some()) {
            return numbers;
        }

        let Some(prefix) = id.bytes().next() else {
            return numbers;
        };
        let Some(offset) = self.alphabet.index_of(prefix) else {
            return numbers;
        };

        // Rebuild the working alphabet used for the first number segment.
        let mut working = self.alphabet.rotate(offset).reverse();
        let mut rest = &id[1..];

        while !rest.is_empty() {
            let separator = char::from(working.symbol_at(0));
            let mut parts = rest.splitn(2, separator);
            let chunk = parts.next().unwrap_or("");
            let remainder = parts.next();

            // An empty leading part means the rest is padding, not data.
            if chunk.is_empty() {
                return numbers;
            }
            numbers.push(decode_number(chunk, &working));

            match remainder {
                Some(remainder) => {
                    working = working.shuffle();
                    rest = remainder;
                }
                None => rest = "",
            }
        }
        numbers
    }

    /// Generates one candidate id for the given attempt index.
    fn encode_attempt(&self, numbers: &[BigUint], attempt: usize) -> String {
        let length = self.alphabet.len();
        let modulus = BigUint::from(length);

        // Semi-random split point derived from the input itself.
        let mut offset = numbers.len();
        for (position, number) in numbers.iter().enumerate() {
            let index = remainder_index(number, &modulus);
            offset += usize::from(self.alphabet.symbol_at(index)) + position;
        }
        let offset = (offset + attempt) % length;

        let rotated = self.alphabet.rotate(offset);
        let prefix = char::from(rotated.symbol_at(0));
        let mut working = rotated.reverse();

        let mut id = String::new();
        id.push(prefix);
        for (position, number) in numbers.iter().enumerate() {
            id.push_str(&encode_number(number, &working));
            if position < numbers.len() - 1 {
                // Separator, then a fresh alphabet for the next segment.
                id.push(char::from(working.symbol_at(0)));
                working = working.shuffle();
            }
        }

        self.pad_to_min_length(&mut id, working);
        id
    }

    /// Appends alphabet-derived symbols until the id meets `min_length`.
    fn pad_to_min_length(&self, id: &mut String, mut working: Alphabet) {
        let min_length = usize::from(self.min_length);
        if id.len() >= min_length {
            return;
        }

        id.push(char::from(working.symbol_at(0)));
        while id.len() < min_length {
            working = working.shuffle();
            let missing = min_length - id.len();
            let take = missing.min(working.len());
            id.extend(working.symbols()[..take].iter().copied().map(char::from));
        }
    }
}

/// Encodes one number in base (alphabet size - 1).
///
/// Digit values map to working-alphabet indices offset by one; index 0 is
/// reserved as the inter-number separator and never used as a digit.
fn encode_number(number: &BigUint, working: &Alphabet) -> String {
    let base = BigUint::from(working.len() - 1);
    let mut symbols = Vec::new();
    let mut remaining = number.clone();
    loop {
        let (quotient, digit) = remaining.div_rem(&base);
        // The remainder is below the alphabet size, so it always fits.
        let digit = digit.to_usize().unwrap_or(0);
        symbols.push(working.symbol_at(digit + 1));
        remaining = quotient;
        if remaining.is_zero() {
            break;
        }
    }
    symbols.reverse();
    symbols.into_iter().map(char::from).collect()
}

/// Decodes one separator-free chunk via inverse digit lookup.
fn decode_number(chunk: &str, working: &Alphabet) -> BigUint {
    let base = BigUint::from(working.len() - 1);
    let mut value = BigUint::zero();
    for byte in chunk.bytes() {
        let digit = working
            .index_of(byte)
            .map_or(0, |index| index.saturating_sub(1));
        value = value * &base + BigUint::from(digit);
    }
    value
}

/// Returns `number % modulus` as an index into the alphabet.
fn remainder_index(number: &BigUint, modulus: &BigUint) -> usize {
    // The remainder is below the alphabet size, so it always fits.
    (number % modulus).to_usize().unwrap_or(0)
}
