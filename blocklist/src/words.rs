//! Word classification and membership testing.

use std::collections::HashSet;

/// Minimum length for a word to participate in blocking.
///
/// Shorter words are discarded at construction, and ids shorter than this
/// are never blocked.
pub const MIN_WORD_LENGTH: usize = 3;

/// An immutable classification of blocked words relative to one alphabet.
///
/// Words are split into three disjoint buckets with different matching
/// strategies, so that membership testing against a candidate id stays
/// cheap:
///
/// - *exact matches*: words of length exactly [`MIN_WORD_LENGTH`], which
///   only block an id equal to them;
/// - *prefixes and suffixes*: longer words containing a digit, which block
///   an id they start or end;
/// - *matches anywhere*: all other longer words, which block an id they
///   appear in as a substring.
///
/// All matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blocklist {
    exact_matches: HashSet<String>,
    prefixes_and_suffixes: Vec<String>,
    matches_anywhere: Vec<String>,
}

impl Blocklist {
    /// Classifies `words` against the (pre-shuffle) `alphabet` string.
    ///
    /// Words are deduplicated and lowercased. Words shorter than
    /// [`MIN_WORD_LENGTH`] or containing any character outside the
    /// lowercased alphabet symbol set are dropped entirely.
    pub fn new<I>(words: I, alphabet: &str) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let alphabet_chars: HashSet<char> = alphabet.to_lowercase().chars().collect();

        let mut exact_matches = HashSet::new();
        let mut prefixes_and_suffixes = Vec::new();
        let mut matches_anywhere = Vec::new();
        let mut seen = HashSet::new();

        for word in words {
            let word = word.as_ref().to_lowercase();
            if word.chars().count() < MIN_WORD_LENGTH {
                continue;
            }
            if !word.chars().all(|c| alphabet_chars.contains(&c)) {
                continue;
            }
            if seen.contains(&word) {
                continue;
            }
            seen.insert(word.clone());

            if word.chars().count() == MIN_WORD_LENGTH {
                exact_matches.insert(word);
            } else if word.chars().any(|c| c.is_ascii_digit()) {
                prefixes_and_suffixes.push(word);
            } else {
                matches_anywhere.push(word);
            }
        }

        sort_by_length_then_value(&mut prefixes_and_suffixes);
        sort_by_length_then_value(&mut matches_anywhere);

        Self {
            exact_matches,
            prefixes_and_suffixes,
            matches_anywhere,
        }
    }

    /// Returns `true` if the candidate `id` matches any blocked word.
    ///
    /// Ids shorter than [`MIN_WORD_LENGTH`] are never blocked; ids of
    /// exactly that length must equal a blocked word; longer ids are
    /// blocked on a substring hit or a digit-word prefix/suffix hit.
    #[must_use]
    pub fn is_blocked(&self, id: &str) -> bool {
        let id = id.to_lowercase();
        let length = id.chars().count();

        if length < MIN_WORD_LENGTH {
            return false;
        }
        if length == MIN_WORD_LENGTH {
            return self.exact_matches.contains(&id);
        }

        self.matches_anywhere
            .iter()
            .any(|word| id.contains(word.as_str()))
            || self
                .prefixes_and_suffixes
                .iter()
                .any(|word| id.starts_with(word.as_str()) || id.ends_with(word.as_str()))
    }
}

/// Sorts by (length, lexicographic) ascending.
///
/// Enumeration order does not affect matching; it is fixed so that the
/// derived value is fully deterministic.
fn sort_by_length_then_value(words: &mut [String]) {
    words.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
}
