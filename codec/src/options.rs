//! Codec configuration.

/// The default alphabet: 62 mixed-case alphanumeric symbols.
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Raw configuration for building a [`Codec`](crate::Codec).
///
/// The `min_length` range of 0..=255 is a type invariant (`u8`), so no
/// runtime range check exists for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// The alphabet the codec draws its symbols from.
    pub alphabet: String,

    /// Minimum length of every generated non-empty id.
    pub min_length: u8,

    /// Words a generated id must not match.
    pub blocklist: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_owned(),
            min_length: 0,
            blocklist: blocklist::default_words().map(ToOwned::to_owned).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_alphabet_layout() {
        assert_eq!(DEFAULT_ALPHABET.len(), 62);
        assert!(DEFAULT_ALPHABET.starts_with("abcdefghijklmnopqrstuvwxyz"));
        assert!(DEFAULT_ALPHABET.ends_with("0123456789"));
    }

    #[test]
    fn default_options() {
        let options = Options::default();
        assert_eq!(options.alphabet, DEFAULT_ALPHABET);
        assert_eq!(options.min_length, 0);
        assert!(!options.blocklist.is_empty());
    }

    #[test]
    fn default_blocklist_is_the_bundled_resource() {
        let options = Options::default();
        assert_eq!(options.blocklist.len(), blocklist::default_words().count());
    }

    #[test]
    fn options_are_plain_data() {
        let options = Options {
            alphabet: "abc".to_owned(),
            min_length: 10,
            blocklist: vec!["cab".to_owned()],
        };
        let cloned = options.clone();
        assert_eq!(options, cloned);
    }
}
