//! The bundled default word list.

/// The default blocked-word resource, one lowercase word per line.
const DEFAULT_BLOCKLIST: &str = include_str!("../data/default_blocklist.txt");

/// Returns the bundled default blocked words.
///
/// The list is distributed as a newline-separated UTF-8 text resource and
/// is versioned with the crate; it is data, not logic.
pub fn default_words() -> impl Iterator<Item = &'static str> {
    DEFAULT_BLOCKLIST
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
}
