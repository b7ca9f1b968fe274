//! Emoji shortcode lookup.
//!
//! The shortcode table is static data. The keyed index over it is built
//! lazily the first time [`lookup`] is called and never changes afterwards.

mod table;

use std::collections::HashMap;
use std::sync::LazyLock;

use table::SHORTCODES;

static INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| SHORTCODES.iter().copied().collect());

/// Look up the HTML entity sequence for a shortcode such as `:smile:`.
///
/// The colons are part of the shortcode.
pub fn lookup(shortcode: &str) -> Option<&'static str> {
    INDEX.get(shortcode).copied()
}

/// Iterate over `(shortcode, entities)` pairs in table order.
pub fn shortcodes() -> impl Iterator<Item = (&'static str, &'static str)> {
    SHORTCODES.iter().copied()
}

/// Number of known shortcodes.
pub fn len() -> usize {
    SHORTCODES.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_shortcode() {
        assert_eq!(lookup(":smile:"), Some("&#x1F604;"));
        assert_eq!(lookup(":joy:"), Some("&#x1F602;"));
    }

    #[test]
    fn test_lookup_requires_colons() {
        assert_eq!(lookup("smile"), None);
        assert_eq!(lookup(":not_an_emoji:"), None);
    }

    #[test]
    fn test_shortcodes_are_unique() {
        assert_eq!(INDEX.len(), len());
    }

    #[test]
    fn test_shortcodes_are_colon_delimited() {
        for (code, entities) in shortcodes() {
            assert!(code.starts_with(':') && code.ends_with(':'), "{code}");
            assert!(entities.starts_with("&#x"), "{code} -> {entities}");
        }
    }
}
