//! Typographic symbol substitution.

use std::sync::LazyLock;

use regex::Regex;

use crate::pipeline::Transform;

/// Literal tokens and the named entity each one becomes, in application order.
static SYMBOLS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\(c\)", "&copy;"),
        (r"(?i)\(r\)", "&reg;"),
        (r"(?i)\(tm\)", "&trade;"),
        (r"(?i)\(p\)", "&pound;"),
        (r"\+-", "&plusmn;"),
    ]
    .into_iter()
    .map(|(pattern, entity)| (Regex::new(pattern).expect("symbol regex"), entity))
    .collect()
});

/// Transform for `(c)`, `(r)`, `(tm)`, `(p)` and `+-`.
pub struct Symbols;

impl Transform for Symbols {
    fn name(&self) -> &'static str {
        "symbols"
    }

    fn apply(&self, text: &str) -> String {
        SYMBOLS
            .iter()
            .fold(text.to_string(), |text, (regex, entity)| {
                regex.replace_all(&text, *entity).into_owned()
            })
    }
}
