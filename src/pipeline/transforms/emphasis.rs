//! Delimiter-pair inline transforms.
//!
//! All of these match the shortest delimited span on a single line and do
//! not track nesting depth, so overlapping markers resolve first-match-wins.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::pipeline::Transform;

// `\S(?:.*?\S)??` is non-empty content that starts and ends with a
// non-whitespace character, preferring the shortest span. Underscores only
// delimit at word boundaries.
static STRONG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(\S(?:.*?\S)??)\*\*|\b__(\S(?:.*?\S)??)__\b").expect("strong regex")
});

static EM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*(\S(?:.*?\S)??)\*|\b_(\S(?:.*?\S)??)_\b").expect("emphasis regex")
});

static STRIKETHROUGH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~(.*?)~~").expect("strikethrough regex"));

static HIGHLIGHT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"===(.*?)===").expect("highlight regex"));

static SUPERSCRIPT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^\^(\S.*?)\^\^").expect("superscript regex"));

static SUBSCRIPT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~(\S.*?)~").expect("subscript regex"));

/// Wrap the delimited content of a strong/emphasis match in `tag`.
///
/// Runs made only of delimiters (`***`, `___`) are horizontal rules and
/// are handed back unchanged.
fn wrap_delimited(caps: &Captures, tag: &str) -> String {
    let content = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map_or("", |m| m.as_str());

    if content
        .chars()
        .all(|c| c == '*' || c == '_' || c.is_whitespace())
    {
        return caps[0].to_string();
    }

    format!("<{tag}>{content}</{tag}>")
}

/// Transform for `**strong**`/`__strong__` and `*em*`/`_em_`.
///
/// Strong runs first, so `**x**` never turns into nested `<em>`.
pub struct Emphasis;

impl Transform for Emphasis {
    fn name(&self) -> &'static str {
        "emphasis"
    }

    fn apply(&self, text: &str) -> String {
        let text = STRONG_REGEX.replace_all(text, |caps: &Captures| wrap_delimited(caps, "strong"));
        EM_REGEX
            .replace_all(&text, |caps: &Captures| wrap_delimited(caps, "em"))
            .into_owned()
    }
}

/// Transform for `~~strikethrough~~`.
pub struct Strikethrough;

impl Transform for Strikethrough {
    fn name(&self) -> &'static str {
        "strikethrough"
    }

    fn apply(&self, text: &str) -> String {
        STRIKETHROUGH_REGEX
            .replace_all(text, "<del>${1}</del>")
            .into_owned()
    }
}

/// Transform for `===highlight===`.
pub struct Highlight;

impl Transform for Highlight {
    fn name(&self) -> &'static str {
        "highlight"
    }

    fn apply(&self, text: &str) -> String {
        HIGHLIGHT_REGEX
            .replace_all(text, "<mark>${1}</mark>")
            .into_owned()
    }
}

/// Transform for `^^superscript^^` and `~subscript~`.
pub struct SubSuperscript;

impl Transform for SubSuperscript {
    fn name(&self) -> &'static str {
        "sub_superscript"
    }

    fn apply(&self, text: &str) -> String {
        let text = SUPERSCRIPT_REGEX.replace_all(text, "<sup>${1}</sup>");
        SUBSCRIPT_REGEX
            .replace_all(&text, "<sub>${1}</sub>")
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("**bold**", "<strong>bold</strong>")]
    #[case("__bold__", "<strong>bold</strong>")]
    #[case("*em*", "<em>em</em>")]
    #[case("_em_", "<em>em</em>")]
    #[case("*a* *b*", "<em>a</em> <em>b</em>")]
    #[case("**a** and **b**", "<strong>a</strong> and <strong>b</strong>")]
    #[case("**a *b* c**", "<strong>a <em>b</em> c</strong>")]
    fn test_emphasis(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Emphasis.apply(input), expected);
    }

    #[rstest]
    #[case("* not emphasis *")]
    #[case("a * b")]
    #[case("***")]
    #[case("___")]
    #[case("* * *")]
    #[case("snake_case_name")]
    #[case(":not_an_emoji:")]
    #[case("******")]
    fn test_emphasis_leaves_text(#[case] input: &str) {
        assert_eq!(Emphasis.apply(input), input);
    }

    #[test]
    fn test_emphasis_does_not_cross_lines() {
        let input = "*start<br>\nend*<br>\n";
        assert_eq!(Emphasis.apply(input), input);
    }

    #[test]
    fn test_mixed_delimiters_do_not_pair() {
        assert_eq!(Emphasis.apply("**a__"), "**a__");
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(Strikethrough.apply("~~gone~~ kept"), "<del>gone</del> kept");
        assert_eq!(Strikethrough.apply("~single~"), "~single~");
    }

    #[test]
    fn test_highlight() {
        assert_eq!(Highlight.apply("a ===b=== c"), "a <mark>b</mark> c");
    }

    #[test]
    fn test_sub_superscript() {
        assert_eq!(SubSuperscript.apply("x^^2^^"), "x<sup>2</sup>");
        assert_eq!(SubSuperscript.apply("H~2~O"), "H<sub>2</sub>O");
        assert_eq!(SubSuperscript.apply("a ~ b"), "a ~ b");
    }
}
