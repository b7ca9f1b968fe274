//! Line-break normalization.

use std::sync::LazyLock;

use regex::Regex;

use super::BREAK;
use crate::pipeline::Transform;

static NEWLINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x{85}\x{2028}\x{2029}]").expect("newline regex")
});

/// Transform that rewrites every line terminator to `<br>\n`.
///
/// After this pass the text contains only `\n` terminators, so every later
/// transform can reason about lines by splitting on `\n`.
pub struct LineBreaks;

impl Transform for LineBreaks {
    fn name(&self) -> &'static str {
        "line_breaks"
    }

    fn apply(&self, text: &str) -> String {
        let replacement = format!("{BREAK}\n");
        NEWLINE_REGEX
            .replace_all(text, replacement.as_str())
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_terminators() {
        assert_eq!(
            LineBreaks.apply("a\r\nb\rc\nd"),
            "a<br>\nb<br>\nc<br>\nd"
        );
    }

    #[test]
    fn test_unicode_separators() {
        assert_eq!(LineBreaks.apply("a\u{2028}b"), "a<br>\nb");
    }

    #[test]
    fn test_no_terminator() {
        assert_eq!(LineBreaks.apply("single line"), "single line");
    }

    #[test]
    fn test_blank_lines_keep_their_marker() {
        assert_eq!(LineBreaks.apply("a\n\nb"), "a<br>\n<br>\nb");
    }
}
