//! Blockquotes.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::strip_break;
use crate::pipeline::Transform;

static QUOTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^((?:>[ \t]*)+)(.*)$").expect("blockquote regex"));

/// Transform that wraps `>`-prefixed lines in `<blockquote>`.
///
/// Each line is quoted on its own; `> > text` nests two levels deep.
/// Consecutive quote lines are not merged.
pub struct Blockquotes;

impl Transform for Blockquotes {
    fn name(&self) -> &'static str {
        "blockquotes"
    }

    fn apply(&self, text: &str) -> String {
        QUOTE_REGEX
            .replace_all(text, |caps: &Captures| {
                let depth = caps[1].matches('>').count();
                let content = strip_break(&caps[2]).trim();
                nest(content, depth)
            })
            .into_owned()
    }
}

fn nest(content: &str, depth: usize) -> String {
    let mut quoted = content.to_string();
    for _ in 0..depth {
        quoted = format!("<blockquote>{quoted}</blockquote>");
    }
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_level() {
        assert_eq!(
            Blockquotes.apply("> quoted  <br>\n"),
            "<blockquote>quoted</blockquote>\n"
        );
    }

    #[test]
    fn test_nested_levels() {
        assert_eq!(
            Blockquotes.apply("> > >deep<br>\n"),
            "<blockquote><blockquote><blockquote>deep</blockquote></blockquote></blockquote>\n"
        );
    }

    #[test]
    fn test_markup_in_content_does_not_change_depth() {
        assert_eq!(
            Blockquotes.apply("> <em>a</em><br>\n"),
            "<blockquote><em>a</em></blockquote>\n"
        );
    }

    #[test]
    fn test_lines_are_quoted_independently() {
        assert_eq!(
            Blockquotes.apply(">a<br>\n>b<br>\n"),
            "<blockquote>a</blockquote>\n<blockquote>b</blockquote>\n"
        );
    }

    #[test]
    fn test_gt_inside_line_is_untouched() {
        let input = "a > b<br>\n";
        assert_eq!(Blockquotes.apply(input), input);
    }
}
