//! The standard transforms.
//!
//! Most transforms are a single regex substitution over the whole text.
//! Tables, lists and definition lists scan line by line instead, because
//! they need to know about neighbouring lines.
//!
//! Block-level transforms consume the break marker on the lines they
//! rewrite; inline transforms leave it where it is.

mod blockquotes;
mod code;
mod definitions;
mod emoji;
mod emphasis;
mod footnotes;
mod headers;
mod line_breaks;
mod links;
mod lists;
mod rules;
mod symbols;
mod tables;
mod task_lists;

pub use blockquotes::Blockquotes;
pub use code::{CodeBlocks, InlineCode};
pub use definitions::DefinitionLists;
pub use emoji::Emoji;
pub use emphasis::{Emphasis, Highlight, Strikethrough, SubSuperscript};
pub use footnotes::Footnotes;
pub use headers::Headers;
pub use line_breaks::LineBreaks;
pub use links::{Images, Links};
pub use lists::{BlockLists, NestedLists};
pub use rules::HorizontalRules;
pub use symbols::Symbols;
pub use tables::Tables;
pub use task_lists::TaskLists;

/// Marker appended to every line by the line-break transform.
pub const BREAK: &str = "<br>";

/// Strip a trailing break marker from a line, if present.
pub(crate) fn strip_break(line: &str) -> &str {
    line.strip_suffix(BREAK).unwrap_or(line)
}

/// Escape HTML special characters.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_break() {
        assert_eq!(strip_break("text<br>"), "text");
        assert_eq!(strip_break("text"), "text");
        assert_eq!(strip_break("<br>text"), "<br>text");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<div>&</div>"), "&lt;div&gt;&amp;&lt;/div&gt;");
        assert_eq!(html_escape("say \"hi\""), "say &quot;hi&quot;");
    }
}
