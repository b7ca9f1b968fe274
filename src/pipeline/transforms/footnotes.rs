//! Numbered footnotes.
//!
//! Two passes with separate templates: references (`[^1]` in running text)
//! become superscript anchors pointing at the note, and definition lines
//! (`[^1]: text` at the start of a line) become the rendered note.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::pipeline::Transform;

// The optional trailing colon is captured so definitions can be skipped;
// the regex crate has no lookahead.
static REFERENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\^(\d+)\](:?)").expect("footnote reference regex"));

static DEFINITION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\[\^(\d+)\]:[ \t]*(.*?)[ \t]*(?:<br>)?$").expect("footnote definition regex")
});

/// Transform for footnote references and definitions.
pub struct Footnotes;

impl Transform for Footnotes {
    fn name(&self) -> &'static str {
        "footnotes"
    }

    fn apply(&self, text: &str) -> String {
        let text = REFERENCE_REGEX.replace_all(text, |caps: &Captures| {
            if !caps[2].is_empty() {
                return caps[0].to_string();
            }
            let index = &caps[1];
            format!(
                "<sup id=\"fnref:{index}\"><a href=\"#fn:{index}\" class=\"footnote-ref\">[{index}]</a></sup>"
            )
        });

        DEFINITION_REGEX
            .replace_all(&text, |caps: &Captures| {
                let index = &caps[1];
                let content = caps[2].trim();
                format!("<div id=\"fn:{index}\" class=\"footnote\"><sup>{index}</sup> {content}</div>")
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference() {
        assert_eq!(
            Footnotes.apply("Claim[^1] here<br>\n"),
            "Claim<sup id=\"fnref:1\"><a href=\"#fn:1\" class=\"footnote-ref\">[1]</a></sup> here<br>\n"
        );
    }

    #[test]
    fn test_definition() {
        assert_eq!(
            Footnotes.apply("[^2]:   The source.  <br>\n"),
            "<div id=\"fn:2\" class=\"footnote\"><sup>2</sup> The source.</div>\n"
        );
    }

    #[test]
    fn test_reference_and_definition_together() {
        let output = Footnotes.apply("See[^1].<br>\n<br>\n[^1]: Note.<br>\n");
        assert!(output.contains("<sup id=\"fnref:1\">"));
        assert!(output.contains("<div id=\"fn:1\" class=\"footnote\"><sup>1</sup> Note.</div>"));
    }

    #[test]
    fn test_non_numeric_label_is_untouched() {
        let input = "text[^note]<br>\n[^note]: body<br>\n";
        assert_eq!(Footnotes.apply(input), input);
    }

    #[test]
    fn test_definition_must_start_line() {
        let input = "inline [^3]: not a definition";
        assert_eq!(Footnotes.apply(input), input);
    }
}
