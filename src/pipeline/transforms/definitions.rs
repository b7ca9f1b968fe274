//! Definition lists.

use std::sync::LazyLock;

use regex::Regex;

use super::strip_break;
use crate::pipeline::Transform;

// Whitespace is required around the colon so `http://` is not a definition.
static DEFINITION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S.*?)[ \t]+:[ \t]+(.*)$").expect("definition regex"));

// Lines already rendered as block markup by earlier transforms.
static BLOCK_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^</?(?:h[1-6]|ul|ol|li|dl|table|thead|tbody|tr|blockquote|pre|div|hr)\b")
        .expect("block tag regex")
});

/// Transform that renders `term : definition` lines as `<dt>`/`<dd>` pairs
/// and wraps each run of them in `<dl>`.
pub struct DefinitionLists;

impl Transform for DefinitionLists {
    fn name(&self) -> &'static str {
        "definition_lists"
    }

    fn apply(&self, text: &str) -> String {
        let mut out: Vec<String> = Vec::new();
        let mut in_list = false;

        for line in text.split('\n') {
            match definition(line) {
                Some(rendered) => {
                    if !in_list {
                        out.push("<dl>".to_string());
                        in_list = true;
                    }
                    out.push(rendered);
                }
                None => {
                    if in_list {
                        out.push("</dl>".to_string());
                        in_list = false;
                    }
                    out.push(line.to_string());
                }
            }
        }

        if in_list {
            out.push("</dl>".to_string());
        }

        out.join("\n")
    }
}

fn definition(line: &str) -> Option<String> {
    let content = strip_break(line);
    if BLOCK_TAG_REGEX.is_match(content) {
        return None;
    }

    let caps = DEFINITION_REGEX.captures(content)?;
    Some(format!(
        "<dt>{}</dt><dd>{}</dd>",
        caps[1].trim(),
        caps[2].trim()
    ))
}
