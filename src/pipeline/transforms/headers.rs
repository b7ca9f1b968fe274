//! ATX-style headers.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::pipeline::Transform;

// Heading text may not contain `#`; an optional `{#id}` and trailing `#`
// clutter may follow, then the break marker. The clutter can swallow a
// seventh leading `#`, so the level run is checked again in `apply`.
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(#{1,6})[ \t]*([^#\n]*?)(?:[ \t]+\{#([^}\n]+)\})?[ \t]*#*(?:<br>)?$")
        .expect("header regex")
});

/// Deepest header level; a longer `#` run is plain text.
const MAX_LEVEL: usize = 6;

fn leading_hashes(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b'#').count()
}

/// Transform that renders `#`..`######` lines as `<h1>`..`<h6>`.
///
/// `## Title {#anchor}` becomes `<h2 id="anchor">Title</h2>`.
pub struct Headers;

impl Transform for Headers {
    fn name(&self) -> &'static str {
        "headers"
    }

    fn apply(&self, text: &str) -> String {
        HEADER_REGEX
            .replace_all(text, |caps: &Captures| {
                if leading_hashes(&caps[0]) > MAX_LEVEL {
                    return caps[0].to_string();
                }
                let level = caps[1].len();
                let heading = caps[2].trim();
                let id = caps
                    .get(3)
                    .map(|id| format!(" id=\"{}\"", id.as_str().trim()))
                    .unwrap_or_default();
                format!("<h{level}{id}>{heading}</h{level}>")
            })
            .into_owned()
    }
}
