//! Fenced code blocks and inline code spans.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{BREAK, html_escape};
use crate::pipeline::Transform;

static FENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```([^`\n]*?)(?:<br>)?\n(.*?)```(?:<br>)?").expect("code fence regex")
});

static INLINE_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("inline code regex"));

/// Transform that renders fenced code blocks as `<pre><code>`.
///
/// The language token after the opening fence becomes a `language-*`
/// class. Break markers inside the body are dropped and the body is
/// HTML-escaped, so markup inside the fence is shown literally.
pub struct CodeBlocks;

impl Transform for CodeBlocks {
    fn name(&self) -> &'static str {
        "code_blocks"
    }

    fn apply(&self, text: &str) -> String {
        let line_end = format!("{BREAK}\n");
        FENCE_REGEX
            .replace_all(text, |caps: &Captures| {
                let language = caps[1].trim();
                let code = html_escape(&caps[2].replace(&line_end, "\n"));
                code_block(&code, language)
            })
            .into_owned()
    }
}

/// Wrap already-escaped code in `<pre><code>`.
fn code_block(escaped: &str, language: &str) -> String {
    if language.is_empty() {
        format!("<pre><code>{}</code></pre>", escaped)
    } else {
        format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            language, escaped
        )
    }
}

/// Transform that renders `` `code` `` spans as `<code>`.
///
/// Spans never cross a line boundary. The content is not escaped.
pub struct InlineCode;

impl Transform for InlineCode {
    fn name(&self) -> &'static str {
        "inline_code"
    }

    fn apply(&self, text: &str) -> String {
        INLINE_CODE_REGEX
            .replace_all(text, "<code>${1}</code>")
            .into_owned()
    }
}
