//! Inline links and images.
//!
//! Neither transform escapes its captured text, url or alt: they are
//! copied into the markup byte for byte.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::pipeline::Transform;

// The optional leading `!` is captured so images can be skipped here and
// left for the image transform.
static LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?)\[([^\]\n]*)\]\(([^)\n]*)\)").expect("link regex")
});

static IMAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]\n]*)\]\(([^)\n]*)\)").expect("image regex"));

/// Transform for `[text](url)` links.
pub struct Links;

impl Transform for Links {
    fn name(&self) -> &'static str {
        "links"
    }

    fn apply(&self, text: &str) -> String {
        LINK_REGEX
            .replace_all(text, |caps: &Captures| {
                if !caps[1].is_empty() {
                    return caps[0].to_string();
                }
                format!("<a href=\"{}\">{}</a>", &caps[3], &caps[2])
            })
            .into_owned()
    }
}

/// Transform for `![alt](url)` images.
pub struct Images;

impl Transform for Images {
    fn name(&self) -> &'static str {
        "images"
    }

    fn apply(&self, text: &str) -> String {
        IMAGE_REGEX
            .replace_all(text, "<img src=\"${2}\" alt=\"${1}\">")
            .into_owned()
    }
}
