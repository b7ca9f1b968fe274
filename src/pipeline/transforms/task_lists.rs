//! Task list items.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{BREAK, strip_break};
use crate::pipeline::Transform;

static TASK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^- \[(x| )\](.*)$").expect("task list regex"));

/// Transform that renders `- [ ]` and `- [x]` lines as disabled checkboxes.
pub struct TaskLists;

impl Transform for TaskLists {
    fn name(&self) -> &'static str {
        "task_lists"
    }

    fn apply(&self, text: &str) -> String {
        TASK_REGEX
            .replace_all(text, |caps: &Captures| {
                let checked = if &caps[1] == "x" { " checked" } else { "" };
                let rest = &caps[2];
                let item = strip_break(rest).trim();
                let line_break = if rest.ends_with(BREAK) { BREAK } else { "" };
                format!("<input type=\"checkbox\"{checked} disabled> {item}{line_break}")
            })
            .into_owned()
    }
}
