//! Ordered and unordered lists.
//!
//! Lists are handled by two passes:
//!
//! - [`BlockLists`] groups runs of adjacent list lines. Ordered runs become
//!   `<ol>`; unordered runs whose items share one indentation become `<ul>`.
//!   Unordered runs with mixed indentation are left for the next pass.
//! - [`NestedLists`] walks the remaining `-`/`*`/`+` lines and opens or
//!   closes `<ul>` levels as the indentation changes.

use std::sync::LazyLock;

use regex::Regex;

use super::strip_break;
use crate::pipeline::Transform;

static ORDERED_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*)\d+\.[ \t]+(.*)$").expect("ordered item regex"));

static UNORDERED_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*)[*+-][ \t]+(.*)$").expect("unordered item regex"));

/// Columns a tab advances list indentation by.
const TAB_WIDTH: usize = 4;

/// Indentation width in columns, with tabs expanded to [`TAB_WIDTH`].
fn indent_width(indent: &str) -> usize {
    indent
        .chars()
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}

/// A line recognized as a list item.
#[derive(Debug, Clone, Copy)]
struct ListLine<'a> {
    kind: ListKind,
    indent: &'a str,
    text: &'a str,
}

impl<'a> ListLine<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let content = strip_break(line);
        let (kind, caps) = if let Some(caps) = ORDERED_ITEM_REGEX.captures(content) {
            (ListKind::Ordered, caps)
        } else {
            (ListKind::Unordered, UNORDERED_ITEM_REGEX.captures(content)?)
        };

        Some(Self {
            kind,
            indent: caps.get(1).map_or("", |m| m.as_str()),
            text: caps.get(2).map_or("", |m| m.as_str().trim()),
        })
    }
}

/// Coarse list pass: wraps runs of adjacent list lines in `<ol>`/`<ul>`.
pub struct BlockLists;

impl Transform for BlockLists {
    fn name(&self) -> &'static str {
        "block_lists"
    }

    fn apply(&self, text: &str) -> String {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut out: Vec<String> = Vec::with_capacity(lines.len());
        let mut i = 0;

        while i < lines.len() {
            let Some(first) = ListLine::parse(lines[i]) else {
                out.push(lines[i].to_string());
                i += 1;
                continue;
            };

            let start = i;
            let mut run = vec![first];
            i += 1;
            while let Some(item) = lines.get(i).and_then(|line| ListLine::parse(line)) {
                if item.kind != first.kind {
                    break;
                }
                run.push(item);
                i += 1;
            }

            let flat = run
                .iter()
                .all(|item| indent_width(item.indent) == indent_width(first.indent));
            if first.kind == ListKind::Unordered && !flat {
                out.extend(lines[start..i].iter().map(|line| line.to_string()));
                continue;
            }

            let tag = first.kind.tag();
            out.push(format!("<{tag}>"));
            out.extend(run.iter().map(|item| format!("<li>{}</li>", item.text)));
            out.push(format!("</{tag}>"));
        }

        out.join("\n")
    }
}

/// Indentation-aware list pass: nests `<ul>` levels by indentation.
///
/// The indentation of every open level is kept on a stack. A deeper item
/// opens a nested list inside the current item, a shallower one closes
/// levels until it fits, and a line that is not an item closes them all.
pub struct NestedLists;

impl Transform for NestedLists {
    fn name(&self) -> &'static str {
        "nested_lists"
    }

    fn apply(&self, text: &str) -> String {
        let mut out: Vec<String> = Vec::new();
        let mut open: Vec<usize> = Vec::new();

        for line in text.split('\n') {
            let Some(caps) = UNORDERED_ITEM_REGEX.captures(strip_break(line)) else {
                close_levels(&mut open, &mut out);
                out.push(line.to_string());
                continue;
            };

            let indent = indent_width(&caps[1]);
            let item = caps[2].trim();

            while open.last().is_some_and(|&top| top > indent) {
                open.pop();
                out.push("</li>".to_string());
                out.push("</ul>".to_string());
            }

            if open.last() == Some(&indent) {
                out.push("</li>".to_string());
            } else {
                out.push("<ul>".to_string());
                open.push(indent);
            }
            out.push(format!("<li>{item}"));
        }

        close_levels(&mut open, &mut out);
        out.join("\n")
    }
}

/// Close every open item and list level.
fn close_levels(open: &mut Vec<usize>, out: &mut Vec<String>) {
    while open.pop().is_some() {
        out.push("</li>".to_string());
        out.push("</ul>".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_unordered_run() {
        assert_eq!(
            BlockLists.apply("- a<br>\n* b<br>\n+ c<br>\nafter<br>\n"),
            "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>\nafter<br>\n"
        );
    }

    #[test]
    fn test_ordered_run() {
        assert_eq!(
            BlockLists.apply("1. one<br>\n2. two<br>\n"),
            "<ol>\n<li>one</li>\n<li>two</li>\n</ol>\n"
        );
    }

    #[test]
    fn test_adjacent_runs_of_different_kinds() {
        assert_eq!(
            BlockLists.apply("1. one<br>\n- dash<br>\n"),
            "<ol>\n<li>one</li>\n</ol>\n<ul>\n<li>dash</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_mixed_indentation_left_for_nesting() {
        let input = "- a<br>\n  - b<br>\n";
        assert_eq!(BlockLists.apply(input), input);
    }

    #[test]
    fn test_marker_needs_whitespace() {
        let input = "-5 degrees<br>\n3.14 is pi<br>\n";
        assert_eq!(BlockLists.apply(input), input);
    }

    #[test]
    fn test_nested_increase_and_decrease() {
        assert_eq!(
            NestedLists.apply("- a<br>\n  - b<br>\n- c<br>\n"),
            "<ul>\n<li>a\n<ul>\n<li>b\n</li>\n</ul>\n</li>\n<li>c\n</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_end_of_input_closes_all_levels() {
        let output = NestedLists.apply("- a\n  - b\n    - c");
        assert_eq!(output.matches("<ul>").count(), 3);
        assert_eq!(output.matches("</ul>").count(), 3);
        assert!(output.ends_with("</li>\n</ul>\n</li>\n</ul>\n</li>\n</ul>"));
    }

    #[test]
    fn test_irregular_indentation_balances() {
        let output = NestedLists.apply("- a\n    - b\n  - c\n- d\n");
        assert_eq!(
            output.matches("<ul>").count(),
            output.matches("</ul>").count()
        );
        assert_eq!(
            output.matches("<li>").count(),
            output.matches("</li>").count()
        );
    }

    #[test]
    fn test_plain_line_ends_list() {
        let output = NestedLists.apply("- a\n  - b\ntext\n");
        assert!(output.contains("</ul>\ntext\n"));
    }

    #[test]
    fn test_tab_indentation_nests() {
        let input = "- a<br>\n\t- b<br>\n";
        assert_eq!(BlockLists.apply(input), input);
        assert_eq!(
            NestedLists.apply(input),
            "<ul>\n<li>a\n<ul>\n<li>b\n</li>\n</ul>\n</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_tab_and_four_spaces_are_one_level() {
        assert_eq!(
            BlockLists.apply("\t- a<br>\n    - b<br>\n"),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_nested_pass_ignores_text() {
        let input = "plain<br>\n<ul>\n<li>done</li>\n</ul>\n";
        assert_eq!(NestedLists.apply(input), input);
    }
}
