//! Pipe tables.
//!
//! This is the one transform with memory across lines, so it is written as
//! an explicit state machine over the lines of the document rather than as
//! a pattern substitution.

use super::strip_break;
use crate::pipeline::Transform;

/// Separator marker that ends the header section of a table.
const SEPARATOR: &str = "---";

/// Where the scan currently is relative to a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableState {
    /// Not inside a table.
    Outside,
    /// Inside a table, before the separator line.
    Head,
    /// Inside a table, after the separator line.
    Body,
}

impl TableState {
    /// Markup that closes a table opened in this state, if any.
    fn closing_markup(self) -> Option<&'static str> {
        match self {
            TableState::Outside => None,
            TableState::Head => Some("</thead>\n</table>"),
            TableState::Body => Some("</tbody>\n</table>"),
        }
    }
}

/// Transform that renders runs of pipe-delimited lines as a `<table>`.
///
/// The first line containing `|` opens the table, a line containing `---`
/// switches from `<thead>` to `<tbody>`, and the first line without `|`
/// closes it again.
pub struct Tables;

impl Transform for Tables {
    fn name(&self) -> &'static str {
        "tables"
    }

    fn apply(&self, text: &str) -> String {
        let mut state = TableState::Outside;
        let mut out: Vec<String> = Vec::new();

        for line in text.split('\n') {
            let content = strip_break(line);

            if !content.contains('|') {
                if let Some(closing) = state.closing_markup() {
                    out.push(closing.to_string());
                    state = TableState::Outside;
                }
                out.push(line.to_string());
                continue;
            }

            if state == TableState::Outside {
                out.push("<table>\n<thead>".to_string());
                state = TableState::Head;
            }

            if content.contains(SEPARATOR) {
                if state == TableState::Head {
                    out.push("</thead>\n<tbody>".to_string());
                    state = TableState::Body;
                }
                continue;
            }

            out.push(render_row(content));
        }

        if let Some(closing) = state.closing_markup() {
            out.push(closing.to_string());
        }

        out.join("\n")
    }
}

/// Render one pipe-delimited line as a table row.
///
/// Leading and trailing pipes are optional; every inner pipe is a cell
/// boundary.
fn render_row(line: &str) -> String {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);

    let cells: String = line
        .split('|')
        .map(|cell| format!("<td>{}</td>", cell.trim()))
        .collect();

    format!("<tr>{cells}</tr>")
}
