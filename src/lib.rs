//! Convert a lightweight Markdown dialect into an HTML fragment.
//!
//! Conversion is a fixed pipeline of textual rewrite passes (see
//! [`pipeline`]). It never fails: markup that is not recognized is passed
//! through as literal text.
//!
//! ```
//! let html = markdownify::convert("# Hello\n**world** :smile:\n");
//! assert!(html.contains("<h1>Hello</h1>"));
//! assert!(html.contains("<strong>world</strong>"));
//! ```

pub mod emoji;
pub mod pipeline;

pub use pipeline::{Pipeline, Transform};

/// Convert `document` to an HTML fragment using the standard pipeline.
pub fn convert(document: &str) -> String {
    Pipeline::shared().run(document)
}
