//! Conversion pipeline.
//!
//! A document is converted by threading its text through a fixed sequence
//! of transforms. Each transform recognizes one construct and rewrites it
//! to HTML; the output of one transform is the input of the next:
//!
//! 1. line breaks
//! 2. headers
//! 3. emphasis
//! 4. strikethrough
//! 5. fenced code blocks
//! 6. inline code
//! 7. task lists
//! 8. tables
//! 9. footnotes
//! 10. links
//! 11. images
//! 12. horizontal rules
//! 13. blockquotes
//! 14. block lists
//! 15. nested lists
//! 16. definition lists
//! 17. highlight
//! 18. sub/superscript
//! 19. symbols
//! 20. emoji
//!
//! The order is load-bearing: later transforms rely on the shape earlier
//! ones leave behind (for example, the break marker appended by the first
//! transform, or emphasis running before code blocks are escaped).

pub mod transforms;

use std::sync::LazyLock;

use transforms::{
    Blockquotes, BlockLists, CodeBlocks, DefinitionLists, Emoji, Emphasis, Footnotes, Headers,
    Highlight, HorizontalRules, Images, InlineCode, LineBreaks, Links, NestedLists,
    Strikethrough, SubSuperscript, Symbols, Tables, TaskLists,
};

static STANDARD: LazyLock<Pipeline> = LazyLock::new(Pipeline::standard);

/// A single rewrite pass over the whole document.
///
/// Transforms are pure: the result depends only on the input text.
pub trait Transform: Send + Sync {
    /// Stable name of this transform.
    fn name(&self) -> &'static str;

    /// Rewrite the document text.
    fn apply(&self, text: &str) -> String;
}

/// An ordered sequence of transforms.
///
/// [`Pipeline::standard`] is the only ordering `convert` uses. Building a
/// pipeline by hand is meant for inspecting individual passes.
pub struct Pipeline {
    transforms: Vec<Box<dyn Transform>>,
}

impl Pipeline {
    /// Create an empty pipeline with no transforms.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Create the standard pipeline in its documented order.
    pub fn standard() -> Self {
        let mut pipeline = Self::new();
        pipeline
            .add_transform(LineBreaks)
            .add_transform(Headers)
            .add_transform(Emphasis)
            .add_transform(Strikethrough)
            .add_transform(CodeBlocks)
            .add_transform(InlineCode)
            .add_transform(TaskLists)
            .add_transform(Tables)
            .add_transform(Footnotes)
            .add_transform(Links)
            .add_transform(Images)
            .add_transform(HorizontalRules)
            .add_transform(Blockquotes)
            .add_transform(BlockLists)
            .add_transform(NestedLists)
            .add_transform(DefinitionLists)
            .add_transform(Highlight)
            .add_transform(SubSuperscript)
            .add_transform(Symbols)
            .add_transform(Emoji);
        pipeline
    }

    /// The process-wide standard pipeline.
    pub fn shared() -> &'static Pipeline {
        &STANDARD
    }

    /// Add a transform to the end of the pipeline.
    pub fn add_transform<T: Transform + 'static>(&mut self, transform: T) -> &mut Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Run every transform in sequence over `text`.
    pub fn run(&self, text: &str) -> String {
        let mut text = text.to_string();
        for transform in &self.transforms {
            text = transform.apply(&text);
        }
        text
    }

    /// Get the names of all transforms in order.
    pub fn transform_names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order() {
        assert_eq!(
            Pipeline::standard().transform_names(),
            vec![
                "line_breaks",
                "headers",
                "emphasis",
                "strikethrough",
                "code_blocks",
                "inline_code",
                "task_lists",
                "tables",
                "footnotes",
                "links",
                "images",
                "horizontal_rules",
                "blockquotes",
                "block_lists",
                "nested_lists",
                "definition_lists",
                "highlight",
                "sub_superscript",
                "symbols",
                "emoji",
            ]
        );
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = Pipeline::new();
        assert_eq!(pipeline.run("# not touched\n"), "# not touched\n");
    }

    #[test]
    fn test_shared_matches_standard() {
        let input = "# Title\n\n**bold** and :smile:\n";
        assert_eq!(Pipeline::shared().run(input), Pipeline::standard().run(input));
    }

    #[test]
    fn test_order_is_load_bearing() {
        // Emphasis before code blocks: the markers inside the fence are
        // rewritten first, then escaped along with the rest of the body.
        let input = "```\n**x**\n```\n";
        let standard = Pipeline::standard().run(input);
        assert!(standard.contains("&lt;strong&gt;x&lt;/strong&gt;"));

        let mut swapped = Pipeline::new();
        swapped
            .add_transform(LineBreaks)
            .add_transform(CodeBlocks)
            .add_transform(Emphasis);
        let swapped = swapped.run(input);
        assert!(!swapped.contains("&lt;strong&gt;"));
        assert_ne!(standard, swapped);
    }

    #[test]
    fn test_links_before_images_keep_images_intact() {
        let mut pipeline = Pipeline::new();
        pipeline.add_transform(Links).add_transform(Images);
        assert_eq!(
            pipeline.run("![alt](img.png)"),
            "<img src=\"img.png\" alt=\"alt\">"
        );
    }
}
