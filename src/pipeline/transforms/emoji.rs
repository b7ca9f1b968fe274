//! Emoji shortcode substitution.

use crate::emoji;
use crate::pipeline::Transform;

/// Transform that replaces known `:shortcode:` names with their emoji.
///
/// Every table entry is substituted in table order. Unknown shortcodes are
/// left as written.
pub struct Emoji;

impl Transform for Emoji {
    fn name(&self) -> &'static str {
        "emoji"
    }

    fn apply(&self, text: &str) -> String {
        let mut text = text.to_string();
        if !text.contains(':') {
            return text;
        }

        for (shortcode, entities) in emoji::shortcodes() {
            if text.contains(shortcode) {
                text = text.replace(shortcode, &format!("<span class=\"emoji\">{entities}</span>"));
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_shortcode() {
        assert_eq!(
            Emoji.apply("hi :smile:"),
            "hi <span class=\"emoji\">&#x1F604;</span>"
        );
    }

    #[test]
    fn test_every_occurrence() {
        let output = Emoji.apply(":joy: and :joy:");
        assert_eq!(output.matches("&#x1F602;").count(), 2);
    }

    #[test]
    fn test_unknown_shortcode_untouched() {
        let input = "this is :not_an_emoji: at all";
        assert_eq!(Emoji.apply(input), input);
    }

    #[test]
    fn test_adjacent_shortcodes() {
        assert_eq!(
            Emoji.apply(":smile::wink:"),
            "<span class=\"emoji\">&#x1F604;</span><span class=\"emoji\">&#x1F609;</span>"
        );
    }

    #[test]
    fn test_similar_prefix_is_not_matched() {
        let output = Emoji.apply(":smiley:");
        assert_eq!(output, "<span class=\"emoji\">&#x1F603;</span>");
    }
}
