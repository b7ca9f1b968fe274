//! Horizontal rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::pipeline::Transform;

// Three or more of the same rule character, optionally space-separated.
static RULE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:(?:-[ \t]*){3,}|(?:_[ \t]*){3,}|(?:\*[ \t]*){3,})(?:<br>)?$",
    )
    .expect("horizontal rule regex")
});

/// Transform that renders `---`, `___` and `***` lines as `<hr>`.
pub struct HorizontalRules;

impl Transform for HorizontalRules {
    fn name(&self) -> &'static str {
        "horizontal_rules"
    }

    fn apply(&self, text: &str) -> String {
        RULE_REGEX.replace_all(text, "<hr>").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("---<br>\n")]
    #[case("***<br>\n")]
    #[case("___<br>\n")]
    #[case("- - -<br>\n")]
    #[case("  *****  <br>\n")]
    fn test_rules(#[case] input: &str) {
        assert_eq!(HorizontalRules.apply(input), "<hr>\n");
    }

    #[rstest]
    #[case("--<br>\n")]
    #[case("-*-<br>\n")]
    #[case("--- text<br>\n")]
    fn test_not_rules(#[case] input: &str) {
        assert_eq!(HorizontalRules.apply(input), input);
    }

    #[test]
    fn test_rule_on_last_line() {
        assert_eq!(HorizontalRules.apply("a<br>\n----"), "a<br>\n<hr>");
    }
}
