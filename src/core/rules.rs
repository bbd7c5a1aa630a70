//! The substitution table: ordered (pattern, replacement) pairs.
//!
//! Order matters. Each rule runs over the output of the previous one, so a rule
//! can be shadowed by an earlier, broader rule (the space + em dash rule never
//! matches because the bare em dash rule has already consumed every em dash).

use std::borrow::Cow;

use regex::{NoExpand, Regex};

/// What a rule looks for.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Exact substring.
    Literal(&'static str),
    /// Regular expression; every non-overlapping match is replaced.
    Regex(Regex),
    /// Like `Regex`, but re-applied until nothing matches. For patterns whose
    /// replacement can bring two partial matches together.
    RegexUntilStable(Regex),
}

/// One global substitution.
#[derive(Debug, Clone)]
pub struct Rule {
    pub pattern: Pattern,
    /// Inserted verbatim; `$` is not a capture reference.
    pub replacement: &'static str,
}

/// U+2060 WORD JOINER, either as the character or as the `<2060>` marker editors
/// display in its place, with a whitespace run between two of them.
/// Collapsing `<2060><2060> <2060><2060>` leaves a fresh `<2060> <2060>`, so the
/// rule runs until stable.
const WORD_JOINER_RUN: &str = r"(?:<2060>|\x{2060})\s+(?:<2060>|\x{2060})";

impl Rule {
    pub fn literal(pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            pattern: Pattern::Literal(pattern),
            replacement,
        }
    }

    pub fn regex(re: Regex, replacement: &'static str) -> Self {
        Self {
            pattern: Pattern::Regex(re),
            replacement,
        }
    }

    pub fn regex_until_stable(re: Regex, replacement: &'static str) -> Self {
        Self {
            pattern: Pattern::RegexUntilStable(re),
            replacement,
        }
    }

    /// Apply this rule to `text`. Returns the input unchanged (borrowed) when nothing matches.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.pattern {
            Pattern::Literal(needle) => {
                if text.contains(needle) {
                    Cow::Owned(text.replace(needle, self.replacement))
                } else {
                    Cow::Borrowed(text)
                }
            }
            Pattern::Regex(re) => re.replace_all(text, NoExpand(self.replacement)),
            Pattern::RegexUntilStable(re) => {
                let mut out = re.replace_all(text, NoExpand(self.replacement));
                // Each pass removes at least one marker, so this terminates.
                loop {
                    let next = match &out {
                        Cow::Owned(s) if re.is_match(s) => re
                            .replace_all(s, NoExpand(self.replacement))
                            .into_owned(),
                        _ => break,
                    };
                    out = Cow::Owned(next);
                }
                out
            }
        }
    }
}

/// The built-in table, in application order.
pub fn standard() -> Vec<Rule> {
    vec![
        Rule::literal("\u{2013}", "-"),
        Rule::literal("\u{2014}", ", "),
        // Never matches: the rule above has already replaced every em dash.
        Rule::literal(" \u{2014}", ","),
        Rule::literal("\u{201c}", "\""),
        Rule::literal("\u{201d}", "\""),
        Rule::literal("\u{2019}", "'"),
        Rule::literal("\u{2026}", "..."),
        Rule::literal("\u{2022}", "*"),
        Rule::regex_until_stable(word_joiner_run(), " "),
    ]
}

fn word_joiner_run() -> Regex {
    Regex::new(WORD_JOINER_RUN).expect("word joiner pattern compiles")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_without_match_borrows() {
        let rule = Rule::literal("\u{2022}", "*");
        assert!(matches!(rule.apply("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn literal_replaces_every_occurrence() {
        let rule = Rule::literal("\u{2013}", "-");
        assert_eq!(rule.apply("1\u{2013}2\u{2013}3"), "1-2-3");
    }

    #[test]
    fn regex_replacement_is_not_expanded() {
        let rule = Rule::regex(Regex::new("x+").unwrap(), "$0");
        assert_eq!(rule.apply("axxb"), "a$0b");
    }

    #[test]
    fn word_joiner_marker_run_becomes_space() {
        let rule = Rule::regex(word_joiner_run(), " ");
        assert_eq!(rule.apply("a<2060> \t <2060>b"), "a b");
        assert_eq!(rule.apply("a\u{2060}\n\u{2060}b"), "a b");
        assert_eq!(rule.apply("a<2060>\u{a0}\u{2060}b"), "a b");
    }

    #[test]
    fn word_joiner_needs_whitespace_between() {
        let rule = Rule::regex(word_joiner_run(), " ");
        assert_eq!(rule.apply("a<2060><2060>b"), "a<2060><2060>b");
        assert_eq!(rule.apply("a<2060> b"), "a<2060> b");
    }

    #[test]
    fn adjacent_word_joiners_collapse_fully() {
        let rule = Rule::regex_until_stable(word_joiner_run(), " ");
        assert_eq!(rule.apply("a<2060><2060> <2060><2060>b"), "a b");
        assert_eq!(rule.apply("a\u{2060}<2060>\t<2060>\u{2060}b"), "a b");
    }

    #[test]
    fn single_pass_regex_leaves_adjacent_pair() {
        let rule = Rule::regex(word_joiner_run(), " ");
        assert_eq!(
            rule.apply("a<2060><2060> <2060><2060>b"),
            "a<2060> <2060>b"
        );
    }

    #[test]
    fn until_stable_without_match_borrows() {
        let rule = Rule::regex_until_stable(word_joiner_run(), " ");
        assert!(matches!(rule.apply("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn standard_table_order() {
        let rules = standard();
        assert_eq!(rules.len(), 9);
        let literals: Vec<&str> = rules
            .iter()
            .filter_map(|r| match r.pattern {
                Pattern::Literal(p) => Some(p),
                Pattern::Regex(_) | Pattern::RegexUntilStable(_) => None,
            })
            .collect();
        assert_eq!(
            literals,
            vec![
                "\u{2013}", "\u{2014}", " \u{2014}", "\u{201c}", "\u{201d}", "\u{2019}",
                "\u{2026}", "\u{2022}",
            ]
        );
        assert!(matches!(rules[8].pattern, Pattern::RegexUntilStable(_)));
    }
}
