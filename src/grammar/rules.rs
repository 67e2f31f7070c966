// Pattern rules for the line scanner.
//
// Rules are plain data so the table can be inspected and tested on its own.
// They are compiled per analysis run; a pattern that fails to compile is an
// analyzer error, which the caller turns into the fallback report.
//
// The article and adverb rules are deliberately broad (any "a"/"an" before a
// vowel, any word ending in "ly"). They flag plenty of correct prose.

use anyhow::{Context, Result};
use regex_lite::Regex;

use super::issue::{IssueKind, Severity};

/// One pattern rule: every match of `pattern` on a line is one issue.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub pattern: &'static str,
    pub message: &'static str,
    pub kind: IssueKind,
    pub severity: Severity,
}

/// The rule table, in evaluation order.
pub const RULES: &[RuleSpec] = &[
    RuleSpec {
        pattern: r"(?i)\bi is\b",
        message: "Use 'I am' instead of 'I is'",
        kind: IssueKind::Grammar,
        severity: Severity::High,
    },
    RuleSpec {
        pattern: r"(?i)\b(?:your you're|you're your)\b",
        message: "Possible confusion between 'your' and 'you're'",
        kind: IssueKind::Grammar,
        severity: Severity::Medium,
    },
    RuleSpec {
        pattern: r"(?i)\b(?:there their|their there|they're their)\b",
        message: "Possible confusion between 'there', 'their' and 'they're'",
        kind: IssueKind::Grammar,
        severity: Severity::Medium,
    },
    RuleSpec {
        pattern: r"(?i)\b(?:it's its|its it's)\b",
        message: "Possible confusion between 'its' and 'it's'",
        kind: IssueKind::Grammar,
        severity: Severity::Medium,
    },
    RuleSpec {
        pattern: r"(?i)\ban? [aeiou]",
        message: "Check the article before a word starting with a vowel",
        kind: IssueKind::Grammar,
        severity: Severity::Low,
    },
    RuleSpec {
        pattern: r"(?i)\b\w+ly\b",
        message: "Avoid excessive adverbs",
        kind: IssueKind::Style,
        severity: Severity::Low,
    },
    RuleSpec {
        pattern: r"(?i)\b(?:very|really|quite|extremely)\b",
        message: "Avoid weak modifiers like 'very' or 'really'",
        kind: IssueKind::Style,
        severity: Severity::Low,
    },
];

/// A rule with its pattern compiled.
#[derive(Debug)]
pub struct CompiledRule {
    pub regex: Regex,
    pub spec: RuleSpec,
}

/// The compiled rule table, ready to run against lines.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    pub fn compile(specs: &[RuleSpec]) -> Result<Self> {
        let rules = specs
            .iter()
            .map(|spec| {
                let regex = Regex::new(spec.pattern)
                    .with_context(|| format!("Invalid grammar rule pattern: {}", spec.pattern))?;
                Ok(CompiledRule { regex, spec: *spec })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(rule: usize, text: &str) -> Vec<String> {
        let set = RuleSet::compile(&RULES[rule..=rule]).unwrap();
        let compiled = set.iter().next().unwrap();
        compiled
            .regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_builtin_rules_compile() {
        let set = RuleSet::compile(RULES).unwrap();
        assert_eq!(set.len(), 7);
    }

    #[test]
    fn test_bad_pattern_is_error() {
        let bad = [RuleSpec {
            pattern: r"(unclosed",
            message: "broken",
            kind: IssueKind::Style,
            severity: Severity::Low,
        }];
        assert!(RuleSet::compile(&bad).is_err());
    }

    #[test]
    fn test_i_is() {
        assert_eq!(matches(0, "I is a team player"), vec!["I is"]);
        assert!(matches(0, "This is fine").is_empty());
    }

    #[test]
    fn test_confusables() {
        assert_eq!(matches(1, "Check your you're notes"), vec!["your you're"]);
        assert_eq!(matches(2, "Put it their there"), vec!["their there"]);
        assert_eq!(matches(3, "The dog wagged it's its tail"), vec!["it's its"]);
    }

    #[test]
    fn test_article_before_vowel() {
        assert_eq!(matches(4, "Built an app and a index"), vec!["an a", "a i"]);
    }

    #[test]
    fn test_adverbs_and_modifiers() {
        assert_eq!(matches(5, "Quickly and reliably shipped"), vec!["Quickly", "reliably"]);
        assert_eq!(matches(6, "A very really good team"), vec!["very", "really"]);
    }
}
