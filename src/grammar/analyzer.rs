// Line-by-line grammar and style scanner.
//
// Each non-blank line is checked in order for:
//   1. a missing leading capital (unless the line is a bullet)
//   2. every match of every pattern rule
//   3. words of 4+ characters used more than twice on the same line
// After the scan, a document with no standalone section heading gets one
// formatting issue.
//
// Scoring and display are tracked separately: every detected issue deducts
// from the score (high 3, medium 2, low 1), but only the first 15 are kept for
// the returned list.

use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::issue::{Issue, IssueKind, Severity};
use super::rules::{RuleSet, RuleSpec, RULES};
use crate::scoring::formatting::BULLET_GLYPHS;
use crate::scoring::round2;

/// Most issues returned to the caller.
pub const MAX_ISSUES: usize = 15;

/// Characters of the offending line kept as context.
pub const CONTEXT_CHARS: usize = 60;

/// Score reported when the analyzer itself fails.
pub const FALLBACK_SCORE: f64 = 85.0;

/// Deduction for a document without any standalone section heading.
pub const MISSING_HEADING_PENALTY: u32 = 2;

/// Headings that count as a standalone section heading, any case.
pub const SECTION_HEADINGS: &[&str] = &[
    "EDUCATION",
    "EXPERIENCE",
    "SKILLS",
    "PROJECTS",
    "CERTIFICATIONS",
    "SUMMARY",
];

/// Words must be longer than this to be checked for repetition.
const REPEAT_MIN_LEN: usize = 3;
/// Occurrences on one line beyond which a word is flagged.
const REPEAT_LIMIT: usize = 2;

/// Result of a grammar/style analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarReport {
    /// 0-100, two decimals
    pub score: f64,
    /// First issues in detection order, at most `MAX_ISSUES`
    pub issues: Vec<Issue>,
}

impl GrammarReport {
    /// The report used when analysis fails.
    pub fn fallback(error: &anyhow::Error) -> Self {
        Self {
            score: FALLBACK_SCORE,
            issues: vec![Issue {
                message: format!("Grammar analysis could not be completed: {error}"),
                kind: IssueKind::System,
                severity: Severity::Low,
                context: String::new(),
                location: "Document".to_string(),
                example: String::new(),
            }],
        }
    }
}

/// Running totals for one analysis: all deductions, plus the capped list.
#[derive(Debug, Default)]
struct IssueTally {
    deductions: u32,
    detected: usize,
    issues: Vec<Issue>,
}

impl IssueTally {
    fn record(&mut self, issue: Issue) {
        let penalty = issue.severity.penalty();
        self.record_with_penalty(issue, penalty);
    }

    fn record_with_penalty(&mut self, issue: Issue, penalty: u32) {
        self.deductions += penalty;
        self.detected += 1;
        if self.issues.len() < MAX_ISSUES {
            self.issues.push(issue);
        }
    }

    fn finish(self) -> GrammarReport {
        let score = (100.0 - self.deductions as f64).max(0.0);
        debug!(
            detected = self.detected,
            returned = self.issues.len(),
            deductions = self.deductions,
            "Grammar analysis complete"
        );
        GrammarReport {
            score: round2(score),
            issues: self.issues,
        }
    }
}

/// Analyze with the builtin rule table. Never fails.
pub fn analyze(text: &str) -> GrammarReport {
    analyze_with_rules(text, RULES)
}

/// Analyze with a caller-supplied rule table, falling back on any error.
pub fn analyze_with_rules(text: &str, rules: &[RuleSpec]) -> GrammarReport {
    match try_analyze(text, rules) {
        Ok(report) => report,
        Err(e) => {
            warn!(error = %e, "Grammar analysis failed, using fallback report");
            GrammarReport::fallback(&e)
        }
    }
}

/// Run the full scan, surfacing internal failures to the caller.
pub fn try_analyze(text: &str, rules: &[RuleSpec]) -> Result<GrammarReport> {
    let rules = RuleSet::compile(rules)?;
    let mut tally = IssueTally::default();

    let lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    for (i, line) in lines.enumerate() {
        let location = format!("Line {}", i + 1);
        let context = prefix_chars(line, CONTEXT_CHARS);

        check_capitalization(line, &context, &location, &mut tally);
        check_patterns(line, &rules, &context, &location, &mut tally);
        check_repetition(line, &context, &location, &mut tally);
    }

    if !has_section_heading(text) {
        tally.record_with_penalty(
            Issue {
                message: "No standard section headings found (e.g. EXPERIENCE, EDUCATION, SKILLS)"
                    .to_string(),
                kind: IssueKind::Formatting,
                severity: Severity::Medium,
                context: String::new(),
                location: "Document".to_string(),
                example: "EXPERIENCE:".to_string(),
            },
            MISSING_HEADING_PENALTY,
        );
    }

    Ok(tally.finish())
}

fn check_capitalization(line: &str, context: &str, location: &str, tally: &mut IssueTally) {
    let Some(first) = line.chars().next() else {
        return;
    };
    if BULLET_GLYPHS.contains(&first) || first.is_uppercase() {
        return;
    }
    tally.record(Issue {
        message: "Line should start with a capital letter".to_string(),
        kind: IssueKind::Punctuation,
        severity: Severity::Medium,
        context: context.to_string(),
        location: location.to_string(),
        example: line.split_whitespace().next().unwrap_or_default().to_string(),
    });
}

fn check_patterns(
    line: &str,
    rules: &RuleSet,
    context: &str,
    location: &str,
    tally: &mut IssueTally,
) {
    for rule in rules.iter() {
        for found in rule.regex.find_iter(line) {
            tally.record(Issue {
                message: rule.spec.message.to_string(),
                kind: rule.spec.kind,
                severity: rule.spec.severity,
                context: context.to_string(),
                location: location.to_string(),
                example: found.as_str().to_string(),
            });
        }
    }
}

fn check_repetition(line: &str, context: &str, location: &str, tally: &mut IssueTally) {
    // (word, count) in first-occurrence order
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for raw in line.split_whitespace() {
        let word: String = raw
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_')
            .flat_map(char::to_lowercase)
            .collect();
        if word.chars().count() <= REPEAT_MIN_LEN {
            continue;
        }
        match index.get(&word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push((word, 1));
            }
        }
    }

    for (word, count) in counts {
        if count > REPEAT_LIMIT {
            tally.record(Issue {
                message: format!("Word '{word}' is repeated {count} times on one line"),
                kind: IssueKind::Style,
                severity: Severity::Low,
                context: context.to_string(),
                location: location.to_string(),
                example: word,
            });
        }
    }
}

/// Whether any line is a bare section heading, optionally ending in a colon.
pub fn has_section_heading(text: &str) -> bool {
    text.lines().any(|line| {
        let line = line.trim();
        let heading = line.strip_suffix(':').unwrap_or(line).trim_end();
        SECTION_HEADINGS
            .iter()
            .any(|h| heading.eq_ignore_ascii_case(h))
    })
}

/// The first `max_chars` characters of `text`.
fn prefix_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN: &str = "EXPERIENCE:\nBuilt the billing service in Rust.";

    #[test]
    fn test_clean_text_scores_full() {
        let report = analyze(CLEAN);
        assert_eq!(report.score, 100.0, "issues: {:?}", report.issues);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_empty_text_only_misses_heading() {
        let report = analyze("");
        assert_eq!(report.score, 98.0);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::Formatting);
        assert_eq!(report.issues[0].severity, Severity::Medium);
    }

    #[test]
    fn test_lowercase_line_flagged_with_location() {
        let report = analyze("SKILLS\n\nrust and go");
        assert_eq!(report.issues.len(), 1);
        let issue = &report.issues[0];
        assert_eq!(issue.kind, IssueKind::Punctuation);
        assert_eq!(issue.location, "Line 2");
        assert_eq!(issue.context, "rust and go");
        assert_eq!(issue.example, "rust");
    }

    #[test]
    fn test_bullet_lines_skip_capital_check() {
        let report = analyze("SKILLS\n- rust and go\n• python");
        assert!(report.issues.is_empty(), "issues: {:?}", report.issues);
    }

    #[test]
    fn test_context_truncated_to_sixty_chars() {
        let line = format!("lowercase start {}", "x".repeat(100));
        let report = analyze(&format!("SKILLS\n{line}"));
        assert_eq!(report.issues[0].context.chars().count(), CONTEXT_CHARS);
    }

    #[test]
    fn test_i_is_is_high_severity() {
        let report = analyze("SKILLS\nI is a leader.");
        let issue = report
            .issues
            .iter()
            .find(|i| i.severity == Severity::High)
            .unwrap();
        assert_eq!(issue.example, "I is");
        assert_eq!(report.score, 97.0);
    }

    #[test]
    fn test_repetition_flagged_once_per_word() {
        let report = analyze("SKILLS\nData data, DATA and more data.");
        let repeats: Vec<_> = report
            .issues
            .iter()
            .filter(|i| i.message.contains("repeated"))
            .collect();
        assert_eq!(repeats.len(), 1);
        assert_eq!(repeats[0].example, "data");
    }

    #[test]
    fn test_score_counts_issues_beyond_the_cap() {
        // 20 lowercase lines: 20 medium issues, plus the missing heading
        let text = vec!["lowercase line"; 20].join("\n");
        let report = analyze(&text);
        assert_eq!(report.issues.len(), MAX_ISSUES);
        assert_eq!(report.score, 100.0 - 20.0 * 2.0 - 2.0);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let text = vec!["i is really very quickly bad"; 40].join("\n");
        assert_eq!(analyze(&text).score, 0.0);
    }

    #[test]
    fn test_heading_detection() {
        assert!(has_section_heading("Summary\nStuff"));
        assert!(has_section_heading("  EXPERIENCE:  "));
        assert!(!has_section_heading("Work experience at Acme"));
        assert!(!has_section_heading(""));
    }

    #[test]
    fn test_bad_rule_falls_back() {
        let bad = [RuleSpec {
            pattern: r"[unclosed",
            message: "broken",
            kind: IssueKind::Style,
            severity: Severity::Low,
        }];
        assert!(try_analyze(CLEAN, &bad).is_err());

        let report = analyze_with_rules(CLEAN, &bad);
        assert_eq!(report.score, FALLBACK_SCORE);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::System);
        assert_eq!(report.issues[0].severity, Severity::Low);
    }
}
