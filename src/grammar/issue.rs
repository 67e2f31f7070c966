// Writing issues reported by the grammar/style analyzer.

use serde::{Deserialize, Serialize};

/// Category of a writing issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Grammar,
    Punctuation,
    Style,
    Formatting,
    /// The analyzer itself failed; the report is a fallback.
    System,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Grammar => "grammar",
            IssueKind::Punctuation => "punctuation",
            IssueKind::Style => "style",
            IssueKind::Formatting => "formatting",
            IssueKind::System => "system",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Points deducted from the grammar score for one issue.
    pub fn penalty(&self) -> u32 {
        match self {
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single detected writing issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub severity: Severity,
    /// Start of the offending line, at most 60 characters
    pub context: String,
    /// Human-readable position, e.g. "Line 4"
    pub location: String,
    /// The text that triggered the issue
    pub example: String,
}
