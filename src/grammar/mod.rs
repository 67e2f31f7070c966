// Rule-based grammar and style analysis.

pub mod analyzer;
pub mod issue;
pub mod rules;

pub use analyzer::{analyze, GrammarReport};
pub use issue::{Issue, IssueKind, Severity};
