// resume-score: resume-to-job-description scoring engine
//
// This is the library root. Each module corresponds to a stage of the
// scoring pipeline; `scoring::report` ties them together.

pub mod config;
pub mod grammar;
pub mod output;
pub mod scoring;
pub mod text;

pub use grammar::{Issue, IssueKind, Severity};
pub use scoring::report::{score_resume, ResumeScorer, ScoreReport};
