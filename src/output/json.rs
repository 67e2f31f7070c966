// JSON envelopes for handing reports to storage or other tools.

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::grammar::GrammarReport;
use crate::scoring::report::ScoreReport;

/// A score report tagged with when and what was scored.
#[derive(Debug, Serialize)]
pub struct ScoreEnvelope<'a> {
    /// RFC 3339 timestamp (UTC)
    pub scored_at: String,
    /// Source of the resume text, e.g. a file path
    pub resume: &'a str,
    /// Source of the job description text
    pub job_description: &'a str,
    pub report: &'a ScoreReport,
}

/// A standalone grammar report tagged with its source.
#[derive(Debug, Serialize)]
pub struct LintEnvelope<'a> {
    pub scored_at: String,
    pub source: &'a str,
    pub report: &'a GrammarReport,
}

pub fn score_json(resume: &str, job_description: &str, report: &ScoreReport) -> Result<String> {
    let envelope = ScoreEnvelope {
        scored_at: timestamp(),
        resume,
        job_description,
        report,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

pub fn lint_json(source: &str, report: &GrammarReport) -> Result<String> {
    let envelope = LintEnvelope {
        scored_at: timestamp(),
        source,
        report,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
