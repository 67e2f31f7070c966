use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::warn;

use crate::scoring::report::{KeywordLimits, ResumeScorer, ScoreWeights};
use crate::text::keywords::{KeywordExtractor, StopWordSet};

/// Central configuration loaded from environment variables.
///
/// Every setting has a default, so an empty environment gives the standard
/// scoring formula. The .env file is loaded at startup via dotenvy.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Weights for the total score (RESUME_SCORE_WEIGHT_* env vars)
    pub weights: ScoreWeights,
    /// Keywords extracted per document (RESUME_SCORE_JD_KEYWORDS / RESUME_SCORE_RESUME_KEYWORDS)
    pub keyword_limits: KeywordLimits,
    /// Stop-word list for keyword extraction (RESUME_SCORE_STOP_WORDS)
    pub stop_words: StopWordSet,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails on values that don't parse, negative weights or zero keyword
    /// limits.
    pub fn load() -> Result<Self> {
        let defaults = ScoreWeights::default();
        let weights = ScoreWeights {
            similarity: weight_var("RESUME_SCORE_WEIGHT_SIMILARITY", defaults.similarity)?,
            readability: weight_var("RESUME_SCORE_WEIGHT_READABILITY", defaults.readability)?,
            completeness: weight_var("RESUME_SCORE_WEIGHT_COMPLETENESS", defaults.completeness)?,
            formatting: weight_var("RESUME_SCORE_WEIGHT_FORMATTING", defaults.formatting)?,
            grammar: weight_var("RESUME_SCORE_WEIGHT_GRAMMAR", defaults.grammar)?,
        };

        let sum = weights.sum();
        if (sum - 1.0).abs() > 0.001 {
            warn!(sum, "Score weights do not sum to 1.0; totals will be clamped to 0-100");
        }

        let limit_defaults = KeywordLimits::default();
        let keyword_limits = KeywordLimits {
            job_description: limit_var("RESUME_SCORE_JD_KEYWORDS", limit_defaults.job_description)?,
            resume: limit_var("RESUME_SCORE_RESUME_KEYWORDS", limit_defaults.resume)?,
        };

        let stop_words = parse_var("RESUME_SCORE_STOP_WORDS", StopWordSet::Builtin)?;

        Ok(Self {
            weights,
            keyword_limits,
            stop_words,
        })
    }

    /// Build a scorer from this configuration.
    pub fn scorer(&self) -> ResumeScorer {
        ResumeScorer::new(
            self.weights,
            self.keyword_limits,
            KeywordExtractor::new(self.stop_words),
        )
    }
}

/// Parse an env var, falling back to `default` when it is unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    resolve_var(name, env::var(name), default)
}

fn resolve_var<T>(name: &str, value: Result<String, env::VarError>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Ok(raw) => parse_value(name, &raw),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e @ env::VarError::NotUnicode(_)) => {
            Err(anyhow::Error::new(e).context(format!("{name} is set but unreadable")))
        }
    }
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("{name} has an invalid value: {raw:?}"))
}

fn weight_var(name: &str, default: f64) -> Result<f64> {
    let weight = parse_var(name, default)?;
    check_weight(name, weight)
}

fn check_weight(name: &str, weight: f64) -> Result<f64> {
    if !weight.is_finite() || weight < 0.0 {
        anyhow::bail!("{name} must be a non-negative number, got {weight}");
    }
    Ok(weight)
}

fn limit_var(name: &str, default: usize) -> Result<usize> {
    let limit = parse_var(name, default)?;
    check_limit(name, limit)
}

fn check_limit(name: &str, limit: usize) -> Result<usize> {
    if limit == 0 {
        anyhow::bail!("{name} must be a positive integer, got 0");
    }
    Ok(limit)
}
