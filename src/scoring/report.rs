// Aggregate scoring — combines every sub-score into one ScoreReport.
//
// The total is a weighted sum of the five sub-scores, rounded to two decimals
// and capped at 100:
//
//   total = similarity*0.35 + readability*0.15 + completeness*0.15
//         + formatting*0.10 + grammar*0.25
//
// Keyword coverage is reported alongside but does not feed the total.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::completeness::completeness_score;
use super::formatting::formatting_score;
use super::readability::readability_score;
use super::round2;
use super::similarity::similarity_score;
use crate::grammar::{analyze, Issue};
use crate::text::keywords::KeywordExtractor;
use crate::text::tokenize::build_term_vectors;

/// Most matched keywords kept in the report.
pub const MAX_MATCHED_KEYWORDS: usize = 20;
/// Most missing keywords kept in the report.
pub const MAX_MISSING_KEYWORDS: usize = 15;

/// Weights for the total score formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub similarity: f64,
    pub readability: f64,
    pub completeness: f64,
    pub formatting: f64,
    pub grammar: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            similarity: 0.35,
            readability: 0.15,
            completeness: 0.15,
            formatting: 0.10,
            grammar: 0.25,
        }
    }
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.similarity + self.readability + self.completeness + self.formatting + self.grammar
    }
}

/// How many keywords are extracted from each document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordLimits {
    pub job_description: usize,
    pub resume: usize,
}

impl Default for KeywordLimits {
    fn default() -> Self {
        Self {
            job_description: 30,
            resume: 50,
        }
    }
}

/// The five sub-scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub similarity: f64,
    pub readability: f64,
    pub completeness: f64,
    pub formatting: f64,
    pub grammar: f64,
}

/// Combine the sub-scores into the total, rounded to two decimals, in [0, 100].
pub fn compute_total(scores: &SubScores, weights: &ScoreWeights) -> f64 {
    let total = scores.similarity * weights.similarity
        + scores.readability * weights.readability
        + scores.completeness * weights.completeness
        + scores.formatting * weights.formatting
        + scores.grammar * weights.grammar;
    round2(total).clamp(0.0, 100.0)
}

/// Job-description keywords split into those the resume covers and those it lacks.
///
/// Both lists keep the job description's frequency order and are complete;
/// display truncation happens in the report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordMatch {
    /// Classify each JD keyword. A keyword is matched when it is one of the
    /// resume's keywords, or appears anywhere in the resume text
    /// (case-insensitive), which catches words used too rarely to rank.
    pub fn classify(jd_keywords: &[String], resume_keywords: &[String], resume_text: &str) -> Self {
        let resume_set: HashSet<&str> = resume_keywords.iter().map(String::as_str).collect();
        let resume_lower = resume_text.to_lowercase();

        let (matched, missing): (Vec<String>, Vec<String>) = jd_keywords
            .iter()
            .cloned()
            .partition(|kw| resume_set.contains(kw.as_str()) || resume_lower.contains(kw.as_str()));

        Self { matched, missing }
    }

    /// Percentage of JD keywords matched, rounded to a whole number.
    /// Zero when the job description has no keywords.
    pub fn percentage(&self) -> f64 {
        let total = (self.matched.len() + self.missing.len()).max(1);
        (self.matched.len() as f64 / total as f64 * 100.0).round()
    }
}

/// Overall quality band, used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreGrade {
    Weak,
    Fair,
    Strong,
}

impl ScoreGrade {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => ScoreGrade::Strong,
            s if s >= 60.0 => ScoreGrade::Fair,
            _ => ScoreGrade::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreGrade::Weak => "Weak",
            ScoreGrade::Fair => "Fair",
            ScoreGrade::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for ScoreGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The complete scoring result for one resume / job description pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub total: f64,
    pub similarity: f64,
    pub readability: f64,
    pub completeness: f64,
    pub formatting: f64,
    pub grammar_score: f64,
    pub grammar_issues: Vec<Issue>,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub keyword_match_percentage: f64,
}

impl ScoreReport {
    /// Assemble the report from already-computed parts.
    pub fn assemble(
        scores: SubScores,
        weights: &ScoreWeights,
        grammar_issues: Vec<Issue>,
        keywords: &KeywordMatch,
    ) -> Self {
        Self {
            total: compute_total(&scores, weights),
            similarity: scores.similarity,
            readability: scores.readability,
            completeness: scores.completeness,
            formatting: scores.formatting,
            grammar_score: scores.grammar,
            grammar_issues,
            matched_keywords: keywords
                .matched
                .iter()
                .take(MAX_MATCHED_KEYWORDS)
                .cloned()
                .collect(),
            missing_keywords: keywords
                .missing
                .iter()
                .take(MAX_MISSING_KEYWORDS)
                .cloned()
                .collect(),
            keyword_match_percentage: keywords.percentage(),
        }
    }

    pub fn grade(&self) -> ScoreGrade {
        ScoreGrade::from_score(self.total)
    }
}

/// Scores resumes against job descriptions.
///
/// Holds no per-call state, so one scorer can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct ResumeScorer {
    pub weights: ScoreWeights,
    pub limits: KeywordLimits,
    pub extractor: KeywordExtractor,
}

impl ResumeScorer {
    pub fn new(weights: ScoreWeights, limits: KeywordLimits, extractor: KeywordExtractor) -> Self {
        Self {
            weights,
            limits,
            extractor,
        }
    }

    /// Score a resume against a job description. Always produces a report;
    /// empty or malformed text simply scores low.
    pub fn score(&self, resume: &str, job_description: &str) -> ScoreReport {
        let (resume_vec, jd_vec) = build_term_vectors(resume, job_description);
        let grammar = analyze(resume);

        let scores = SubScores {
            similarity: similarity_score(&resume_vec, &jd_vec),
            readability: readability_score(resume),
            completeness: completeness_score(resume),
            formatting: formatting_score(resume),
            grammar: grammar.score,
        };

        let keywords = self.match_keywords(resume, job_description);
        let report = ScoreReport::assemble(scores, &self.weights, grammar.issues, &keywords);

        info!(
            total = report.total,
            similarity = report.similarity,
            readability = report.readability,
            completeness = report.completeness,
            formatting = report.formatting,
            grammar = report.grammar_score,
            keyword_match = report.keyword_match_percentage,
            "Scored resume"
        );

        report
    }

    /// Extract keywords from both documents and classify the JD's keywords.
    pub fn match_keywords(&self, resume: &str, job_description: &str) -> KeywordMatch {
        let jd_keywords = self
            .extractor
            .extract(job_description, self.limits.job_description);
        let resume_keywords = self.extractor.extract(resume, self.limits.resume);
        KeywordMatch::classify(&jd_keywords, &resume_keywords, resume)
    }
}

/// Score with the default weights, limits and stop words.
pub fn score_resume(resume: &str, job_description: &str) -> ScoreReport {
    ResumeScorer::default().score(resume, job_description)
}
