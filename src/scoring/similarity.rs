// Cosine similarity between the resume and job description term vectors.
//
// The vectors are compared over the union of their terms, with a missing
// term counting as zero weight. A blank document has no direction to compare,
// so the raw cosine is an error; the scoring boundary turns that into 0.0.

use anyhow::Result;
use tracing::debug;

use super::round2;
use crate::text::tokenize::TermVector;

/// Magnitudes below this are treated as zero-length vectors.
const MIN_MAGNITUDE: f64 = f64::EPSILON;

/// Raw cosine similarity in [0.0, 1.0].
///
/// Fails when either vector has zero magnitude. Negative values cannot occur
/// for TF-IDF weights but are clamped to 0.0 regardless.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> Result<f64> {
    // Sorted so the sums, and therefore the rounded score, are reproducible
    let mut union: Vec<&str> = a.terms().chain(b.terms()).collect();
    union.sort_unstable();
    union.dedup();

    let dot: f64 = union
        .into_iter()
        .map(|term| a.weight(term) * b.weight(term))
        .sum();

    let denominator = a.magnitude() * b.magnitude();
    if denominator < MIN_MAGNITUDE {
        anyhow::bail!(
            "Cannot compare a zero-magnitude term vector ({} vs {} terms)",
            a.len(),
            b.len()
        );
    }

    Ok((dot / denominator).clamp(0.0, 1.0))
}

/// Similarity sub-score on a 0-100 scale, rounded to two decimals.
///
/// Never fails: any error from the cosine computation yields 0.0.
pub fn similarity_score(resume: &TermVector, job_description: &TermVector) -> f64 {
    match cosine_similarity(resume, job_description) {
        Ok(cosine) => round2(cosine * 100.0),
        Err(e) => {
            debug!(error = %e, "Similarity fell back to 0.0");
            0.0
        }
    }
}
