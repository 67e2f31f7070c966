// Sub-scores and the aggregate report.
//
// Every sub-score lives on a 0-100 scale. The report module combines them
// with the keyword match into the single ScoreReport callers see.

pub mod completeness;
pub mod formatting;
pub mod readability;
pub mod report;
pub mod similarity;

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
