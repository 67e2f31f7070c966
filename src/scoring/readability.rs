// Readability heuristic based on sentence length.
//
// Sentences near 18 words read best. The score drops 3 points per word of
// deviation from that ideal (floored at 30), and a resume where more than 30%
// of sentences run past 25 words loses another 15 points.

/// Neutral score for text with no sentences.
pub const NEUTRAL_SCORE: f64 = 50.0;

const IDEAL_SENTENCE_WORDS: f64 = 18.0;
const DEVIATION_PENALTY: f64 = 3.0;
const MIN_SCORE: f64 = 30.0;
const LONG_SENTENCE_WORDS: usize = 25;
const LONG_SENTENCE_RATIO: f64 = 0.30;
const LONG_SENTENCE_PENALTY: f64 = 15.0;

/// Split on `.`, `!` and `?`, dropping fragments that are blank.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Readability sub-score, a whole number in [15, 100].
pub fn readability_score(text: &str) -> f64 {
    let sentences = sentences(text);
    if sentences.is_empty() {
        return NEUTRAL_SCORE;
    }

    let word_count = text.split_whitespace().count();
    let avg_words = word_count as f64 / sentences.len() as f64;

    let mut score = (100.0 - (avg_words - IDEAL_SENTENCE_WORDS).abs() * DEVIATION_PENALTY)
        .clamp(MIN_SCORE, 100.0);

    let long = sentences
        .iter()
        .filter(|s| s.split_whitespace().count() > LONG_SENTENCE_WORDS)
        .count();
    if long as f64 / sentences.len() as f64 > LONG_SENTENCE_RATIO {
        score -= LONG_SENTENCE_PENALTY;
    }

    score.round()
}
