// Unit tests for tokenization, TF-IDF vectors and keyword extraction.
//
// Tests isolated pure functions: terms() splitting, build_term_vectors
// weighting invariants, and KeywordExtractor ranking and filtering.

use resume_score::text::keywords::{KeywordExtractor, StopWordSet, BUILTIN_STOP_WORDS};
use resume_score::text::tokenize::{build_term_vectors, terms};

// ============================================================
// terms — splitting and normalization
// ============================================================

#[test]
fn terms_lowercases_and_splits_on_punctuation() {
    assert_eq!(
        terms("Led DevOps/SRE team; cut costs 30%."),
        vec!["led", "devops", "sre", "team", "cut", "costs", "30"]
    );
}

#[test]
fn terms_keeps_unicode_letters() {
    assert_eq!(terms("Café • Zürich"), vec!["café", "zürich"]);
}

#[test]
fn terms_of_blank_text_is_empty() {
    assert!(terms("  \n\t ").is_empty());
}

// ============================================================
// build_term_vectors — weighting invariants
// ============================================================

#[test]
fn vectors_are_non_negative() {
    let (resume, jd) = build_term_vectors("rust rust sql", "rust go");
    assert!(resume.weights().values().all(|&w| w >= 0.0));
    assert!(jd.weights().values().all(|&w| w >= 0.0));
}

#[test]
fn both_empty_documents_give_empty_vectors() {
    let (resume, jd) = build_term_vectors("", "");
    assert!(resume.is_empty());
    assert!(jd.is_empty());
    assert_eq!(resume.magnitude(), 0.0);
}

#[test]
fn repeated_term_weighs_more_than_single() {
    let (resume, _) = build_term_vectors("kafka kafka kafka redis", "nothing shared");
    assert!(resume.weight("kafka") > resume.weight("redis"));
}

#[test]
fn missing_term_has_zero_weight() {
    let (resume, _) = build_term_vectors("rust", "go");
    assert_eq!(resume.weight("go"), 0.0);
}

// ============================================================
// KeywordExtractor — ranking and filtering
// ============================================================

#[test]
fn keywords_are_deterministic() {
    let extractor = KeywordExtractor::default();
    let text = "cloud native cloud platform native cloud tooling platform";
    assert_eq!(extractor.extract(text, 10), extractor.extract(text, 10));
    assert_eq!(
        extractor.extract(text, 10),
        vec!["cloud", "native", "platform", "tooling"]
    );
}

#[test]
fn keywords_skip_every_builtin_stop_word() {
    let extractor = KeywordExtractor::default();
    let text = BUILTIN_STOP_WORDS.join(" ");
    assert!(extractor.extract(&text, 100).is_empty());
}

#[test]
fn keywords_are_lowercase() {
    let extractor = KeywordExtractor::default();
    assert_eq!(extractor.extract("Kubernetes KUBERNETES", 5), vec!["kubernetes"]);
}

#[test]
fn keywords_zero_top_n_is_empty() {
    let extractor = KeywordExtractor::default();
    assert!(extractor.extract("python django flask", 0).is_empty());
}

#[test]
fn extended_stop_words_keep_domain_terms() {
    let builtin = KeywordExtractor::new(StopWordSet::Builtin);
    let extended = KeywordExtractor::new(StopWordSet::Extended);
    let text = "python python python";
    assert_eq!(builtin.extract(text, 5), extended.extract(text, 5));
}
