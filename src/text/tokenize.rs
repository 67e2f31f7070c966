// Term extraction and TF-IDF vectors over the two-document corpus.
//
// The corpus is always exactly {resume, job description}. Each document gets
// its own term vector: term frequency (count / total terms) times a smoothed
// inverse document frequency:
//
//   idf(t) = ln((1 + N) / (1 + df(t))) + 1,   N = 2
//
// A term found in only one document gets idf ~1.405, a shared term gets 1.0,
// so unique terms always outweigh shared terms of equal frequency. The +1
// keeps shared terms non-zero, which is what lets a document compared with
// itself reach full similarity.

use std::collections::HashMap;

/// Number of documents in the scoring corpus (resume + job description).
const CORPUS_SIZE: f64 = 2.0;

/// Sparse TF-IDF weights keyed by lowercased term.
///
/// Keys are exactly the terms present in the originating document, and every
/// weight is non-negative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    weights: HashMap<String, f64>,
}

impl TermVector {
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    pub fn weights(&self) -> &HashMap<String, f64> {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Euclidean length of the vector.
    pub fn magnitude(&self) -> f64 {
        // Summed in term order so equal vectors give bit-identical lengths
        let mut terms: Vec<&str> = self.terms().collect();
        terms.sort_unstable();
        terms
            .into_iter()
            .map(|t| self.weight(t).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

/// Split text into lowercased terms: maximal runs of alphanumeric characters.
///
/// No stemming and no stop-word removal; every run counts.
pub fn terms(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the resume and job-description term vectors.
///
/// An empty document yields an empty vector, not an error.
pub fn build_term_vectors(resume: &str, job_description: &str) -> (TermVector, TermVector) {
    let resume_counts = term_counts(&terms(resume));
    let jd_counts = term_counts(&terms(job_description));

    let resume_vec = weigh(&resume_counts, &jd_counts);
    let jd_vec = weigh(&jd_counts, &resume_counts);

    (resume_vec, jd_vec)
}

fn term_counts(terms: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for term in terms {
        *counts.entry(term.clone()).or_insert(0) += 1;
    }
    counts
}

/// Weigh one document's counts against the other document in the corpus.
fn weigh(own: &HashMap<String, usize>, other: &HashMap<String, usize>) -> TermVector {
    let total: usize = own.values().sum();
    if total == 0 {
        return TermVector::default();
    }

    let weights = own
        .iter()
        .map(|(term, &count)| {
            // df >= 1 always: the term is present in `own`
            let df = if other.contains_key(term) { 2.0 } else { 1.0 };
            let tf = count as f64 / total as f64;
            (term.clone(), tf * idf(df))
        })
        .collect();

    TermVector { weights }
}

fn idf(df: f64) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + df)).ln() + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_split_on_punctuation() {
        assert_eq!(
            terms("Rust, Go & C++ (5 yrs)"),
            vec!["rust", "go", "c", "5", "yrs"]
        );
    }

    #[test]
    fn test_empty_document_gives_empty_vector() {
        let (resume, jd) = build_term_vectors("", "python developer");
        assert!(resume.is_empty());
        assert_eq!(jd.len(), 2);
    }

    #[test]
    fn test_unique_terms_outweigh_shared_terms() {
        // "rust" only in the resume, "backend" in both, same frequency
        let (resume, _) = build_term_vectors("rust backend", "backend role");
        assert!(resume.weight("rust") > resume.weight("backend"));
        assert!(resume.weight("backend") > 0.0);
    }

    #[test]
    fn test_vector_keys_match_document_terms() {
        let (resume, _) = build_term_vectors("Kafka kafka Postgres", "anything");
        let mut keys: Vec<&str> = resume.terms().collect();
        keys.sort();
        assert_eq!(keys, vec!["kafka", "postgres"]);
    }
}
