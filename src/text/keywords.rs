// Frequency-ranked keyword extraction.
//
// Keywords are lowercased alphanumeric tokens of at least four characters,
// with no digits, that are not stop words. They are ranked by how often they
// occur; ties keep first-occurrence order so the ranking is reproducible.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use anyhow::Result;
use stop_words::{get, LANGUAGE};

/// Shortest token that can be a keyword.
pub const MIN_KEYWORD_CHARS: usize = 4;

/// Function words that never count as keywords.
///
/// Articles, conjunctions, pronouns, prepositions and auxiliary verbs. Only
/// words of four or more characters matter here, since shorter tokens are
/// dropped before the stop-word check. Kept as a fixed table so results are
/// stable across releases of any external list.
pub const BUILTIN_STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "also", "although", "among", "because",
    "been", "before", "being", "below", "between", "both", "could", "does", "doing", "done",
    "down", "during", "each", "either", "else", "even", "ever", "every", "from", "further",
    "have", "having", "here", "hers", "herself", "himself", "into", "itself", "just",
    "like", "many", "might", "more", "most", "much", "must", "myself", "neither", "once",
    "only", "other", "ours", "ourselves", "over", "same", "shall", "should", "since", "some",
    "such", "than", "that", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "thus", "under", "until", "upon", "very",
    "were", "what", "whatever", "when", "where", "whether", "which", "while", "whom", "whose",
    "will", "with", "within", "without", "would", "your", "yours", "yourself", "yourselves",
];

/// Which stop-word list the extractor filters with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopWordSet {
    /// `BUILTIN_STOP_WORDS` only.
    #[default]
    Builtin,
    /// The builtin table plus the `stop-words` crate's English list.
    Extended,
}

impl FromStr for StopWordSet {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "builtin" => Ok(StopWordSet::Builtin),
            "extended" => Ok(StopWordSet::Extended),
            other => anyhow::bail!("Unknown stop-word set '{other}' (expected builtin or extended)"),
        }
    }
}

/// Ranks the significant terms of a document by frequency.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: HashSet<String>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(StopWordSet::Builtin)
    }
}

impl KeywordExtractor {
    pub fn new(set: StopWordSet) -> Self {
        let mut stop_words: HashSet<String> =
            BUILTIN_STOP_WORDS.iter().map(|w| w.to_string()).collect();

        if set == StopWordSet::Extended {
            let english: Vec<String> = get(LANGUAGE::English);
            stop_words.extend(english.into_iter().map(|w| w.to_lowercase()));
        }

        Self { stop_words }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Extract up to `top_n` keywords, most frequent first.
    pub fn extract(&self, text: &str, top_n: usize) -> Vec<String> {
        // (term, count) in first-occurrence order
        let mut ranked: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for token in text.to_lowercase().split(|c: char| !c.is_alphanumeric()) {
            if !self.is_candidate(token) {
                continue;
            }
            match index.get(token) {
                Some(&i) => ranked[i].1 += 1,
                None => {
                    index.insert(token.to_string(), ranked.len());
                    ranked.push((token.to_string(), 1));
                }
            }
        }

        // Stable sort: equal counts stay in first-occurrence order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked.into_iter().take(top_n).map(|(term, _)| term).collect()
    }

    fn is_candidate(&self, token: &str) -> bool {
        token.chars().count() >= MIN_KEYWORD_CHARS
            && !token.chars().any(|c| c.is_numeric())
            && !self.stop_words.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_by_frequency() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("python rust python docker python rust", 10);
        assert_eq!(keywords, vec!["python", "rust", "docker"]);
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("zebra apple mango apple zebra mango", 10);
        assert_eq!(keywords, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_filters_short_digits_and_stop_words() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("The API uses k8s with their python3 tooling", 10);
        assert_eq!(keywords, vec!["uses", "tooling"]);
    }

    #[test]
    fn test_top_n_truncates() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("alpha bravo charlie delta", 2);
        assert_eq!(keywords, vec!["alpha", "bravo"]);
    }

    #[test]
    fn test_extended_set_is_superset() {
        let builtin = KeywordExtractor::new(StopWordSet::Builtin);
        let extended = KeywordExtractor::new(StopWordSet::Extended);
        for word in BUILTIN_STOP_WORDS {
            assert!(builtin.is_stop_word(word));
            assert!(extended.is_stop_word(word));
        }
    }

    #[test]
    fn test_parse_stop_word_set() {
        assert_eq!("Extended".parse::<StopWordSet>().unwrap(), StopWordSet::Extended);
        assert_eq!("builtin".parse::<StopWordSet>().unwrap(), StopWordSet::Builtin);
        assert!("klingon".parse::<StopWordSet>().is_err());
    }
}
