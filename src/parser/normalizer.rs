// file: src/parser/normalizer.rs
// description: Term normalization, stemming and query tokenizing
// reference: https://docs.rs/rust-stemmers

use crate::parser::patterns::QUERY_WORD;
use rust_stemmers::{Algorithm, Stemmer};

/// Words the html builder never indexes.
pub const STOPWORDS: &[&str] = &[
    "a", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "near", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there",
    "these", "they", "this", "to", "was", "will", "with",
];

/// One query word in the two spellings the index may hold it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWord {
    pub raw: String,
    pub stemmed: String,
}

/// A parsed search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTerms {
    /// Words every matching page must contain.
    pub required: Vec<QueryWord>,
    /// Words whose pages are dropped from the results.
    pub excluded: Vec<QueryWord>,
    /// Whitespace-separated chunks, lowercased, matched against object names.
    pub object_terms: Vec<String>,
}

impl QueryTerms {
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.object_terms.is_empty()
    }
}

pub struct TermNormalizer {
    stemmer: Option<Stemmer>,
}

impl TermNormalizer {
    pub fn new() -> Self {
        Self { stemmer: None }
    }

    pub fn with_stemming() -> Self {
        Self {
            stemmer: Some(Stemmer::create(Algorithm::English)),
        }
    }

    /// Lowercased, trimmed token, or `None` when nothing is left.
    pub fn normalize(&self, token: &str) -> Option<String> {
        let normalized = token.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(normalized)
        }
    }

    pub fn is_normalized(&self, token: &str) -> bool {
        self.normalize(token).as_deref() == Some(token)
    }

    pub fn stem(&self, word: &str) -> String {
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(word).to_string(),
            None => word.to_string(),
        }
    }

    pub fn is_stopword(word: &str) -> bool {
        STOPWORDS.contains(&word)
    }

    pub fn tokenize(&self, query: &str) -> QueryTerms {
        let mut terms = QueryTerms::default();

        for chunk in query.split_whitespace() {
            let (excluded, chunk) = match chunk.strip_prefix('-') {
                Some(rest) if !rest.is_empty() => (true, rest),
                _ => (false, chunk),
            };

            if !excluded
                && let Some(object_term) = self.normalize(chunk)
                && !terms.object_terms.contains(&object_term)
            {
                terms.object_terms.push(object_term);
            }

            for word in QUERY_WORD.find_iter(chunk) {
                let Some(raw) = self.normalize(word.as_str()) else {
                    continue;
                };
                if Self::is_stopword(&raw) {
                    continue;
                }

                let word = QueryWord {
                    stemmed: self.stem(&raw),
                    raw,
                };
                let target = if excluded {
                    &mut terms.excluded
                } else {
                    &mut terms.required
                };
                if !target.contains(&word) {
                    target.push(word);
                }
            }
        }

        terms
    }
}

impl Default for TermNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_words(words: &[QueryWord]) -> Vec<&str> {
        words.iter().map(|w| w.raw.as_str()).collect()
    }

    #[test]
    fn test_normalize() {
        let normalizer = TermNormalizer::new();
        assert_eq!(normalizer.normalize("  Keras "), Some("keras".to_string()));
        assert_eq!(normalizer.normalize("   "), None);
    }

    #[test]
    fn test_is_normalized() {
        let normalizer = TermNormalizer::new();
        assert!(normalizer.is_normalized("estim"));
        assert!(!normalizer.is_normalized("Estim"));
        assert!(!normalizer.is_normalized(""));
        assert!(!normalizer.is_normalized(" fit"));
    }

    #[test]
    fn test_stemming() {
        let normalizer = TermNormalizer::with_stemming();
        assert_eq!(normalizer.stem("history"), "histori");
        assert_eq!(normalizer.stem("wrappers"), "wrapper");

        let plain = TermNormalizer::new();
        assert_eq!(plain.stem("history"), "history");
    }

    #[test]
    fn test_tokenize_with_exclusion() {
        let normalizer = TermNormalizer::new();
        let terms = normalizer.tokenize("KerasClassifier fit -regressor fit");

        assert_eq!(raw_words(&terms.required), vec!["kerasclassifier", "fit"]);
        assert_eq!(raw_words(&terms.excluded), vec!["regressor"]);
        assert_eq!(terms.object_terms, vec!["kerasclassifier", "fit"]);
    }

    #[test]
    fn test_tokenize_dotted_path() {
        let normalizer = TermNormalizer::new();
        let terms = normalizer.tokenize("scikeras.wrappers");
        assert_eq!(raw_words(&terms.required), vec!["scikeras", "wrappers"]);
        assert_eq!(terms.object_terms, vec!["scikeras.wrappers"]);
    }

    #[test]
    fn test_stopwords_are_dropped() {
        let normalizer = TermNormalizer::new();
        let terms = normalizer.tokenize("the history of a model");
        assert_eq!(raw_words(&terms.required), vec!["history", "model"]);
    }

    #[test]
    fn test_lone_dash_is_not_exclusion() {
        let normalizer = TermNormalizer::new();
        let terms = normalizer.tokenize("- history");
        assert_eq!(raw_words(&terms.required), vec!["history"]);
        assert!(terms.excluded.is_empty());
    }
}
