// file: src/query/searcher.rs
// description: object and full-text search over a loaded index
// reference: behaves like the html builder's client-side search widget

use crate::config::{ScoreWeights, SearchConfig};
use crate::index::{PostingMap, SearchIndex};
use crate::models::{HitKind, ObjectEntry, ObjectPriority, SearchHit};
use crate::parser::{QueryTerms, QueryWord, TermNormalizer};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

pub struct Searcher<'a> {
    index: &'a SearchIndex,
    normalizer: TermNormalizer,
    weights: ScoreWeights,
    min_partial_len: usize,
}

impl<'a> Searcher<'a> {
    pub fn new(index: &'a SearchIndex, config: &SearchConfig) -> Self {
        let normalizer = if config.stem {
            TermNormalizer::with_stemming()
        } else {
            TermNormalizer::new()
        };

        Self {
            index,
            normalizer,
            weights: config.scores.clone(),
            min_partial_len: config.min_partial_len,
        }
    }

    /// Object hits and page hits merged, best first. Queries matching nothing
    /// return an empty list.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let terms = self.normalizer.tokenize(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let mut hits = self.search_objects(&terms);
        hits.extend(self.search_terms(&terms));

        let mut best: HashMap<(String, String), SearchHit> = HashMap::new();
        for hit in hits {
            let key = (hit.docname.clone(), hit.anchor.clone());
            if best.get(&key).is_none_or(|existing| existing.score < hit.score) {
                best.insert(key, hit);
            }
        }

        let mut results: Vec<SearchHit> = best.into_values().collect();
        results.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
                .then_with(|| a.docname.cmp(&b.docname))
                .then_with(|| a.anchor.cmp(&b.anchor))
        });
        results.truncate(limit);

        debug!("Query {:?} produced {} hits", query, results.len());
        results
    }

    pub fn search_objects(&self, terms: &QueryTerms) -> Vec<SearchHit> {
        let mut hits: BTreeMap<String, SearchHit> = BTreeMap::new();

        for entry in self.index.objects() {
            let Some(hit) = self.score_object(&entry, terms) else {
                continue;
            };
            let fullname = entry.fullname();
            if hits.get(&fullname).is_none_or(|existing| existing.score < hit.score) {
                hits.insert(fullname, hit);
            }
        }

        hits.into_values().collect()
    }

    fn score_object(&self, entry: &ObjectEntry, terms: &QueryTerms) -> Option<SearchHit> {
        let priority = entry.priority();
        if priority == ObjectPriority::Hidden {
            return None;
        }

        let document = self.index.document(entry.doc)?;
        let kind = self.index.object_kind(entry.kind_code);
        let fullname = entry.fullname();
        let fullname_lower = fullname.to_lowercase();
        let last_part = fullname_lower.rsplit('.').next().unwrap_or_default();
        let haystack = format!(
            "{} {} {}",
            fullname_lower,
            document.title.to_lowercase(),
            kind.as_ref().map(|k| k.label.to_lowercase()).unwrap_or_default()
        );

        let mut best: Option<i32> = None;
        for (i, object_term) in terms.object_terms.iter().enumerate() {
            if !fullname_lower.contains(object_term.as_str()) {
                continue;
            }

            let others_present = terms
                .object_terms
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .all(|(_, other)| haystack.contains(other.as_str()));
            if !others_present {
                continue;
            }

            let mut score = 0;
            if fullname_lower == *object_term || last_part == object_term.as_str() {
                score += self.weights.object_name_match;
            } else if last_part.contains(object_term.as_str()) {
                score += self.weights.object_partial_match;
            }
            best = best.max(Some(score));
        }

        let excluded = terms
            .excluded
            .iter()
            .any(|word| haystack.contains(word.raw.as_str()));
        if excluded {
            return None;
        }

        let score = best? + self.priority_score(priority);

        Some(SearchHit {
            doc: document.index,
            docname: document.docname,
            anchor: entry.resolve_anchor(kind.as_ref()),
            description: kind.map(|k| k.label),
            title: fullname,
            kind: HitKind::Object,
            score,
        })
    }

    fn priority_score(&self, priority: ObjectPriority) -> i32 {
        match priority {
            ObjectPriority::Important => self.weights.priority_important,
            ObjectPriority::Default => self.weights.priority_default,
            ObjectPriority::Unimportant => self.weights.priority_unimportant,
            ObjectPriority::Hidden | ObjectPriority::Other(_) => 0,
        }
    }

    /// Pages containing every required word and none of the excluded ones.
    pub fn search_terms(&self, terms: &QueryTerms) -> Vec<SearchHit> {
        if terms.required.is_empty() {
            return Vec::new();
        }

        let titleterms = self.index.title_terms();

        // doc -> word position -> (score, matched in title)
        let mut scores: HashMap<usize, HashMap<usize, (i32, bool)>> = HashMap::new();

        for (position, word) in terms.required.iter().enumerate() {
            let matches = [
                (self.index.terms(), self.weights.term, self.weights.partial_term, false),
                (titleterms, self.weights.title, self.weights.partial_title, true),
            ];

            for (map, exact_score, partial_score, in_title) in matches {
                for (doc, score) in self.match_word(map, word, exact_score, partial_score) {
                    let slot = scores
                        .entry(doc)
                        .or_default()
                        .entry(position)
                        .or_insert((score, in_title));
                    if score > slot.0 {
                        *slot = (score, in_title);
                    }
                }
            }
        }

        let excluded = self.excluded_docs(&terms.excluded, titleterms);

        let mut hits: Vec<SearchHit> = scores
            .into_iter()
            .filter(|(doc, words)| words.len() == terms.required.len() && !excluded.contains(doc))
            .filter_map(|(doc, words)| {
                let (score, in_title) = words.into_values().max_by_key(|(score, _)| *score)?;
                let document = self.index.document(doc)?;
                Some(SearchHit {
                    doc,
                    docname: document.docname.clone(),
                    title: document.display_title(),
                    anchor: String::new(),
                    description: None,
                    kind: if in_title { HitKind::Title } else { HitKind::Text },
                    score,
                })
            })
            .collect();

        hits.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.doc.cmp(&b.doc)));
        hits
    }

    /// Exact hits on either spelling of the word; partial hits only when the
    /// map holds no exact key.
    fn match_word(
        &self,
        map: &PostingMap,
        word: &QueryWord,
        exact_score: i32,
        partial_score: i32,
    ) -> Vec<(usize, i32)> {
        let docs = self.index.docnames.len();
        let mut found = Vec::new();
        let mut exact = false;

        for key in [&word.stemmed, &word.raw] {
            if let Some(postings) = map.get(key) {
                exact = true;
                found.extend(postings.docs().iter().map(|&doc| (doc, exact_score)));
            }
        }

        if !exact && word.stemmed.chars().count() >= self.min_partial_len {
            for (key, postings) in map {
                if key.contains(word.stemmed.as_str()) {
                    found.extend(postings.docs().iter().map(|&doc| (doc, partial_score)));
                }
            }
        }

        found.retain(|(doc, _)| *doc < docs);
        found
    }

    fn excluded_docs(&self, excluded: &[QueryWord], titleterms: &PostingMap) -> HashSet<usize> {
        let mut docs = HashSet::new();
        for word in excluded {
            for map in [self.index.terms(), titleterms] {
                for key in [&word.stemmed, &word.raw] {
                    if let Some(postings) = map.get(key) {
                        docs.extend(postings.docs().iter().copied());
                    }
                }
            }
        }
        docs
    }
}
