// file: src/models/postings.rs
// description: term posting lists as encoded by the documentation generator
// reference: https://serde.rs/enum-representations.html#untagged

use serde::{Deserialize, Serialize};

/// Documents containing a token. The generator writes a bare integer when a
/// token occurs in exactly one document, so both encodings are accepted and
/// written back as they were read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Postings {
    Single(usize),
    Many(Vec<usize>),
}

impl Postings {
    pub fn docs(&self) -> &[usize] {
        match self {
            Postings::Single(doc) => std::slice::from_ref(doc),
            Postings::Many(docs) => docs,
        }
    }

    pub fn len(&self) -> usize {
        self.docs().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs().is_empty()
    }

    /// Sorted, deduplicated document indices.
    pub fn to_sorted(&self) -> Vec<usize> {
        let mut docs = self.docs().to_vec();
        docs.sort_unstable();
        docs.dedup();
        docs
    }
}
