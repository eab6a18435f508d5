// file: src/models/search_result.rs
// description: Search hit model with widget-compatible scores
// reference: Used for term and object search results

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    Object,
    Title,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Index of the page in `docnames`
    pub doc: usize,

    /// Document name (link target without extension)
    pub docname: String,

    /// Heading shown for the hit: the object's full name or the page title
    pub title: String,

    /// Fragment within the page, empty for whole-page hits
    pub anchor: String,

    /// Human label of the object kind, e.g. "Python method"
    pub description: Option<String>,

    pub kind: HitKind,

    /// Higher ranks first
    pub score: i32,
}

impl SearchHit {
    pub fn link(&self) -> String {
        if self.anchor.is_empty() {
            format!("{}.html", self.docname)
        } else {
            format!("{}.html#{}", self.docname, self.anchor)
        }
    }

    /// Format as a summary line for display
    pub fn format_summary(&self) -> String {
        match &self.description {
            Some(description) => format!(
                "[{:>3}] {} ({}) -> {}",
                self.score,
                self.title,
                description,
                self.link()
            ),
            None => format!("[{:>3}] {} -> {}", self.score, self.title, self.link()),
        }
    }
}
