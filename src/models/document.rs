// file: src/models/document.rs
// description: documentation page model resolved from the parallel index arrays
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// A page of the generated documentation, identified by its position in
/// `docnames`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub index: usize,
    pub docname: String,
    pub filename: String,
    pub title: String,
}

impl Document {
    pub fn new(index: usize, docname: String, filename: String, title: String) -> Self {
        Self {
            index,
            docname,
            filename,
            title,
        }
    }

    /// Link target of the rendered page, relative to the HTML root.
    pub fn html_path(&self) -> String {
        format!("{}.html", self.docname)
    }

    /// Title with inline markup stripped, as the search widget displays it.
    pub fn display_title(&self) -> String {
        let mut out = String::with_capacity(self.title.len());
        let mut in_tag = false;

        for c in self.title.chars() {
            match c {
                '<' => in_tag = true,
                '>' if in_tag => in_tag = false,
                _ if !in_tag => out.push(c),
                _ => {}
            }
        }

        out.trim().to_string()
    }
}
