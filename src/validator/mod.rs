// file: src/validator/mod.rs
// description: structural invariant checks for loaded search indexes
// reference: internal module structure

pub mod report;

pub use report::{Severity, ValidationIssue, ValidationReport, ValidationStatus};

use crate::index::{PostingMap, SearchIndex};
use crate::parser::TermNormalizer;
use std::collections::HashSet;
use tracing::{debug, warn};

pub struct IndexValidator {
    normalizer: TermNormalizer,
}

impl IndexValidator {
    pub fn new() -> Self {
        Self {
            normalizer: TermNormalizer::new(),
        }
    }

    pub fn validate(&self, index: &SearchIndex) -> ValidationReport {
        let mut issues = Vec::new();

        self.check_alignment(index, &mut issues);
        let mut checked_postings = self.check_postings("terms", index.terms(), index, &mut issues);
        if let Some(titleterms) = &index.titleterms {
            checked_postings += self.check_postings("titleterms", titleterms, index, &mut issues);
        }
        let checked_objects = self.check_objects(index, &mut issues);
        self.check_kind_tables(index, &mut issues);

        for issue in &issues {
            match issue.severity {
                Severity::Error => warn!("{}: {}", issue.location, issue.message),
                Severity::Warning => debug!("{}: {}", issue.location, issue.message),
            }
        }

        ValidationReport::new(issues, index.docnames.len(), checked_postings, checked_objects)
    }

    fn check_alignment(&self, index: &SearchIndex, issues: &mut Vec<ValidationIssue>) {
        let expected = index.docnames.len();

        if index.titles.len() != expected {
            issues.push(ValidationIssue::error(
                "titles",
                format!(
                    "length {} does not match docnames length {}",
                    index.titles.len(),
                    expected
                ),
            ));
        }

        if index.filenames().len() != expected {
            issues.push(ValidationIssue::error(
                "filenames",
                format!(
                    "length {} does not match docnames length {}",
                    index.filenames().len(),
                    expected
                ),
            ));
        }

        let mut seen = HashSet::new();
        for (i, docname) in index.docnames.iter().enumerate() {
            if docname.is_empty() {
                issues.push(ValidationIssue::error(
                    format!("docnames[{}]", i),
                    "empty document name",
                ));
            } else if !seen.insert(docname.as_str()) {
                issues.push(ValidationIssue::warning(
                    format!("docnames[{}]", i),
                    format!("duplicate document name {:?}", docname),
                ));
            }
        }
    }

    fn check_postings(
        &self,
        field: &str,
        map: &PostingMap,
        index: &SearchIndex,
        issues: &mut Vec<ValidationIssue>,
    ) -> usize {
        let docs = index.docnames.len();
        let mut checked = 0;

        for (token, postings) in map {
            let location = format!("{}[{:?}]", field, token);

            if token.trim().is_empty() {
                issues.push(ValidationIssue::error(&location, "empty search token"));
            } else if !self.normalizer.is_normalized(token) {
                issues.push(ValidationIssue::error(
                    &location,
                    "token is not case-normalized",
                ));
            }

            if postings.is_empty() {
                issues.push(ValidationIssue::warning(&location, "token has no postings"));
            }

            for &doc in postings.docs() {
                checked += 1;
                if doc >= docs {
                    issues.push(ValidationIssue::error(
                        &location,
                        format!("document index {} out of range (0..{})", doc, docs),
                    ));
                }
            }
        }

        checked
    }

    fn check_objects(&self, index: &SearchIndex, issues: &mut Vec<ValidationIssue>) -> usize {
        let docs = index.docnames.len();
        let mut checked = 0;

        for entry in index.objects() {
            checked += 1;
            let location = format!("objects[{:?}]", entry.fullname());

            if entry.name.is_empty() {
                issues.push(ValidationIssue::error(&location, "empty object name"));
            }

            if entry.doc >= docs {
                issues.push(ValidationIssue::error(
                    &location,
                    format!("document index {} out of range (0..{})", entry.doc, docs),
                ));
            }

            if !index.objtypes().contains_key(&entry.kind_code.to_string()) {
                issues.push(ValidationIssue::error(
                    &location,
                    format!("unknown object kind code {}", entry.kind_code),
                ));
            }
        }

        checked
    }

    fn check_kind_tables(&self, index: &SearchIndex, issues: &mut Vec<ValidationIssue>) {
        for (code, qualified) in index.objtypes() {
            let location = format!("objtypes[{:?}]", code);

            if code.parse::<u32>().is_err() {
                issues.push(ValidationIssue::error(&location, "kind code is not an integer"));
            }

            match index.objnames().get(code) {
                None => issues.push(ValidationIssue::warning(
                    &location,
                    "no matching objnames entry",
                )),
                Some((domain, role, _)) if *qualified != format!("{}:{}", domain, role) => {
                    issues.push(ValidationIssue::warning(
                        &location,
                        format!("{:?} disagrees with objnames {}:{}", qualified, domain, role),
                    ));
                }
                Some(_) => {}
            }
        }

        for code in index.objnames().keys() {
            if !index.objtypes().contains_key(code) {
                issues.push(ValidationIssue::warning(
                    format!("objnames[{:?}]", code),
                    "no matching objtypes entry",
                ));
            }
        }
    }
}

impl Default for IndexValidator {
    fn default() -> Self {
        Self::new()
    }
}
