// file: src/validator/report.rs
// description: validation findings and the overall verdict for an index
// reference: modeled on health reports used for production monitoring

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationStatus {
    Valid,
    Warnings,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// Where the problem sits, e.g. `terms["kera"]`.
    pub location: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            location: location.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub status: ValidationStatus,
    pub issues: Vec<ValidationIssue>,
    pub documents: usize,
    pub checked_postings: usize,
    pub checked_objects: usize,
}

impl ValidationReport {
    pub fn new(
        issues: Vec<ValidationIssue>,
        documents: usize,
        checked_postings: usize,
        checked_objects: usize,
    ) -> Self {
        let status = if issues.iter().any(|i| i.severity == Severity::Error) {
            ValidationStatus::Invalid
        } else if issues.is_empty() {
            ValidationStatus::Valid
        } else {
            ValidationStatus::Warnings
        };

        Self {
            status,
            issues,
            documents,
            checked_postings,
            checked_objects,
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    /// Strict mode also rejects warnings.
    pub fn passes(&self, strict: bool) -> bool {
        match self.status {
            ValidationStatus::Valid => true,
            ValidationStatus::Warnings => !strict,
            ValidationStatus::Invalid => false,
        }
    }

    pub fn format(&self) -> String {
        let status_icon = match self.status {
            ValidationStatus::Valid => "✓",
            ValidationStatus::Warnings => "⚠",
            ValidationStatus::Invalid => "✗",
        };

        let mut output = format!(
            "{} Index status: {:?}\n\
             Documents: {}\n\
             Postings checked: {}\n\
             Objects checked: {}\n",
            status_icon,
            self.status,
            self.documents,
            self.checked_postings,
            self.checked_objects
        );

        for issue in &self.issues {
            let icon = match issue.severity {
                Severity::Warning => "⚠",
                Severity::Error => "✗",
            };
            output.push_str(&format!("{} {}: {}\n", icon, issue.location, issue.message));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_issues() {
        let clean = ValidationReport::new(vec![], 3, 10, 2);
        assert_eq!(clean.status, ValidationStatus::Valid);
        assert!(clean.passes(true));

        let warned = ValidationReport::new(
            vec![ValidationIssue::warning("terms[\"Kera\"]", "not normalized")],
            3,
            10,
            2,
        );
        assert_eq!(warned.status, ValidationStatus::Warnings);
        assert!(warned.passes(false));
        assert!(!warned.passes(true));

        let broken = ValidationReport::new(
            vec![
                ValidationIssue::warning("a", "minor"),
                ValidationIssue::error("b", "major"),
            ],
            3,
            10,
            2,
        );
        assert_eq!(broken.status, ValidationStatus::Invalid);
        assert_eq!(broken.errors().count(), 1);
        assert_eq!(broken.warnings().count(), 1);
    }

    #[test]
    fn test_format_lists_issues() {
        let report = ValidationReport::new(
            vec![ValidationIssue::error("titles", "length 2 != docnames length 3")],
            3,
            0,
            0,
        );
        let text = report.format();
        assert!(text.contains("Invalid"));
        assert!(text.contains("titles: length 2"));
    }
}
