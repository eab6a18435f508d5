// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::error::{IndexError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_index_file(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(IndexError::Validation(format!(
                "Index file does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(IndexError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some("js") | Some("json") => Ok(()),
            _ => Err(IndexError::Validation(format!(
                "Index file must be .js or .json: {}",
                path.display()
            ))),
        }
    }

    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(IndexError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(IndexError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_limit(limit: usize) -> Result<()> {
        if limit == 0 {
            return Err(IndexError::Validation(
                "Result limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn sanitize_file_path(path: &str) -> String {
        path.replace('\\', "/")
            .replace("//", "/")
            .trim()
            .to_string()
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let truncated: String = text.chars().take(max_chars).collect();
            format!("{}...", truncated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_index_file() {
        let temp = TempDir::new().unwrap();
        let js = temp.path().join("searchindex.js");
        let html = temp.path().join("search.html");
        fs::write(&js, "Search.setIndex({})").unwrap();
        fs::write(&html, "<html></html>").unwrap();

        assert!(Validator::validate_index_file(&js).is_ok());
        assert!(Validator::validate_index_file(&html).is_err());
        assert!(Validator::validate_index_file(temp.path()).is_err());
        assert!(Validator::validate_index_file(Path::new("/nonexistent.js")).is_err());
    }

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());
        assert!(Validator::validate_directory(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_validate_limit() {
        assert!(Validator::validate_limit(5).is_ok());
        assert!(Validator::validate_limit(0).is_err());
    }

    #[test]
    fn test_sanitize_file_path() {
        assert_eq!(
            Validator::sanitize_file_path("html\\searchindex.js"),
            "html/searchindex.js"
        );
        assert_eq!(
            Validator::sanitize_file_path("html//searchindex.js"),
            "html/searchindex.js"
        );
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(
            Validator::truncate_text("Advanced Usage of SciKeras Wrappers", 8),
            "Advanced..."
        );
    }
}
