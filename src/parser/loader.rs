// file: src/parser/loader.rs
// description: reads searchindex.js / searchindex.json files into a SearchIndex
// reference: https://docs.rs/tokio/latest/tokio/fs

use crate::error::{IndexError, Result};
use crate::index::SearchIndex;
use crate::parser::patterns::SET_INDEX_WRAPPER;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

pub struct IndexLoader;

impl IndexLoader {
    pub async fn load(path: &Path) -> Result<SearchIndex> {
        info!("Loading search index from {}", path.display());

        let content = fs::read_to_string(path)
            .await
            .map_err(|source| IndexError::FileOperation {
                path: path.to_path_buf(),
                source,
            })?;

        let index = Self::parse(&path.display().to_string(), &content)?;

        info!(
            "Loaded {} documents, {} terms from {}",
            index.len(),
            index.terms().len(),
            path.display()
        );
        Ok(index)
    }

    /// Accepts bare JSON or the `Search.setIndex(...)` script form.
    pub fn parse(source_name: &str, content: &str) -> Result<SearchIndex> {
        let payload = Self::extract_payload(source_name, content)?;

        SearchIndex::from_json(payload).map_err(|e| IndexError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    pub fn extract_payload<'a>(source_name: &str, content: &'a str) -> Result<&'a str> {
        let trimmed = content.trim();

        if trimmed.starts_with('{') {
            debug!("{} is bare JSON", source_name);
            return Ok(trimmed);
        }

        match SET_INDEX_WRAPPER.captures(trimmed).and_then(|caps| caps.get(1)) {
            Some(payload) => {
                debug!("{} is wrapped in Search.setIndex", source_name);
                Ok(payload.as_str())
            }
            None => Err(IndexError::Parse {
                source_name: source_name.to_string(),
                message: "expected a JSON object or Search.setIndex(...) call".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"{"docnames":["index"],"filenames":["index.rst"],"titles":["SciKeras"],"terms":{"kera":0},"objects":{},"objtypes":{},"objnames":{}}"#;

    #[test]
    fn test_parse_bare_json() {
        let index = IndexLoader::parse("inline", MINIMAL).unwrap();
        assert_eq!(index.docnames, vec!["index"]);
    }

    #[test]
    fn test_parse_wrapped() {
        let wrapped = format!("Search.setIndex({});\n", MINIMAL);
        let index = IndexLoader::parse("inline", &wrapped).unwrap();
        assert_eq!(index.titles, vec!["SciKeras"]);
    }

    #[test]
    fn test_parse_rejects_other_scripts() {
        let err = IndexLoader::parse("inline", "var index = {};").unwrap_err();
        assert!(matches!(err, IndexError::Parse { .. }));
    }

    #[test]
    fn test_parse_reports_malformed_payload() {
        let err = IndexLoader::parse("broken.js", "Search.setIndex({\"docnames\": 3})").unwrap_err();
        assert!(err.to_string().contains("broken.js"));
    }

    #[tokio::test]
    async fn test_load_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("searchindex.js");
        std::fs::write(&path, format!("Search.setIndex({})", MINIMAL)).unwrap();

        let index = IndexLoader::load(&path).await.unwrap();
        assert_eq!(index.filenames().to_vec(), vec!["index.rst"]);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = IndexLoader::load(Path::new("/nonexistent/searchindex.js"))
            .await
            .unwrap_err();
        assert!(matches!(err, IndexError::FileOperation { .. }));
    }
}
