// file: src/discovery/scanner.rs
// description: Directory walking to locate generated search indexes
// reference: https://docs.rs/walkdir

use crate::config::DiscoveryConfig;
use crate::error::Result;
use crate::utils::Validator;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub const INDEX_FILE_NAMES: &[&str] = &["searchindex.js", "searchindex.json"];

pub struct IndexScanner {
    config: DiscoveryConfig,
}

#[derive(Debug, Clone)]
pub struct DiscoveredIndex {
    pub path: PathBuf,
    pub relative_path: String,
    pub size: u64,
    pub modified: u64,
}

impl IndexScanner {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    pub fn scan(&self, root: &Path) -> Result<Vec<DiscoveredIndex>> {
        Validator::validate_directory(root)?;
        info!("Scanning for search indexes under {}", root.display());
        let mut found = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let is_index = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| INDEX_FILE_NAMES.contains(&name));
            if !is_index {
                continue;
            }

            let relative_path = Validator::sanitize_file_path(
                &path.strip_prefix(root).unwrap_or(path).to_string_lossy(),
            );

            if self.should_skip(&relative_path) {
                debug!("Skipping index: {}", path.display());
                continue;
            }

            let Ok(metadata) = entry.metadata() else {
                continue;
            };

            let size = metadata.len();
            let max_size = self.max_file_size_bytes();
            if size > max_size {
                debug!(
                    "Skipping large index ({} MB): {}",
                    size / 1024 / 1024,
                    path.display()
                );
                continue;
            }

            let modified = metadata
                .modified()
                .ok()
                .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
                .map(|d| d.as_secs())
                .unwrap_or(0);

            found.push(DiscoveredIndex {
                path: path.to_path_buf(),
                relative_path,
                size,
                modified,
            });
        }

        info!("Found {} search index files", found.len());
        Ok(found)
    }

    fn max_file_size_bytes(&self) -> u64 {
        u64::try_from(self.config.max_file_size_mb)
            .unwrap_or(u64::MAX)
            .saturating_mul(1024 * 1024)
    }

    fn should_skip(&self, relative_path: &str) -> bool {
        for pattern in &self.config.skip_patterns {
            if let Some(suffix) = pattern.strip_prefix('*') {
                if relative_path.ends_with(suffix) {
                    return true;
                }
            } else if relative_path.contains(pattern.as_str()) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config(skip_patterns: Vec<String>) -> DiscoveryConfig {
        DiscoveryConfig {
            skip_patterns,
            max_file_size_mb: 1,
        }
    }

    #[test]
    fn test_scan_finds_indexes() {
        let temp = TempDir::new().unwrap();
        let html = temp.path().join("html");
        fs::create_dir_all(html.join("_static")).unwrap();
        fs::create_dir_all(temp.path().join("dirhtml")).unwrap();
        fs::write(html.join("searchindex.js"), "Search.setIndex({})").unwrap();
        fs::write(html.join("_static/searchindex.js"), "stale").unwrap();
        fs::write(html.join("index.html"), "<html></html>").unwrap();
        fs::write(temp.path().join("dirhtml/searchindex.json"), "{}").unwrap();

        let scanner = IndexScanner::new(config(vec!["_static/".to_string()]));
        let found = scanner.scan(temp.path()).unwrap();

        let paths: Vec<&str> = found.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(paths, vec!["dirhtml/searchindex.json", "html/searchindex.js"]);
    }

    #[test]
    fn test_skip_patterns() {
        let scanner = IndexScanner::new(config(vec![
            "*.json".to_string(),
            ".doctrees/".to_string(),
        ]));

        assert!(scanner.should_skip("build/searchindex.json"));
        assert!(scanner.should_skip("build/.doctrees/searchindex.js"));
        assert!(!scanner.should_skip("build/html/searchindex.js"));
    }

    #[test]
    fn test_huge_size_limit_saturates() {
        let scanner = IndexScanner::new(DiscoveryConfig {
            skip_patterns: vec![],
            max_file_size_mb: usize::MAX,
        });
        assert_eq!(scanner.max_file_size_bytes(), u64::MAX);

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("searchindex.js"), "Search.setIndex({})").unwrap();
        assert_eq!(scanner.scan(temp.path()).unwrap().len(), 1);
    }

    #[test]
    fn test_scan_rejects_missing_root() {
        let scanner = IndexScanner::new(config(vec![]));
        assert!(scanner.scan(Path::new("/nonexistent/docs")).is_err());
    }
}
