// file: src/exporter/json.rs
// description: writes a search index back out as json or as the setIndex script
// reference: https://docs.rs/sha2

use crate::error::{IndexError, Result};
use crate::index::SearchIndex;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Js,
}

impl ExportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "searchindex.json",
            ExportFormat::Js => "searchindex.js",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "js" | "javascript" => Ok(ExportFormat::Js),
            other => Err(IndexError::Config(format!(
                "unsupported export format: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Js => write!(f, "js"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IndexExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub format: ExportFormat,
    pub file: String,
    pub sha256: String,
    pub documents: usize,
    pub terms: usize,
    pub objects: usize,
}

impl IndexExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn render(index: &SearchIndex, format: ExportFormat, pretty: bool) -> Result<String> {
        let json = index.to_json(pretty)?;
        Ok(match format {
            ExportFormat::Json => json,
            ExportFormat::Js => format!("Search.setIndex({})", json),
        })
    }

    pub fn export(
        &self,
        index: &SearchIndex,
        format: ExportFormat,
        pretty: bool,
    ) -> Result<ExportManifest> {
        info!("Exporting search index to {:?} as {}", self.output_dir, format);

        let payload = Self::render(index, format, pretty)?;
        let path = self.output_dir.join(format.file_name());
        fs::write(&path, &payload).map_err(|source| IndexError::FileOperation {
            path: path.clone(),
            source,
        })?;

        let stats = index.stats();
        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            format,
            file: format.file_name().to_string(),
            sha256: Self::compute_hash(&payload),
            documents: stats.documents,
            terms: stats.terms,
            objects: stats.objects,
        };

        let manifest_path = self.output_dir.join("manifest.json");
        fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?).map_err(
            |source| IndexError::FileOperation {
                path: manifest_path.clone(),
                source,
            },
        )?;

        info!(
            "Export complete: {} documents written to {}",
            manifest.documents,
            path.display()
        );
        Ok(manifest)
    }

    fn compute_hash(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::search_index::tests::sample;
    use crate::parser::IndexLoader;
    use tempfile::tempdir;

    #[test]
    fn test_exporter_creation() {
        let dir = tempdir().unwrap();
        let exporter = IndexExporter::new(dir.path().join("nested"));
        assert!(exporter.is_ok());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("js".parse::<ExportFormat>().unwrap(), ExportFormat::Js);
        assert!("yaml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_js_export_reloads() {
        let dir = tempdir().unwrap();
        let exporter = IndexExporter::new(dir.path()).unwrap();
        let index = sample();

        let manifest = exporter.export(&index, ExportFormat::Js, false).unwrap();
        assert_eq!(manifest.file, "searchindex.js");
        assert_eq!(manifest.documents, 4);
        assert_eq!(manifest.sha256.len(), 64);

        let written = fs::read_to_string(dir.path().join("searchindex.js")).unwrap();
        assert!(written.starts_with("Search.setIndex("));

        let reloaded = IndexLoader::parse("export", &written).unwrap();
        assert_eq!(reloaded, index);
        assert!(dir.path().join("manifest.json").exists());
    }

    #[test]
    fn test_pretty_json_export() {
        let dir = tempdir().unwrap();
        let exporter = IndexExporter::new(dir.path()).unwrap();
        let index = sample();

        exporter.export(&index, ExportFormat::Json, true).unwrap();
        let written = fs::read_to_string(dir.path().join("searchindex.json")).unwrap();
        assert!(written.contains('\n'));
        assert_eq!(SearchIndex::from_json(&written).unwrap(), index);
    }
}
