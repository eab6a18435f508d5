// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{IndexError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub index: IndexConfig,
    pub search: SearchConfig,
    pub export: ExportConfig,
    pub discovery: DiscoveryConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexConfig {
    pub path: PathBuf,
    /// Treat validation warnings as failures.
    pub strict: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub default_limit: usize,
    /// Query words shorter than this never match partially.
    pub min_partial_len: usize,
    /// Stem query words before term lookup, as the html builder does for
    /// index keys.
    #[serde(default = "default_stem")]
    pub stem: bool,
    #[serde(default)]
    pub scores: ScoreWeights,
}

/// Weights applied by the searcher. Defaults match the stock search widget.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoreWeights {
    /// Query equals the full name or its last component.
    pub object_name_match: i32,
    /// Last component contains the query.
    pub object_partial_match: i32,
    pub priority_important: i32,
    pub priority_default: i32,
    pub priority_unimportant: i32,
    pub term: i32,
    pub partial_term: i32,
    pub title: i32,
    pub partial_title: i32,
}

fn default_stem() -> bool {
    true
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            object_name_match: 11,
            object_partial_match: 6,
            priority_important: 15,
            priority_default: 5,
            priority_unimportant: -5,
            term: 5,
            partial_term: 2,
            title: 15,
            partial_title: 7,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub format: String,
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    pub skip_patterns: Vec<String>,
    pub max_file_size_mb: usize,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DOCSEARCH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| IndexError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| IndexError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            index: IndexConfig {
                path: PathBuf::from("docs/_build/html/searchindex.js"),
                strict: false,
            },
            search: SearchConfig {
                default_limit: 10,
                min_partial_len: 3,
                stem: true,
                scores: ScoreWeights::default(),
            },
            export: ExportConfig {
                output_dir: PathBuf::from("./exports"),
                format: "json".to_string(),
                pretty: false,
            },
            discovery: DiscoveryConfig {
                skip_patterns: vec!["_static/".to_string(), ".doctrees/".to_string()],
                max_file_size_mb: 64,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.search.default_limit == 0 {
            return Err(IndexError::Config(
                "default_limit must be greater than 0".to_string(),
            ));
        }

        if self.search.min_partial_len == 0 {
            return Err(IndexError::Config(
                "min_partial_len must be greater than 0".to_string(),
            ));
        }

        if !matches!(self.export.format.as_str(), "json" | "js") {
            return Err(IndexError::Config(format!(
                "unsupported export format: {}",
                self.export.format
            )));
        }

        Ok(())
    }
}
