// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod discovery;
pub mod error;
pub mod exporter;
pub mod index;
pub mod models;
pub mod parser;
pub mod query;
pub mod utils;
pub mod validator;

pub use config::{Config, DiscoveryConfig, ExportConfig, IndexConfig, ScoreWeights, SearchConfig};
pub use discovery::{DiscoveredIndex, IndexScanner};
pub use error::{IndexError, Result};
pub use exporter::{ExportFormat, ExportManifest, IndexExporter};
pub use index::{IndexStats, SearchIndex};
pub use models::{
    Document, HitKind, ObjectEntry, ObjectKind, ObjectPriority, ObjectRecord, Postings, SearchHit,
};
pub use parser::{IndexLoader, QueryTerms, QueryWord, TermNormalizer};
pub use query::Searcher;
pub use utils::{OperationTimer, Validator};
pub use validator::{IndexValidator, Severity, ValidationIssue, ValidationReport, ValidationStatus};
