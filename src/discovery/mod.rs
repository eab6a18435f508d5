// file: src/discovery/mod.rs
// description: search index discovery module exports
// reference: internal module structure

pub mod scanner;

pub use scanner::{DiscoveredIndex, INDEX_FILE_NAMES, IndexScanner};
