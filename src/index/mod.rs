// file: src/index/mod.rs
// description: search index data module exports
// reference: internal module structure

pub mod search_index;

pub use search_index::{IndexStats, ObjectMap, PostingMap, SearchIndex};
