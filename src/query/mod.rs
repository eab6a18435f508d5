// file: src/query/mod.rs
// description: search query module exports
// reference: internal module structure

pub mod searcher;

pub use searcher::Searcher;
