// file: src/parser/mod.rs
// description: index loading and term normalization module exports
// reference: internal module structure

pub mod loader;
pub mod normalizer;
pub mod patterns;

pub use loader::IndexLoader;
pub use normalizer::{QueryTerms, QueryWord, TermNormalizer};
