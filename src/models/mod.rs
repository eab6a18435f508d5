// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod object;
pub mod postings;
pub mod search_result;

pub use document::Document;
pub use object::{ObjectEntry, ObjectKind, ObjectPriority, ObjectRecord};
pub use postings::Postings;
pub use search_result::{HitKind, SearchHit};
