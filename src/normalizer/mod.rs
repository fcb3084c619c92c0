// file: src/normalizer/mod.rs
// description: row to document normalization exports
// reference: internal module structure

pub mod record;
pub mod relevance;

pub use record::RecordNormalizer;
pub use relevance::{LinkOrder, RelevanceBuilder};
