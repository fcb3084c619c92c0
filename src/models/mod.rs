// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod criteria;
pub mod document;
pub mod envelope;
pub mod row;

pub use criteria::SearchCriteria;
pub use document::{Document, RelevanceItem};
pub use envelope::OutputEnvelope;
pub use row::Row;
