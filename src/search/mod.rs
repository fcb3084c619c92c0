// file: src/search/mod.rs
// description: row selection and criteria filtering exports
// reference: internal module structure

pub mod filter;
pub mod selector;

pub use filter::SearchFilter;
pub use selector::PublishedSelector;
