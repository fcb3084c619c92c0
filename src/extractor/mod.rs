// file: src/extractor/mod.rs
// description: row content extraction exports
// reference: internal module structure

pub mod links;

pub use links::extract_links;
