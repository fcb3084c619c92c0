// file: src/exporter/mod.rs
// description: output serialization exports
// reference: internal module structure

pub mod json;

pub use json::JsonExporter;
