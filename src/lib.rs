// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod cli;
pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod search;
pub mod utils;
pub mod workbook;

pub use config::{ColumnLayout, Config, RelevanceConfig, WorkbookConfig};
pub use error::{Result, SearchError};
pub use exporter::JsonExporter;
pub use extractor::extract_links;
pub use models::{Document, OutputEnvelope, RelevanceItem, Row, SearchCriteria};
pub use normalizer::{LinkOrder, RecordNormalizer, RelevanceBuilder};
pub use pipeline::{PipelineStats, SearchPipeline, search_workbook};
pub use search::{PublishedSelector, SearchFilter};
pub use utils::Validator;
pub use workbook::{CalamineSource, InMemorySource, SheetSource};
