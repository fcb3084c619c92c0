// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod orchestrator;
mod stats;

pub use orchestrator::{SearchPipeline, search_workbook};
pub use stats::PipelineStats;
