// file: src/pipeline/orchestrator.rs
// description: coordinates sheet reading, selection, filtering and normalization
// reference: synchronous single pass over an in-memory worksheet

use crate::config::Config;
use crate::error::Result;
use crate::models::{Document, SearchCriteria};
use crate::normalizer::RecordNormalizer;
use crate::pipeline::stats::PipelineStats;
use crate::search::{PublishedSelector, SearchFilter};
use crate::utils::Validator;
use crate::workbook::{CalamineSource, SheetSource};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

pub struct SearchPipeline<'a> {
    config: &'a Config,
}

impl<'a> SearchPipeline<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Reads the configured sheet from `source` and returns the documents for
    /// every published row that satisfies `criteria`, in sheet order.
    pub fn run<S: SheetSource>(
        &self,
        source: &mut S,
        criteria: &SearchCriteria,
    ) -> Result<(Vec<Document>, PipelineStats)> {
        let start = Instant::now();
        let mut stats = PipelineStats::new();

        let sheet_name = &self.config.workbook.sheet_name;
        info!("Reading sheet: {}", sheet_name);
        let rows = source.sheet_rows(sheet_name)?;
        stats.rows_read = rows.len();

        let published =
            PublishedSelector::new(self.config.workbook.published_marker.as_str()).select(rows);
        stats.rows_published = published.len();

        debug!(
            date = %criteria.date,
            owner = %criteria.owner,
            words = %criteria.words,
            "Applying search criteria"
        );
        let matched = SearchFilter::new(&self.config.layout, criteria).apply(published);
        stats.rows_matched = matched.len();

        let documents =
            RecordNormalizer::new(&self.config.layout, &self.config.relevance).normalize(&matched);
        stats.documents_emitted = documents.len();
        stats.duration = start.elapsed();

        Ok((documents, stats))
    }
}

/// Full invocation: decode the criteria, open the workbook and run the search.
///
/// Criteria are decoded before the file is touched, so a malformed payload is
/// reported even when the workbook path is also wrong.
pub fn search_workbook(config: &Config, path: &Path, raw_criteria: &str) -> Result<Vec<Document>> {
    let criteria = SearchCriteria::from_json(raw_criteria)?;

    Validator::validate_workbook_path(path)?;
    Validator::validate_spreadsheet_extension(path)?;

    let mut source = CalamineSource::open(path, config.workbook.date_format.as_str())?;
    let (documents, stats) = SearchPipeline::new(config).run(&mut source, &criteria)?;
    stats.log_summary();

    Ok(documents)
}
