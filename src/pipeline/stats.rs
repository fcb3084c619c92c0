// file: src/pipeline/stats.rs
// description: row counters and timing collected during one search run
// reference: logged through tracing, never written to stdout

use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    pub rows_read: usize,
    pub rows_published: usize,
    pub rows_matched: usize,
    pub documents_emitted: usize,
    pub duration: Duration,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of published rows that satisfied the criteria, in percent.
    pub fn match_rate(&self) -> f64 {
        if self.rows_published == 0 {
            return 0.0;
        }
        (self.rows_matched as f64 / self.rows_published as f64) * 100.0
    }

    pub fn log_summary(&self) {
        info!(
            rows_read = self.rows_read,
            rows_published = self.rows_published,
            rows_matched = self.rows_matched,
            documents = self.documents_emitted,
            elapsed_ms = self.duration.as_millis() as u64,
            "Search complete ({:.1}% of published rows matched)",
            self.match_rate()
        );
    }
}
