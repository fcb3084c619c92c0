// file: src/search/selector.rs
// description: keeps only rows carrying the published marker

use crate::models::Row;
use tracing::debug;

pub struct PublishedSelector {
    marker: String,
}

impl PublishedSelector {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Rows with at least one cell exactly equal to the marker, in input order.
    pub fn select(&self, rows: Vec<Row>) -> Vec<Row> {
        let total = rows.len();
        let selected: Vec<Row> = rows
            .into_iter()
            .filter(|row| row.contains_exact(&self.marker))
            .collect();

        debug!("Selected {} of {} rows as published", selected.len(), total);
        selected
    }
}
