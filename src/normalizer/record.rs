// file: src/normalizer/record.rs
// description: maps filtered registry rows onto document records
// reference: fixed positional column layout

use crate::config::{ColumnLayout, RelevanceConfig};
use crate::extractor::extract_links;
use crate::models::{Document, Row};
use crate::normalizer::relevance::RelevanceBuilder;

pub struct RecordNormalizer<'a> {
    layout: &'a ColumnLayout,
    relevance: &'a RelevanceConfig,
}

impl<'a> RecordNormalizer<'a> {
    pub fn new(layout: &'a ColumnLayout, relevance: &'a RelevanceConfig) -> Self {
        Self { layout, relevance }
    }

    pub fn normalize(&self, rows: &[Row]) -> Vec<Document> {
        rows.iter().map(|row| self.normalize_row(row)).collect()
    }

    pub fn normalize_row(&self, row: &Row) -> Document {
        let layout = self.layout;
        let links = extract_links(row.tail(layout.links_from), &self.relevance.link_marker);
        let separator = self.relevance.segment_separator.as_str();
        let link_separator = self.relevance.link_separator.as_str();

        Document {
            name: row.cell(layout.name).to_string(),
            version: row.cell(layout.version).to_string(),
            date: row.cell(layout.date).to_string(),
            description: row.cell(layout.description).to_string(),
            owner: row.cell(layout.owner).to_string(),
            owner_full_name: row.cell(layout.owner_full_name).to_string(),
            comments: row.cell(layout.comments).to_string(),
            comments2: row.cell(layout.comments2).to_string(),
            relevance_native: RelevanceBuilder::native(separator)
                .with_link_separator(link_separator)
                .build(row.cell(layout.relevance_native), &links),
            relevance_foreign: RelevanceBuilder::foreign(separator)
                .with_link_separator(link_separator)
                .build(row.cell(layout.relevance_foreign), &links),
        }
    }
}
