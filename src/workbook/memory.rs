// file: src/workbook/memory.rs
// description: in-memory sheet source for fixtures and embedding callers

use super::SheetSource;
use crate::error::{Result, SearchError};
use crate::models::Row;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    sheets: HashMap<String, Vec<Row>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, name: impl Into<String>, rows: Vec<Row>) -> Self {
        self.sheets.insert(name.into(), rows);
        self
    }
}

impl SheetSource for InMemorySource {
    fn sheet_rows(&mut self, sheet_name: &str) -> Result<Vec<Row>> {
        self.sheets
            .get(sheet_name)
            .cloned()
            .ok_or_else(|| SearchError::SheetNotFound(sheet_name.to_string()))
    }
}
