// file: src/workbook/spreadsheet.rs
// description: spreadsheet file reader built on calamine
// reference: https://docs.rs/calamine

use super::SheetSource;
use crate::error::{Result, SearchError};
use crate::models::Row;
use calamine::{Data, DataType, Reader, Sheets, open_workbook_auto};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

pub struct CalamineSource {
    workbook: Sheets<BufReader<File>>,
    date_format: String,
}

impl CalamineSource {
    pub fn open(path: &Path, date_format: impl Into<String>) -> Result<Self> {
        let workbook = open_workbook_auto(path).map_err(|e| SearchError::WorkbookOpen {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        debug!("Opened workbook: {}", path.display());

        Ok(Self {
            workbook,
            date_format: date_format.into(),
        })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }
}

impl SheetSource for CalamineSource {
    fn sheet_rows(&mut self, sheet_name: &str) -> Result<Vec<Row>> {
        if !self.sheet_names().iter().any(|name| name == sheet_name) {
            return Err(SearchError::SheetNotFound(sheet_name.to_string()));
        }

        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|e| SearchError::SheetRead {
                sheet: sheet_name.to_string(),
                message: e.to_string(),
            })?;

        // The used range may start right of column A; pad so that positional
        // columns stay anchored to the sheet.
        let leading = range.start().map(|(_, col)| col as usize).unwrap_or(0);

        let rows: Vec<Row> = range
            .rows()
            .map(|cells| {
                std::iter::repeat_n(String::new(), leading)
                    .chain(cells.iter().map(|cell| cell_text(cell, &self.date_format)))
                    .collect::<Row>()
            })
            .collect();

        debug!(
            "Read {} rows from sheet {} (leading offset {})",
            rows.len(),
            sheet_name,
            leading
        );

        Ok(rows)
    }
}

/// Text form of a cell: strings verbatim, dates through `date_format`,
/// everything else through its display form.
pub fn cell_text(cell: &Data, date_format: &str) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_datetime()
            .map(|dt| dt.format(date_format).to_string())
            .unwrap_or_else(|| cell.to_string()),
        other => other.to_string(),
    }
}
