// file: src/utils/validation.rs
// description: input validation for workbook paths
// reference: input validation patterns

use crate::error::{Result, SearchError};
use crate::workbook::spreadsheet::SUPPORTED_EXTENSIONS;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_workbook_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(SearchError::Validation(
                "Workbook path is empty (pass --file)".to_string(),
            ));
        }

        if !path.exists() {
            return Err(SearchError::Validation(format!(
                "Workbook does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(SearchError::Validation(format!(
                "Workbook path is not a file: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_spreadsheet_extension(path: &Path) -> Result<()> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension {
            Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => Err(SearchError::Validation(format!(
                "Unsupported workbook format: {} (expected one of {})",
                path.display(),
                SUPPORTED_EXTENSIONS.join(", ")
            ))),
        }
    }
}
