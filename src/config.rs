// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SearchError};
use crate::models::document::DEFAULT_LINK_SEPARATOR;
use chrono::format::{Item, StrftimeItems};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SHEET_NAME: &str = "ВСЕ ПРОЕКТЫ";
pub const DEFAULT_PUBLISHED_MARKER: &str = "Опубликован";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub workbook: WorkbookConfig,
    pub layout: ColumnLayout,
    pub relevance: RelevanceConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WorkbookConfig {
    /// Worksheet that holds the project registry.
    pub sheet_name: String,
    /// Literal cell value that marks a row as eligible for search.
    pub published_marker: String,
    /// `chrono` format applied to date-typed cells.
    pub date_format: String,
}

/// Zero-based column positions of the registry sheet.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub name: usize,
    pub version: usize,
    pub date: usize,
    pub description: usize,
    pub owner: usize,
    pub owner_full_name: usize,
    pub comments: usize,
    pub comments2: usize,
    pub relevance_native: usize,
    pub relevance_foreign: usize,
    /// First column scanned for hyperlink cells; everything after it is scanned too.
    pub links_from: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RelevanceConfig {
    /// Separator between segments of a relevance cell.
    pub segment_separator: String,
    /// Text between a segment and its hyperlink in the output.
    pub link_separator: String,
    /// Substring that marks a tail cell as a hyperlink.
    pub link_marker: String,
}

impl Default for WorkbookConfig {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            published_marker: DEFAULT_PUBLISHED_MARKER.to_string(),
            date_format: "%d.%m.%Y".to_string(),
        }
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            name: 1,
            version: 2,
            date: 3,
            description: 8,
            owner: 9,
            owner_full_name: 10,
            comments: 12,
            comments2: 13,
            relevance_native: 14,
            relevance_foreign: 15,
            links_from: 16,
        }
    }
}

impl ColumnLayout {
    fn fixed_columns(&self) -> [usize; 10] {
        [
            self.name,
            self.version,
            self.date,
            self.description,
            self.owner,
            self.owner_full_name,
            self.comments,
            self.comments2,
            self.relevance_native,
            self.relevance_foreign,
        ]
    }
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self {
            segment_separator: " | ".to_string(),
            link_separator: DEFAULT_LINK_SEPARATOR.to_string(),
            link_marker: "https://".to_string(),
        }
    }
}

impl Config {
    /// Built-in defaults, then the optional TOML file, then
    /// `SHEET_SEARCH__SECTION__KEY` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SHEET_SEARCH")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let config: Config = settings.try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.workbook.sheet_name.trim().is_empty() {
            return Err(SearchError::Config(
                "workbook.sheet_name must not be empty".to_string(),
            ));
        }

        if self.workbook.published_marker.is_empty() {
            return Err(SearchError::Config(
                "workbook.published_marker must not be empty".to_string(),
            ));
        }

        if StrftimeItems::new(&self.workbook.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(SearchError::Config(format!(
                "workbook.date_format is not a valid strftime format: {}",
                self.workbook.date_format
            )));
        }

        if self.relevance.segment_separator.is_empty() {
            return Err(SearchError::Config(
                "relevance.segment_separator must not be empty".to_string(),
            ));
        }

        if self.relevance.link_separator.is_empty() {
            return Err(SearchError::Config(
                "relevance.link_separator must not be empty".to_string(),
            ));
        }

        if self.relevance.link_marker.is_empty() {
            return Err(SearchError::Config(
                "relevance.link_marker must not be empty".to_string(),
            ));
        }

        if let Some(max_fixed) = self.layout.fixed_columns().into_iter().max()
            && self.layout.links_from <= max_fixed
        {
            return Err(SearchError::Config(format!(
                "layout.links_from ({}) must come after every fixed column (last is {})",
                self.layout.links_from, max_fixed
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.workbook.sheet_name, "ВСЕ ПРОЕКТЫ");
        assert_eq!(config.workbook.published_marker, "Опубликован");
        assert_eq!(config.layout.links_from, 16);
        assert_eq!(config.relevance.segment_separator, " | ");
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("search.toml");
        fs::write(
            &path,
            "[workbook]\nsheet_name = \"ALL PROJECTS\"\npublished_marker = \"Published\"\n",
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.workbook.sheet_name, "ALL PROJECTS");
        assert_eq!(config.workbook.published_marker, "Published");
        assert_eq!(config.workbook.date_format, "%d.%m.%Y");
        assert_eq!(config.layout, ColumnLayout::default());
    }

    #[test]
    fn test_load_link_separator_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("search.toml");
        fs::write(&path, "[relevance]\nlink_separator = \" -> \"\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.relevance.link_separator, " -> ");
        assert_eq!(config.relevance.segment_separator, " | ");
    }

    #[test]
    fn test_validate_rejects_empty_link_separator() {
        let mut config = Config::default_config();
        config.relevance.link_separator.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Config::load(Some(Path::new("/nonexistent/search.toml")));
        assert!(matches!(result, Err(SearchError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_overlapping_link_columns() {
        let mut config = Config::default_config();
        config.layout.links_from = 15;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_date_format() {
        let mut config = Config::default_config();
        config.workbook.date_format = "%d.%Q".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_marker() {
        let mut config = Config::default_config();
        config.workbook.published_marker.clear();
        assert!(config.validate().is_err());
    }
}
