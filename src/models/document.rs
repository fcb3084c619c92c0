// file: src/models/document.rs
// description: normalized project record emitted for every matching row
// reference: internal data structures

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Default separator between a relevance segment and its hyperlink.
pub const DEFAULT_LINK_SEPARATOR: &str = "===";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub name: String,
    pub version: String,
    pub date: String,
    pub description: String,
    pub owner: String,
    #[serde(alias = "ownerFIO")]
    pub owner_full_name: String,
    pub comments: String,
    pub comments2: String,
    #[serde(alias = "relevanceRus")]
    pub relevance_native: Vec<RelevanceItem>,
    #[serde(alias = "relevanceEng")]
    pub relevance_foreign: Vec<RelevanceItem>,
}

/// One segment of a relevance column, optionally paired with a hyperlink.
///
/// Serializes as `text` or `text<separator>link`, `===` unless configured otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevanceItem {
    pub text: String,
    pub link: Option<String>,
    pub separator: String,
}

impl RelevanceItem {
    pub fn new(text: impl Into<String>, link: Option<String>) -> Self {
        Self {
            text: text.into(),
            link,
            separator: DEFAULT_LINK_SEPARATOR.to_string(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    pub fn linked(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self::new(text, Some(link.into()))
    }
}

impl fmt::Display for RelevanceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.link {
            Some(link) => write!(f, "{}{}{}", self.text, self.separator, link),
            None => f.write_str(&self.text),
        }
    }
}

impl Serialize for RelevanceItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RelevanceItem {
    /// Reads the default `===` form only; a custom separator is not recoverable
    /// from the rendered string.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.split_once(DEFAULT_LINK_SEPARATOR) {
            Some((text, link)) if !link.is_empty() => Ok(Self::linked(text, link)),
            Some(_) => Err(D::Error::custom(format!(
                "relevance item {raw:?} has an empty link"
            ))),
            None => Ok(Self::plain(raw)),
        }
    }
}
