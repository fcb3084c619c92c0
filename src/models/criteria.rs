// file: src/models/criteria.rs
// description: caller supplied search criteria decoded from the --search flag
// reference: https://docs.rs/serde_json

use crate::error::{Result, SearchError};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Criteria JSON is read leniently: `null` means no criteria, key names match
/// case-insensitively (an exact match wins), and `null` field values keep the
/// default. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchCriteria {
    /// Exact value of the date column; empty matches every row.
    pub date: String,
    /// Case-insensitive substring of the owner full name; empty matches every row.
    pub owner: String,
    /// Space separated words that must all appear in the searchable text.
    pub words: String,
}

impl<'de> Deserialize<'de> for SearchCriteria {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let Some(fields) = Option::<BTreeMap<String, Value>>::deserialize(deserializer)? else {
            return Ok(Self::default());
        };

        let field = |name: &str| -> std::result::Result<String, D::Error> {
            let value = fields
                .get(name)
                .or_else(|| {
                    fields
                        .iter()
                        .find(|(key, _)| key.eq_ignore_ascii_case(name))
                        .map(|(_, value)| value)
                });
            match value {
                None | Some(Value::Null) => Ok(String::new()),
                Some(Value::String(text)) => Ok(text.clone()),
                Some(other) => Err(D::Error::custom(format!(
                    "invalid type for {}: expected a string, found {}",
                    name, other
                ))),
            }
        };

        Ok(Self {
            date: field("date")?,
            owner: field("owner")?,
            words: field("words")?,
        })
    }
}

impl SearchCriteria {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(SearchError::Criteria)
    }

    /// Lowercased, trimmed tokens of `words` split on single spaces.
    ///
    /// An empty `words` yields a single empty token, and runs of spaces yield
    /// empty tokens too; both match anything.
    pub fn word_tokens(&self) -> Vec<String> {
        self.words
            .to_lowercase()
            .trim()
            .split(' ')
            .map(str::to_string)
            .collect()
    }
}
