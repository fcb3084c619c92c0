// file: src/models/envelope.rs
// description: top level json object returned to the caller
// reference: single result-or-error envelope written to stdout

use crate::error::Result;
use crate::models::Document;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEnvelope {
    pub results: Vec<Document>,
    /// Empty on success.
    pub error: String,
}

impl OutputEnvelope {
    pub fn success(results: Vec<Document>) -> Self {
        Self {
            results,
            error: String::new(),
        }
    }

    /// Failure envelopes never carry partial results.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            error: message.into(),
        }
    }

    pub fn from_result(result: Result<Vec<Document>>) -> Self {
        match result {
            Ok(results) => Self::success(results),
            Err(err) => Self::failure(err.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        !self.error.is_empty()
    }
}
