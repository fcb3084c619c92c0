// file: src/exporter/json.rs
// description: writes the output envelope as a single json document

use crate::error::{Result, SearchError};
use crate::models::OutputEnvelope;
use std::io::Write;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn render(&self, envelope: &OutputEnvelope) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(envelope)
        } else {
            serde_json::to_string(envelope)
        };
        rendered.map_err(|e| SearchError::Serialization(e.to_string()))
    }

    /// Writes the envelope followed by a newline and flushes `out`.
    pub fn write_to<W: Write>(&self, envelope: &OutputEnvelope, out: &mut W) -> Result<()> {
        let rendered = self.render(envelope)?;
        writeln!(out, "{}", rendered)?;
        out.flush()?;

        debug!(
            "Wrote envelope with {} results ({} bytes)",
            envelope.results.len(),
            rendered.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Document;

    #[test]
    fn test_compact_output_is_one_line() {
        let envelope = OutputEnvelope::success(vec![Document {
            name: "Gateway".to_string(),
            ..Default::default()
        }]);

        let mut out = Vec::new();
        JsonExporter::new(false).write_to(&envelope, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.ends_with('\n'));
        assert_eq!(text.trim_end().lines().count(), 1);
        assert!(text.starts_with(r#"{"results":[{"name":"Gateway""#));
        assert!(text.trim_end().ends_with(r#""error":""}"#));
    }

    #[test]
    fn test_pretty_output_round_trips() {
        let envelope = OutputEnvelope::failure("sheet X does not exist");

        let rendered = JsonExporter::new(true).render(&envelope).unwrap();
        assert!(rendered.lines().count() > 1);

        let parsed: OutputEnvelope = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, envelope);
    }

    #[test]
    fn test_non_ascii_is_written_verbatim() {
        let envelope = OutputEnvelope::failure("sheet ВСЕ ПРОЕКТЫ does not exist");
        let rendered = JsonExporter::default().render(&envelope).unwrap();
        assert!(rendered.contains("ВСЕ ПРОЕКТЫ"));
    }
}
