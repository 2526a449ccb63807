use crate::application::ports::{ExportError, SummaryExporter};
use crate::domain::MeetingMetadata;

const DOCUMENT_TITLE: &str = "Meeting report";

/// Plain Markdown rendering: title heading, metadata header block, body.
pub struct MarkdownExporter;

impl SummaryExporter for MarkdownExporter {
    fn export(
        &self,
        summary: &str,
        metadata: Option<&MeetingMetadata>,
    ) -> Result<Vec<u8>, ExportError> {
        let mut doc = String::new();
        doc.push_str("# ");
        doc.push_str(DOCUMENT_TITLE);
        doc.push_str("\n\n");

        if let Some(meta) = metadata.filter(|m| !m.is_empty()) {
            for line in meta.header_lines() {
                doc.push_str("- ");
                doc.push_str(&line);
                doc.push('\n');
            }
            doc.push('\n');
        }

        doc.push_str(summary);
        doc.push('\n');

        Ok(doc.into_bytes())
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }

    fn content_type(&self) -> &'static str {
        "text/markdown"
    }
}
