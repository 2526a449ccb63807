use crate::domain::MeetingMetadata;

/// Renders a finished summary (plus an optional metadata header block) into
/// a document-format byte buffer.
pub trait SummaryExporter: Send + Sync {
    fn export(
        &self,
        summary: &str,
        metadata: Option<&MeetingMetadata>,
    ) -> Result<Vec<u8>, ExportError>;

    fn file_extension(&self) -> &'static str;

    fn content_type(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("document rendering failed: {0}")]
    RenderFailed(String),
}
