use std::sync::Arc;

use crate::application::ports::SummaryExporter;

use super::{MarkdownExporter, PdfExporter};

/// Export-format lookup for the HTTP surface.
pub struct ExporterRegistry {
    markdown: Arc<dyn SummaryExporter>,
    pdf: Arc<dyn SummaryExporter>,
}

impl ExporterRegistry {
    pub fn new() -> Self {
        Self {
            markdown: Arc::new(MarkdownExporter),
            pdf: Arc::new(PdfExporter),
        }
    }

    pub fn for_format(&self, format: &str) -> Option<&Arc<dyn SummaryExporter>> {
        match format {
            "markdown" | "md" => Some(&self.markdown),
            "pdf" => Some(&self.pdf),
            _ => None,
        }
    }
}

impl Default for ExporterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
