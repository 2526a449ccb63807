use async_trait::async_trait;

use crate::application::ports::{Summarizer, SummarizerError};
use crate::domain::{MeetingMetadata, SummaryStyle};

/// Canned summarizer for tests and offline development.
pub struct MockSummarizer;

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(
        &self,
        _transcript: &str,
        _metadata: Option<&MeetingMetadata>,
        style: SummaryStyle,
    ) -> Result<String, SummarizerError> {
        Ok(format!("Mock {} summary", style))
    }
}
