use async_trait::async_trait;

use crate::domain::{MeetingMetadata, SummaryStyle};

/// Produces a structured meeting report from a finished transcript.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(
        &self,
        transcript: &str,
        metadata: Option<&MeetingMetadata>,
        style: SummaryStyle,
    ) -> Result<String, SummarizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("summarization service not configured: missing API credential")]
    Unconfigured,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
