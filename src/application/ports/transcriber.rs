use async_trait::async_trait;

use crate::domain::DiarizedSegment;

/// Client for the external transcription service. One call per request; the
/// caller owns segmentation and reassembly.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Plain transcription of one audio buffer. `filename` must carry an
    /// extension the service recognizes; `language` is an ISO 639-1 hint.
    async fn transcribe(
        &self,
        audio: &[u8],
        filename: &str,
        language: &str,
    ) -> Result<String, TranscriberError>;

    /// Speaker-diarized transcription of one audio buffer. The service
    /// returns segments in chronological order and does not support
    /// multi-request reassembly.
    async fn transcribe_diarized(
        &self,
        audio: &[u8],
        filename: &str,
    ) -> Result<Vec<DiarizedSegment>, TranscriberError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriberError {
    #[error("transcription service not configured: missing API credential")]
    Unconfigured,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
