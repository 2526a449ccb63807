use async_trait::async_trait;

use crate::domain::{MeetingMetadata, MeetingSession, SessionId, Transcript};

/// Transient session state: one writer (the transcription run), readers
/// afterwards. Setting a new transcript replaces the old one wholesale and
/// invalidates any summary derived from it.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self) -> SessionId;

    async fn get(&self, id: SessionId) -> Result<MeetingSession, SessionStoreError>;

    async fn set_transcript(
        &self,
        id: SessionId,
        transcript: Transcript,
    ) -> Result<(), SessionStoreError>;

    async fn set_metadata(
        &self,
        id: SessionId,
        metadata: MeetingMetadata,
    ) -> Result<(), SessionStoreError>;

    async fn set_summary(&self, id: SessionId, summary: String) -> Result<(), SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session not found: {0}")]
    NotFound(String),
}
