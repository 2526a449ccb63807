use std::sync::Arc;

use crate::application::ports::{SessionStore, SessionStoreError, Summarizer, SummarizerError};
use crate::domain::{MeetingMetadata, SessionId, SummaryStyle};

/// Turns a session's transcript into a styled meeting report and records the
/// result on the session.
pub struct SummaryService {
    summarizer: Arc<dyn Summarizer>,
    session_store: Arc<dyn SessionStore>,
}

impl SummaryService {
    pub fn new(summarizer: Arc<dyn Summarizer>, session_store: Arc<dyn SessionStore>) -> Self {
        Self {
            summarizer,
            session_store,
        }
    }

    pub async fn summarize_session(
        &self,
        session_id: SessionId,
        style: SummaryStyle,
        metadata: Option<MeetingMetadata>,
    ) -> Result<String, SummaryServiceError> {
        let session = self.session_store.get(session_id).await?;

        let transcript = session
            .transcript
            .ok_or(SummaryServiceError::NoTranscript)?;

        if let Some(meta) = &metadata {
            self.session_store
                .set_metadata(session_id, meta.clone())
                .await?;
        }
        let effective_metadata = metadata.or(session.metadata);

        tracing::debug!(
            style = %style,
            transcript_chars = transcript.text.len(),
            "Requesting meeting summary"
        );

        let summary = self
            .summarizer
            .summarize(&transcript.text, effective_metadata.as_ref(), style)
            .await?;

        self.session_store
            .set_summary(session_id, summary.clone())
            .await?;

        tracing::info!(chars = summary.len(), "Meeting summary generated");

        Ok(summary)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryServiceError {
    #[error("no transcript available: transcribe a recording first")]
    NoTranscript,
    #[error("session store: {0}")]
    Session(#[from] SessionStoreError),
    #[error("summarization: {0}")]
    Summarization(#[from] SummarizerError),
}
