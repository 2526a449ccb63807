use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{SessionStore, SessionStoreError};
use crate::domain::{MeetingMetadata, MeetingSession, SessionId, Transcript};

/// Transient session state, held in memory for the process lifetime.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, MeetingSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    async fn update<F>(&self, id: SessionId, apply: F) -> Result<(), SessionStoreError>
    where
        F: FnOnce(&mut MeetingSession),
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| SessionStoreError::NotFound(id.as_uuid().to_string()))?;
        apply(session);
        Ok(())
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self) -> SessionId {
        let session = MeetingSession::new();
        let id = session.id;
        self.sessions.write().await.insert(id, session);
        id
    }

    async fn get(&self, id: SessionId) -> Result<MeetingSession, SessionStoreError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| SessionStoreError::NotFound(id.as_uuid().to_string()))
    }

    async fn set_transcript(
        &self,
        id: SessionId,
        transcript: Transcript,
    ) -> Result<(), SessionStoreError> {
        self.update(id, |session| {
            session.transcript = Some(transcript);
            // A summary derived from the previous transcript is stale.
            session.summary = None;
        })
        .await
    }

    async fn set_metadata(
        &self,
        id: SessionId,
        metadata: MeetingMetadata,
    ) -> Result<(), SessionStoreError> {
        self.update(id, |session| session.metadata = Some(metadata))
            .await
    }

    async fn set_summary(&self, id: SessionId, summary: String) -> Result<(), SessionStoreError> {
        self.update(id, |session| session.summary = Some(summary))
            .await
    }
}
