use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{MeetingMetadata, Transcript};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient per-upload state: the current transcript, metadata, and summary.
/// Lives in memory for the session lifetime only; the transcript is replaced
/// wholesale on re-transcription.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingSession {
    pub id: SessionId,
    pub transcript: Option<Transcript>,
    pub metadata: Option<MeetingMetadata>,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MeetingSession {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            transcript: None,
            metadata: None,
            summary: None,
            created_at: Utc::now(),
        }
    }
}

impl Default for MeetingSession {
    fn default() -> Self {
        Self::new()
    }
}
