use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{JobStatus, SessionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(Uuid);

impl JobId {
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

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

/// What a finished run learned about the recording. Duration and cost are
/// only known on the decode path; a passthrough run reports neither.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionOutcome {
    pub duration_minutes: Option<f64>,
    pub estimated_cost_usd: Option<f64>,
    pub segment_count: u32,
}

/// One transcription run, tracked from upload to completion or failure.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub session_id: SessionId,
    pub status: JobStatus,
    pub segments_completed: u32,
    pub segments_total: u32,
    pub outcome: Option<TranscriptionOutcome>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn new(session_id: SessionId) -> Self {
        let now = Utc::now();
        Self {
            id: JobId::new(),
            session_id,
            status: JobStatus::Queued,
            segments_completed: 0,
            segments_total: 0,
            outcome: None,
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }
}
