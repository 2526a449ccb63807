use async_trait::async_trait;

use crate::domain::{Job, JobId, JobStatus, TranscriptionOutcome};

/// Tracking store for transcription runs. In-memory in this deployment;
/// nothing survives the process.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn create(&self, job: Job) -> Result<(), JobStoreError>;

    async fn get(&self, id: JobId) -> Result<Option<Job>, JobStoreError>;

    async fn update_status(
        &self,
        id: JobId,
        status: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), JobStoreError>;

    async fn update_progress(
        &self,
        id: JobId,
        completed: u32,
        total: u32,
    ) -> Result<(), JobStoreError>;

    async fn set_outcome(&self, id: JobId, outcome: TranscriptionOutcome)
        -> Result<(), JobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum JobStoreError {
    #[error("job not found: {0}")]
    NotFound(String),
}
