use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::application::ports::{JobStore, JobStoreError};
use crate::domain::{Job, JobId, JobStatus, TranscriptionOutcome};

/// Process-local job tracking; everything is gone on restart, by design.
pub struct InMemoryJobStore {
    jobs: RwLock<HashMap<JobId, Job>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
        }
    }

    async fn update<F>(&self, id: JobId, apply: F) -> Result<(), JobStoreError>
    where
        F: FnOnce(&mut Job),
    {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&id)
            .ok_or_else(|| JobStoreError::NotFound(id.as_uuid().to_string()))?;
        apply(job);
        job.updated_at = Utc::now();
        Ok(())
    }
}

impl Default for InMemoryJobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn create(&self, job: Job) -> Result<(), JobStoreError> {
        self.jobs.write().await.insert(job.id, job);
        Ok(())
    }

    async fn get(&self, id: JobId) -> Result<Option<Job>, JobStoreError> {
        Ok(self.jobs.read().await.get(&id).cloned())
    }

    async fn update_status(
        &self,
        id: JobId,
        status: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), JobStoreError> {
        self.update(id, |job| {
            job.status = status;
            job.error_message = error_message.map(String::from);
        })
        .await
    }

    async fn update_progress(
        &self,
        id: JobId,
        completed: u32,
        total: u32,
    ) -> Result<(), JobStoreError> {
        self.update(id, |job| {
            job.segments_completed = completed;
            job.segments_total = total;
        })
        .await
    }

    async fn set_outcome(
        &self,
        id: JobId,
        outcome: TranscriptionOutcome,
    ) -> Result<(), JobStoreError> {
        self.update(id, |job| job.outcome = Some(outcome)).await
    }
}
