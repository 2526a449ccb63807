use rapporteur::application::ports::{JobStore, JobStoreError, SessionStore, SessionStoreError};
use rapporteur::domain::{Job, JobId, JobStatus, SessionId, Transcript, TranscriptionOutcome};
use rapporteur::infrastructure::persistence::{InMemoryJobStore, InMemorySessionStore};

#[tokio::test]
async fn given_created_job_when_fetching_then_round_trips() {
    let store = InMemoryJobStore::new();
    let job = Job::new(SessionId::new());
    let job_id = job.id;

    store.create(job).await.unwrap();
    let fetched = store.get(job_id).await.unwrap().unwrap();

    assert_eq!(fetched.id, job_id);
    assert_eq!(fetched.status, JobStatus::Queued);
    assert_eq!(fetched.segments_total, 0);
}

#[tokio::test]
async fn given_status_and_progress_updates_when_fetching_then_reflected() {
    let store = InMemoryJobStore::new();
    let job = Job::new(SessionId::new());
    let job_id = job.id;
    store.create(job).await.unwrap();

    store
        .update_status(job_id, JobStatus::Transcribing, None)
        .await
        .unwrap();
    store.update_progress(job_id, 2, 5).await.unwrap();

    let fetched = store.get(job_id).await.unwrap().unwrap();
    assert_eq!(fetched.status, JobStatus::Transcribing);
    assert_eq!(fetched.segments_completed, 2);
    assert_eq!(fetched.segments_total, 5);
    assert!(fetched.updated_at >= fetched.created_at);
}

#[tokio::test]
async fn given_failure_when_updating_status_then_error_message_recorded() {
    let store = InMemoryJobStore::new();
    let job = Job::new(SessionId::new());
    let job_id = job.id;
    store.create(job).await.unwrap();

    store
        .update_status(job_id, JobStatus::Failed, Some("transcription: boom"))
        .await
        .unwrap();

    let fetched = store.get(job_id).await.unwrap().unwrap();
    assert_eq!(fetched.status, JobStatus::Failed);
    assert_eq!(fetched.error_message.as_deref(), Some("transcription: boom"));
}

#[tokio::test]
async fn given_outcome_when_setting_then_stored_on_job() {
    let store = InMemoryJobStore::new();
    let job = Job::new(SessionId::new());
    let job_id = job.id;
    store.create(job).await.unwrap();

    let outcome = TranscriptionOutcome {
        duration_minutes: Some(12.0),
        estimated_cost_usd: Some(0.072),
        segment_count: 2,
    };
    store.set_outcome(job_id, outcome.clone()).await.unwrap();

    let fetched = store.get(job_id).await.unwrap().unwrap();
    assert_eq!(fetched.outcome, Some(outcome));
}

#[tokio::test]
async fn given_unknown_job_when_updating_then_not_found() {
    let store = InMemoryJobStore::new();

    let result = store.update_progress(JobId::new(), 1, 1).await;

    assert!(matches!(result, Err(JobStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_created_session_when_fetching_then_empty_session() {
    let store = InMemorySessionStore::new();

    let id = store.create().await;
    let session = store.get(id).await.unwrap();

    assert_eq!(session.id, id);
    assert!(session.transcript.is_none());
    assert!(session.summary.is_none());
}

#[tokio::test]
async fn given_new_transcript_when_setting_then_replaces_and_clears_stale_summary() {
    let store = InMemorySessionStore::new();
    let id = store.create().await;

    store
        .set_transcript(id, Transcript::plain("first run".to_string()))
        .await
        .unwrap();
    store
        .set_summary(id, "summary of first run".to_string())
        .await
        .unwrap();

    store
        .set_transcript(id, Transcript::plain("second run".to_string()))
        .await
        .unwrap();

    let session = store.get(id).await.unwrap();
    assert_eq!(session.transcript.unwrap().text, "second run");
    assert!(session.summary.is_none(), "stale summary must not survive re-transcription");
}

#[tokio::test]
async fn given_unknown_session_when_fetching_then_not_found() {
    let store = InMemorySessionStore::new();

    let result = store.get(SessionId::new()).await;

    assert!(matches!(result, Err(SessionStoreError::NotFound(_))));
}
