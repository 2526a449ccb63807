use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::Instrument;

use crate::application::ports::{
    JobStore, JobStoreError, ProgressSink, SessionStore, SessionStoreError,
};
use crate::application::services::{
    AudioPreparation, AudioPreparationError, PreparedAudio, TranscriptionOrchestrator,
    TranscriptionRunError, estimate_transcription_cost, split_waveform,
};
use crate::domain::{
    AudioBlob, AudioFormat, JobId, JobStatus, SessionId, Transcript, TranscriptionMode,
    TranscriptionOptions, TranscriptionOutcome,
};

pub struct TranscriptionJobMessage {
    pub job_id: JobId,
    pub session_id: SessionId,
    pub blob: AudioBlob,
    pub format: AudioFormat,
    pub options: TranscriptionOptions,
}

/// Background task that drains queued transcription runs one at a time.
/// Each run owns its buffers exclusively; there is no cross-run sharing.
pub struct TranscriptionWorker {
    receiver: mpsc::Receiver<TranscriptionJobMessage>,
    preparation: AudioPreparation,
    orchestrator: TranscriptionOrchestrator,
    job_store: Arc<dyn JobStore>,
    session_store: Arc<dyn SessionStore>,
    price_per_minute_usd: f64,
}

impl TranscriptionWorker {
    pub fn new(
        receiver: mpsc::Receiver<TranscriptionJobMessage>,
        preparation: AudioPreparation,
        orchestrator: TranscriptionOrchestrator,
        job_store: Arc<dyn JobStore>,
        session_store: Arc<dyn SessionStore>,
        price_per_minute_usd: f64,
    ) -> Self {
        Self {
            receiver,
            preparation,
            orchestrator,
            job_store,
            session_store,
            price_per_minute_usd,
        }
    }

    pub async fn run(mut self) {
        tracing::info!("Transcription worker started");
        while let Some(msg) = self.receiver.recv().await {
            let span = tracing::info_span!(
                "transcription_job",
                job_id = %msg.job_id.as_uuid(),
                session_id = %msg.session_id.as_uuid(),
                filename = %msg.blob.filename(),
            );

            async {
                if let Err(e) = self.process_job(msg).await {
                    tracing::error!(error = %e, "Transcription job failed");
                }
            }
            .instrument(span)
            .await;
        }
        tracing::info!("Transcription worker stopped: channel closed");
    }

    async fn process_job(&self, msg: TranscriptionJobMessage) -> Result<(), PipelineError> {
        let job_id = msg.job_id;

        self.job_store
            .update_status(job_id, JobStatus::Preparing, None)
            .await?;

        let result = self.run_pipeline(&msg).await;

        match &result {
            Ok(outcome) => {
                self.job_store.set_outcome(job_id, outcome.clone()).await?;
                self.job_store
                    .update_status(job_id, JobStatus::Completed, None)
                    .await?;
                tracing::info!(segments = outcome.segment_count, "Transcription run completed");
            }
            Err(e) => {
                let error_msg = e.to_string();
                self.job_store
                    .update_status(job_id, JobStatus::Failed, Some(&error_msg))
                    .await?;
            }
        }

        result.map(|_| ())
    }

    async fn run_pipeline(
        &self,
        msg: &TranscriptionJobMessage,
    ) -> Result<TranscriptionOutcome, PipelineError> {
        let job_id = msg.job_id;

        let prepared = self
            .preparation
            .prepare(&msg.blob, msg.format, msg.options.preparation)?;

        let (transcript, outcome) = match (msg.options.mode, prepared) {
            (TranscriptionMode::Segmented, PreparedAudio::Waveform(waveform)) => {
                let duration_minutes = waveform.duration_minutes();
                let estimated_cost =
                    estimate_transcription_cost(duration_minutes, self.price_per_minute_usd);

                self.job_store
                    .update_status(job_id, JobStatus::Segmenting, None)
                    .await?;
                let segments = split_waveform(&waveform, msg.options.max_chunk_ms);
                tracing::debug!(
                    segments = segments.len(),
                    max_chunk_ms = msg.options.max_chunk_ms,
                    "Waveform segmented"
                );

                self.job_store
                    .update_status(job_id, JobStatus::Transcribing, None)
                    .await?;
                self.job_store
                    .update_progress(job_id, 0, segments.len() as u32)
                    .await?;

                let sink = JobProgress {
                    job_store: Arc::clone(&self.job_store),
                    job_id,
                };
                let transcript = self
                    .orchestrator
                    .transcribe_segments(&segments, &sink)
                    .await?;

                let outcome = TranscriptionOutcome {
                    duration_minutes: Some(duration_minutes),
                    estimated_cost_usd: Some(estimated_cost),
                    segment_count: segments.len() as u32,
                };
                (transcript, outcome)
            }
            (TranscriptionMode::Segmented, PreparedAudio::Passthrough { data, filename }) => {
                self.job_store
                    .update_status(job_id, JobStatus::Transcribing, None)
                    .await?;
                self.job_store.update_progress(job_id, 0, 1).await?;

                let transcript = self.orchestrator.transcribe_single(&data, &filename).await?;

                self.job_store.update_progress(job_id, 1, 1).await?;
                let outcome = TranscriptionOutcome {
                    duration_minutes: None,
                    estimated_cost_usd: None,
                    segment_count: 1,
                };
                (transcript, outcome)
            }
            (TranscriptionMode::Diarized, prepared) => {
                self.diarized_run(job_id, prepared).await?
            }
        };

        self.session_store
            .set_transcript(msg.session_id, transcript)
            .await?;

        Ok(outcome)
    }

    async fn diarized_run(
        &self,
        job_id: JobId,
        prepared: PreparedAudio,
    ) -> Result<(Transcript, TranscriptionOutcome), PipelineError> {
        self.job_store
            .update_status(job_id, JobStatus::Transcribing, None)
            .await?;
        self.job_store.update_progress(job_id, 0, 1).await?;

        let (transcript, duration_minutes) = match prepared {
            PreparedAudio::Waveform(waveform) => {
                let duration = waveform.duration_minutes();
                let wav = waveform.to_wav_bytes();
                let transcript = self
                    .orchestrator
                    .transcribe_diarized_to_transcript(&wav, "audio.wav")
                    .await?;
                (transcript, Some(duration))
            }
            PreparedAudio::Passthrough { data, filename } => {
                let transcript = self
                    .orchestrator
                    .transcribe_diarized_to_transcript(&data, &filename)
                    .await?;
                (transcript, None)
            }
        };

        self.job_store.update_progress(job_id, 1, 1).await?;

        let outcome = TranscriptionOutcome {
            duration_minutes,
            estimated_cost_usd: duration_minutes
                .map(|m| estimate_transcription_cost(m, self.price_per_minute_usd)),
            segment_count: 1,
        };
        Ok((transcript, outcome))
    }
}

/// Progress sink that mirrors segment completions into the job store. A lost
/// progress update is logged, not fatal; the run itself keeps going.
struct JobProgress {
    job_store: Arc<dyn JobStore>,
    job_id: JobId,
}

#[async_trait]
impl ProgressSink for JobProgress {
    async fn on_segment_transcribed(&self, completed: usize, total: usize) {
        if let Err(e) = self
            .job_store
            .update_progress(self.job_id, completed as u32, total as u32)
            .await
        {
            tracing::warn!(error = %e, completed, total, "Failed to record segment progress");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("audio preparation: {0}")]
    Preparation(#[from] AudioPreparationError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionRunError),
    #[error("session store: {0}")]
    Session(#[from] SessionStoreError),
    #[error("job store: {0}")]
    JobStore(#[from] JobStoreError),
}
