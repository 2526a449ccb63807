use std::sync::Arc;

use crate::application::ports::{ProgressSink, Transcriber, TranscriberError};
use crate::application::services::format_diarized;
use crate::domain::{AudioSegment, DiarizedSegment, Transcript};

/// Separator between per-segment texts in a reassembled plain transcript.
const SEGMENT_SEPARATOR: &str = "\n\n";

/// Drives one transcription run against the external service. Calls are
/// sequential and blocking; segment order is the reassembly order.
pub struct TranscriptionOrchestrator {
    transcriber: Arc<dyn Transcriber>,
    language: String,
}

impl TranscriptionOrchestrator {
    pub fn new(transcriber: Arc<dyn Transcriber>, language: String) -> Self {
        Self {
            transcriber,
            language,
        }
    }

    /// Plain segmented run: one request per segment, in order, reporting
    /// progress as each completes. Any failure aborts the whole run and
    /// discards the partial texts collected so far.
    pub async fn transcribe_segments(
        &self,
        segments: &[AudioSegment],
        progress: &dyn ProgressSink,
    ) -> Result<Transcript, TranscriptionRunError> {
        let total = segments.len();
        // Indexed slots rather than push-in-completion-order, so a future
        // bounded-concurrency dispatch can reuse the same reassembly.
        let mut parts: Vec<Option<String>> = vec![None; total];

        for (index, segment) in segments.iter().enumerate() {
            tracing::debug!(
                segment = index + 1,
                total,
                start_ms = segment.start_ms(),
                end_ms = segment.end_ms(),
                "Transcribing segment"
            );
            let text = self.submit_segment(index, segment).await?;
            parts[index] = Some(text);
            progress.on_segment_transcribed(index + 1, total).await;
        }

        let joined = parts
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(SEGMENT_SEPARATOR);

        tracing::info!(segments = total, chars = joined.len(), "Segmented transcription completed");

        Ok(Transcript::plain(joined))
    }

    /// Single-shot plain run over an already prepared buffer (passthrough).
    pub async fn transcribe_single(
        &self,
        audio: &[u8],
        filename: &str,
    ) -> Result<Transcript, TranscriptionRunError> {
        let text = self
            .transcriber
            .transcribe(audio, filename, &self.language)
            .await?;

        tracing::info!(chars = text.len(), "Single-request transcription completed");

        Ok(Transcript::plain(text))
    }

    /// Diarized run: exactly one request; the buffer must already be within
    /// the service's request ceiling (enforced at the upload boundary).
    pub async fn transcribe_diarized(
        &self,
        audio: &[u8],
        filename: &str,
    ) -> Result<Vec<DiarizedSegment>, TranscriptionRunError> {
        let segments = self.transcriber.transcribe_diarized(audio, filename).await?;

        tracing::info!(segments = segments.len(), "Diarized transcription completed");

        Ok(segments)
    }

    /// Diarized run rendered to a transcript string, in service order.
    pub async fn transcribe_diarized_to_transcript(
        &self,
        audio: &[u8],
        filename: &str,
    ) -> Result<Transcript, TranscriptionRunError> {
        let segments = self.transcribe_diarized(audio, filename).await?;
        Ok(Transcript::diarized(format_diarized(&segments)))
    }

    async fn submit_segment(
        &self,
        index: usize,
        segment: &AudioSegment,
    ) -> Result<String, TranscriptionRunError> {
        let wav = segment.to_wav_bytes();
        self.transcriber
            .transcribe(&wav, "segment.wav", &self.language)
            .await
            .map_err(|source| TranscriptionRunError::TranscriptionFailed {
                segment_index: index,
                source,
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionRunError {
    #[error("transcription failed on segment {segment_index}: {source}")]
    TranscriptionFailed {
        segment_index: usize,
        #[source]
        source: TranscriberError,
    },
    #[error("transcription failed: {0}")]
    RequestFailed(#[from] TranscriberError),
}
