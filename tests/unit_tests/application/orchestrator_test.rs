use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use rapporteur::application::ports::{NoProgress, ProgressSink, Transcriber, TranscriberError};
use rapporteur::application::services::{
    TranscriptionOrchestrator, TranscriptionRunError, split_waveform,
};
use rapporteur::domain::{AudioSegment, DiarizedSegment, SegmentTiming, TranscriptKind, Waveform};

/// Transcriber that answers with the submitted payload size, making
/// reassembly order observable from the output text.
struct EchoTranscriber;

#[async_trait]
impl Transcriber for EchoTranscriber {
    async fn transcribe(
        &self,
        audio: &[u8],
        _filename: &str,
        _language: &str,
    ) -> Result<String, TranscriberError> {
        Ok(format!("len:{}", audio.len()))
    }

    async fn transcribe_diarized(
        &self,
        _audio: &[u8],
        _filename: &str,
    ) -> Result<Vec<DiarizedSegment>, TranscriberError> {
        Ok(vec![
            DiarizedSegment {
                speaker: "A".to_string(),
                timing: Some(SegmentTiming {
                    start_secs: 0.0,
                    end_secs: 5.2,
                }),
                text: "hi".to_string(),
            },
            DiarizedSegment {
                speaker: "B".to_string(),
                timing: None,
                text: "bye".to_string(),
            },
        ])
    }
}

/// Fails the nth plain request, counting calls.
struct FailingTranscriber {
    fail_at_call: usize,
    calls: AtomicUsize,
}

#[async_trait]
impl Transcriber for FailingTranscriber {
    async fn transcribe(
        &self,
        _audio: &[u8],
        _filename: &str,
        _language: &str,
    ) -> Result<String, TranscriberError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call == self.fail_at_call {
            Err(TranscriberError::ApiRequestFailed("boom".to_string()))
        } else {
            Ok("ok".to_string())
        }
    }

    async fn transcribe_diarized(
        &self,
        _audio: &[u8],
        _filename: &str,
    ) -> Result<Vec<DiarizedSegment>, TranscriberError> {
        Err(TranscriberError::ApiRequestFailed("unexpected".to_string()))
    }
}

struct RecordingProgress {
    updates: Mutex<Vec<(usize, usize)>>,
}

#[async_trait]
impl ProgressSink for RecordingProgress {
    async fn on_segment_transcribed(&self, completed: usize, total: usize) {
        self.updates.lock().await.push((completed, total));
    }
}

fn orchestrator(transcriber: Arc<dyn Transcriber>) -> TranscriptionOrchestrator {
    TranscriptionOrchestrator::new(transcriber, "fr".to_string())
}

fn segments_of_lengths(lengths: &[usize]) -> Vec<AudioSegment> {
    lengths
        .iter()
        .enumerate()
        .map(|(i, &len)| AudioSegment::new(vec![0.0; len], i as u64 * 1000, (i as u64 + 1) * 1000))
        .collect()
}

#[tokio::test]
async fn given_two_segments_when_transcribing_then_texts_joined_in_submission_order() {
    let orchestrator = orchestrator(Arc::new(EchoTranscriber));
    // WAV payloads: 44-byte header + 2 bytes per sample.
    let segments = segments_of_lengths(&[160, 320]);

    let transcript = orchestrator
        .transcribe_segments(&segments, &NoProgress)
        .await
        .unwrap();

    assert_eq!(transcript.kind, TranscriptKind::Plain);
    assert_eq!(transcript.text, "len:364\n\nlen:684");
}

#[tokio::test]
async fn given_reordered_segments_when_transcribing_then_output_reordered_identically() {
    let orchestrator = orchestrator(Arc::new(EchoTranscriber));
    let segments = segments_of_lengths(&[320, 160]);

    let transcript = orchestrator
        .transcribe_segments(&segments, &NoProgress)
        .await
        .unwrap();

    assert_eq!(transcript.text, "len:684\n\nlen:364");
}

#[tokio::test]
async fn given_three_segments_when_transcribing_then_progress_reported_per_segment() {
    let orchestrator = orchestrator(Arc::new(EchoTranscriber));
    let segments = segments_of_lengths(&[16, 16, 16]);
    let progress = RecordingProgress {
        updates: Mutex::new(Vec::new()),
    };

    orchestrator
        .transcribe_segments(&segments, &progress)
        .await
        .unwrap();

    let updates = progress.updates.lock().await;
    assert_eq!(*updates, vec![(1, 3), (2, 3), (3, 3)]);
}

#[tokio::test]
async fn given_second_segment_fails_when_transcribing_then_run_aborts_with_index() {
    let transcriber = Arc::new(FailingTranscriber {
        fail_at_call: 1,
        calls: AtomicUsize::new(0),
    });
    let orchestrator = orchestrator(transcriber.clone());
    let segments = segments_of_lengths(&[16, 16, 16]);

    let result = orchestrator.transcribe_segments(&segments, &NoProgress).await;

    match result {
        Err(TranscriptionRunError::TranscriptionFailed { segment_index, .. }) => {
            assert_eq!(segment_index, 1);
        }
        other => panic!("expected TranscriptionFailed, got {:?}", other.map(|t| t.text)),
    }
    // The run stopped at the failure; the third segment was never submitted.
    assert_eq!(transcriber.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn given_segmented_clip_when_transcribing_then_segment_count_matches_split() {
    let orchestrator = orchestrator(Arc::new(EchoTranscriber));
    let waveform = Waveform::from_samples(vec![0.0; 16_000 * 3]);
    let segments = split_waveform(&waveform, 1000);
    let progress = RecordingProgress {
        updates: Mutex::new(Vec::new()),
    };

    let transcript = orchestrator
        .transcribe_segments(&segments, &progress)
        .await
        .unwrap();

    assert_eq!(transcript.text.split("\n\n").count(), 3);
    assert_eq!(progress.updates.lock().await.len(), 3);
}

#[tokio::test]
async fn given_raw_buffer_when_single_shot_transcribing_then_plain_transcript() {
    let orchestrator = orchestrator(Arc::new(EchoTranscriber));

    let transcript = orchestrator
        .transcribe_single(&[0u8; 100], "meeting.mp3")
        .await
        .unwrap();

    assert_eq!(transcript.kind, TranscriptKind::Plain);
    assert_eq!(transcript.text, "len:100");
}

#[tokio::test]
async fn given_diarized_run_when_formatting_then_service_order_rendered() {
    let orchestrator = orchestrator(Arc::new(EchoTranscriber));

    let transcript = orchestrator
        .transcribe_diarized_to_transcript(&[0u8; 10], "meeting.wav")
        .await
        .unwrap();

    assert_eq!(transcript.kind, TranscriptKind::Diarized);
    assert_eq!(transcript.text, "A [0.0s–5.2s] : hi\nB : bye");
}
