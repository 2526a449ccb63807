mod audio_preparation;
mod cost;
mod diarized_formatter;
mod segmenter;
mod summary_service;
mod transcription_orchestrator;
mod transcription_worker;
mod upload_policy;

pub use audio_preparation::{AudioPreparation, AudioPreparationError, PreparedAudio};
pub use cost::estimate_transcription_cost;
pub use diarized_formatter::format_diarized;
pub use segmenter::split_waveform;
pub use summary_service::{SummaryService, SummaryServiceError};
pub use transcription_orchestrator::{TranscriptionOrchestrator, TranscriptionRunError};
pub use transcription_worker::{PipelineError, TranscriptionJobMessage, TranscriptionWorker};
pub use upload_policy::{DIARIZATION_MAX_BYTES, UploadPolicy, UploadPolicyError};
