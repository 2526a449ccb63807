mod audio_blob;
mod job;
mod job_status;
mod meeting;
mod session;
mod summary_style;
mod transcript;
mod transcription_options;
mod waveform;

pub use audio_blob::{AudioBlob, AudioFormat};
pub use job::{Job, JobId, TranscriptionOutcome};
pub use job_status::JobStatus;
pub use meeting::MeetingMetadata;
pub use session::{MeetingSession, SessionId};
pub use summary_style::SummaryStyle;
pub use transcript::{DiarizedSegment, SegmentTiming, Transcript, TranscriptKind};
pub use transcription_options::{
    PreparationMode, TranscriptionMode, TranscriptionOptions, chunk_minutes_is_valid,
};
pub use waveform::{AudioSegment, SAMPLE_RATE_HZ, Waveform};
