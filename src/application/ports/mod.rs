mod audio_decoder;
mod audio_transcoder;
mod exporter;
mod job_store;
mod progress;
mod session_store;
mod summarizer;
mod transcriber;

pub use audio_decoder::{AudioDecoder, AudioDecoderError};
pub use audio_transcoder::{AudioTranscoder, TranscoderError};
pub use exporter::{ExportError, SummaryExporter};
pub use job_store::{JobStore, JobStoreError};
pub use progress::{NoProgress, ProgressSink};
pub use session_store::{SessionStore, SessionStoreError};
pub use summarizer::{Summarizer, SummarizerError};
pub use transcriber::{Transcriber, TranscriberError};
