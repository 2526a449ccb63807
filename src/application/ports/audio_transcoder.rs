use crate::domain::AudioFormat;

/// External transcoding process wrapper. Converts a container the
/// transcription service will not accept into mono 16 kHz WAV bytes.
///
/// Implementations must clean up any transient files on every exit path,
/// including failures.
pub trait AudioTranscoder: Send + Sync {
    fn transcode_to_wav(&self, data: &[u8], format: AudioFormat)
        -> Result<Vec<u8>, TranscoderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscoderError {
    #[error("transcoder unavailable: {0}")]
    Unavailable(String),
    #[error("conversion failed: {0}")]
    ConversionFailed(String),
    #[error("transcoder io: {0}")]
    Io(#[from] std::io::Error),
}
