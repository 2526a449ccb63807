use crate::domain::{AudioBlob, AudioFormat, PreparationMode, TranscriptionMode};

/// Hard per-request ceiling imposed by the transcription service (25 MiB).
/// Diarized runs and single-shot passthrough runs are bounded by it.
pub const DIARIZATION_MAX_BYTES: u64 = 25 * 1024 * 1024;

/// Pure upload validation. Runs before any decoding or subprocess work; a
/// rejection here costs nothing.
#[derive(Debug, Clone, Copy)]
pub struct UploadPolicy {
    max_upload_bytes: u64,
}

impl UploadPolicy {
    pub fn new(max_upload_bytes: u64) -> Self {
        Self { max_upload_bytes }
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    pub fn validate(
        &self,
        blob: &AudioBlob,
        mode: TranscriptionMode,
        preparation: PreparationMode,
    ) -> Result<AudioFormat, UploadPolicyError> {
        let extension = blob
            .extension()
            .unwrap_or_else(|| "(no extension)".to_string());
        let format = AudioFormat::from_extension(&extension)
            .ok_or(UploadPolicyError::UnsupportedFormat(extension))?;

        let size = blob.size_bytes();
        match (mode, preparation) {
            (TranscriptionMode::Diarized, _) => {
                // The service cannot reassemble diarization across requests,
                // so there is no segmentation escape hatch here.
                if size > DIARIZATION_MAX_BYTES {
                    return Err(UploadPolicyError::FileTooLargeForDiarization {
                        size_bytes: size,
                        limit_bytes: DIARIZATION_MAX_BYTES,
                    });
                }
            }
            (TranscriptionMode::Segmented, PreparationMode::Passthrough) => {
                // Single-shot forward: the service's own request ceiling
                // applies since nothing is chunked locally.
                if size > DIARIZATION_MAX_BYTES {
                    return Err(UploadPolicyError::FileTooLarge {
                        size_bytes: size,
                        limit_bytes: DIARIZATION_MAX_BYTES,
                    });
                }
            }
            (TranscriptionMode::Segmented, PreparationMode::Decode) => {
                if size > self.max_upload_bytes {
                    return Err(UploadPolicyError::FileTooLarge {
                        size_bytes: size,
                        limit_bytes: self.max_upload_bytes,
                    });
                }
            }
        }

        Ok(format)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UploadPolicyError {
    #[error("file too large: {size_bytes} bytes (limit {limit_bytes})")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error(
        "file too large for diarization: {size_bytes} bytes (limit {limit_bytes}); \
         use segmented transcription instead"
    )]
    FileTooLargeForDiarization { size_bytes: u64, limit_bytes: u64 },
}
