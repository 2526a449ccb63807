use std::borrow::Cow;
use std::sync::Arc;

use crate::application::ports::{
    AudioDecoder, AudioDecoderError, AudioTranscoder, TranscoderError,
};
use crate::domain::{AudioBlob, AudioFormat, PreparationMode, Waveform};

/// Output of the normalization step: either a fully decoded waveform (ready
/// for local segmentation) or a byte buffer forwarded to the service as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedAudio {
    Waveform(Waveform),
    Passthrough { data: Vec<u8>, filename: String },
}

/// Format normalizer. Containers the service accepts natively may skip local
/// work entirely (passthrough); aac/amr always go through the external
/// transcoder first, in either mode.
pub struct AudioPreparation {
    decoder: Arc<dyn AudioDecoder>,
    transcoder: Arc<dyn AudioTranscoder>,
}

impl AudioPreparation {
    pub fn new(decoder: Arc<dyn AudioDecoder>, transcoder: Arc<dyn AudioTranscoder>) -> Self {
        Self {
            decoder,
            transcoder,
        }
    }

    pub fn prepare(
        &self,
        blob: &AudioBlob,
        format: AudioFormat,
        mode: PreparationMode,
    ) -> Result<PreparedAudio, AudioPreparationError> {
        match mode {
            PreparationMode::Decode => {
                let bytes: Cow<'_, [u8]> = if format.requires_transcoding() {
                    Cow::Owned(self.transcoder.transcode_to_wav(blob.data(), format)?)
                } else {
                    Cow::Borrowed(blob.data())
                };

                let waveform = self.decoder.decode(&bytes)?;
                tracing::debug!(
                    duration_secs = waveform.duration_seconds(),
                    samples = waveform.samples().len(),
                    "Upload decoded to 16kHz mono waveform"
                );
                Ok(PreparedAudio::Waveform(waveform))
            }
            PreparationMode::Passthrough => {
                if format.requires_transcoding() {
                    let wav = self.transcoder.transcode_to_wav(blob.data(), format)?;
                    tracing::debug!(
                        source_format = format.extension(),
                        wav_bytes = wav.len(),
                        "Upload converted for direct submission"
                    );
                    Ok(PreparedAudio::Passthrough {
                        data: wav,
                        filename: "converted.wav".to_string(),
                    })
                } else {
                    Ok(PreparedAudio::Passthrough {
                        data: blob.data().to_vec(),
                        filename: blob.filename().to_string(),
                    })
                }
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AudioPreparationError {
    #[error("conversion: {0}")]
    Conversion(#[from] TranscoderError),
    #[error("decoding: {0}")]
    Decoding(#[from] AudioDecoderError),
}
