use std::str::FromStr;

/// How a run submits audio to the transcription service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionMode {
    /// Plain transcription; long recordings are handled locally (chunking or
    /// single-shot forward depending on the preparation mode).
    Segmented,
    /// Speaker-labeled transcription. One request, no local chunking; the
    /// service imposes a hard per-request size ceiling.
    Diarized,
}

impl FromStr for TranscriptionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "segmented" => Ok(TranscriptionMode::Segmented),
            "diarized" => Ok(TranscriptionMode::Diarized),
            other => Err(format!(
                "Invalid transcription mode: {}. Expected: segmented or diarized",
                other
            )),
        }
    }
}

/// How the upload is normalized before submission. Both are deliberate,
/// selectable behaviors, not a fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreparationMode {
    /// Decode to a mono 16 kHz waveform locally, enabling duration/cost
    /// reporting and chunked transcription.
    Decode,
    /// Forward the raw upload bytes as-is (cheaper); containers the service
    /// rejects are still converted first.
    Passthrough,
}

impl PreparationMode {
    pub fn default_for(mode: TranscriptionMode) -> Self {
        match mode {
            TranscriptionMode::Segmented => PreparationMode::Decode,
            TranscriptionMode::Diarized => PreparationMode::Passthrough,
        }
    }
}

impl FromStr for PreparationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "decode" => Ok(PreparationMode::Decode),
            "passthrough" => Ok(PreparationMode::Passthrough),
            other => Err(format!(
                "Invalid preparation mode: {}. Expected: decode or passthrough",
                other
            )),
        }
    }
}

/// Per-run options fixed at upload time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptionOptions {
    pub mode: TranscriptionMode,
    pub preparation: PreparationMode,
    pub max_chunk_ms: u64,
}

impl TranscriptionOptions {
    pub fn new(mode: TranscriptionMode, preparation: PreparationMode, chunk_minutes: u64) -> Self {
        Self {
            mode,
            preparation,
            max_chunk_ms: chunk_minutes * 60 * 1000,
        }
    }
}

/// Chunk lengths the service accepts: 5 to 20 minutes in 5-minute steps.
pub fn chunk_minutes_is_valid(minutes: u64) -> bool {
    (5..=20).contains(&minutes) && minutes % 5 == 0
}
