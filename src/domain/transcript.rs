/// Start/end offsets of a diarized segment, in seconds. The service reports
/// them as independently optional fields; this type exists so a segment can
/// only ever carry both or neither.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentTiming {
    pub start_secs: f32,
    pub end_secs: f32,
}

/// One speaker-labeled piece of a diarized transcription, in service order.
/// The speaker label is opaque; the service assigns whatever it assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct DiarizedSegment {
    pub speaker: String,
    pub timing: Option<SegmentTiming>,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptKind {
    Plain,
    Diarized,
}

/// The finished transcript of a run: a single joined string, the sole
/// artifact handed to the summarizer. Replaced wholesale on re-transcription.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub kind: TranscriptKind,
    pub text: String,
}

impl Transcript {
    pub fn plain(text: String) -> Self {
        Self {
            kind: TranscriptKind::Plain,
            text,
        }
    }

    pub fn diarized(text: String) -> Self {
        Self {
            kind: TranscriptKind::Diarized,
            text,
        }
    }
}
