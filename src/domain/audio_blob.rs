/// An uploaded audio file, exactly as received: raw bytes plus the declared
/// filename. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBlob {
    filename: String,
    data: Vec<u8>,
}

impl AudioBlob {
    pub fn new(filename: String, data: Vec<u8>) -> Self {
        Self { filename, data }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }

    /// Declared extension, lowercased, without the dot.
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.filename.rsplit_once('.')?;
        if ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

/// Audio containers accepted at the upload boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Mp3,
    Wav,
    M4a,
    Aac,
    Amr,
}

impl AudioFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mp3" => Some(Self::Mp3),
            "wav" => Some(Self::Wav),
            "m4a" => Some(Self::M4a),
            "aac" => Some(Self::Aac),
            "amr" => Some(Self::Amr),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::M4a => "m4a",
            Self::Aac => "aac",
            Self::Amr => "amr",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::M4a => "audio/mp4",
            Self::Aac => "audio/aac",
            Self::Amr => "audio/amr",
        }
    }

    /// Containers the transcription service will not accept as-is; these must
    /// go through the external transcoder before submission.
    pub fn requires_transcoding(&self) -> bool {
        matches!(self, Self::Aac | Self::Amr)
    }
}
