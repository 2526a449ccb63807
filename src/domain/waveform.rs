/// Sample rate every decoded waveform is normalized to.
pub const SAMPLE_RATE_HZ: u32 = 16_000;

const SAMPLES_PER_MS: usize = (SAMPLE_RATE_HZ / 1000) as usize;

/// A decoded recording: mono f32 PCM at a fixed 16 kHz sample rate.
///
/// Segment extraction copies samples into new buffers; the waveform itself is
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f32>,
}

impl Waveform {
    pub fn from_samples(samples: Vec<f32>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_ms(&self) -> u64 {
        (self.samples.len() / SAMPLES_PER_MS) as u64
    }

    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / SAMPLE_RATE_HZ as f64
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration_seconds() / 60.0
    }

    /// The whole recording encoded as a PCM16 mono WAV file.
    pub fn to_wav_bytes(&self) -> Vec<u8> {
        encode_wav_pcm16(&self.samples)
    }
}

/// A contiguous sub-range `[start_ms, end_ms)` of a waveform, carrying its own
/// copy of the samples. Segments form an ordered sequence; reassembly relies
/// on that order, not on the timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSegment {
    samples: Vec<f32>,
    start_ms: u64,
    end_ms: u64,
}

impl AudioSegment {
    pub fn new(samples: Vec<f32>, start_ms: u64, end_ms: u64) -> Self {
        Self {
            samples,
            start_ms,
            end_ms,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }

    pub fn end_ms(&self) -> u64 {
        self.end_ms
    }

    pub fn duration_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }

    /// The segment encoded as a PCM16 mono WAV file, ready for submission to
    /// the transcription service.
    pub fn to_wav_bytes(&self) -> Vec<u8> {
        encode_wav_pcm16(&self.samples)
    }
}

/// Minimal RIFF/WAVE writer: 44-byte header + little-endian PCM16 payload.
fn encode_wav_pcm16(samples: &[f32]) -> Vec<u8> {
    let data_size = (samples.len() * 2) as u32;
    let byte_rate = SAMPLE_RATE_HZ * 2;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_size).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&SAMPLE_RATE_HZ.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &sample in samples {
        let clamped = sample.clamp(-1.0, 1.0);
        let quantized = (clamped * i16::MAX as f32) as i16;
        wav.extend_from_slice(&quantized.to_le_bytes());
    }
    wav
}
