use crate::domain::{AudioSegment, SAMPLE_RATE_HZ, Waveform};

/// Splits a waveform into ordered, contiguous, non-overlapping segments of at
/// most `max_chunk_ms` each. The segments cover the input exactly once: no
/// sample is dropped or duplicated at a boundary, the final segment is
/// whatever remains (no padding), and an input shorter than the maximum
/// yields a single whole-clip segment.
pub fn split_waveform(waveform: &Waveform, max_chunk_ms: u64) -> Vec<AudioSegment> {
    let samples = waveform.samples();
    let chunk_samples = (max_chunk_ms as usize) * (SAMPLE_RATE_HZ as usize) / 1000;
    if chunk_samples == 0 || samples.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(samples.len().div_ceil(chunk_samples));
    let mut start = 0usize;
    while start < samples.len() {
        let end = usize::min(start + chunk_samples, samples.len());
        segments.push(AudioSegment::new(
            samples[start..end].to_vec(),
            sample_index_to_ms(start),
            sample_index_to_ms(end),
        ));
        start = end;
    }

    segments
}

fn sample_index_to_ms(index: usize) -> u64 {
    (index as u64) * 1000 / SAMPLE_RATE_HZ as u64
}
