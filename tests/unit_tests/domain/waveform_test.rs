use rapporteur::domain::{AudioSegment, SAMPLE_RATE_HZ, Waveform};

#[test]
fn given_one_second_of_samples_when_reading_duration_then_1000ms() {
    let waveform = Waveform::from_samples(vec![0.0; SAMPLE_RATE_HZ as usize]);

    assert_eq!(waveform.duration_ms(), 1000);
    assert!((waveform.duration_seconds() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn given_three_minutes_of_samples_when_reading_duration_then_three_minutes() {
    let waveform = Waveform::from_samples(vec![0.0; 3 * 60 * SAMPLE_RATE_HZ as usize]);

    assert!((waveform.duration_minutes() - 3.0).abs() < 1e-9);
}

#[test]
fn given_waveform_when_encoding_wav_then_header_and_payload_are_consistent() {
    let waveform = Waveform::from_samples(vec![0.0; 160]);

    let wav = waveform.to_wav_bytes();

    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(wav.len(), 44 + 160 * 2);
    // sample rate field
    let rate = u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]);
    assert_eq!(rate, SAMPLE_RATE_HZ);
    // data chunk size field
    let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
    assert_eq!(data_size, 320);
}

#[test]
fn given_out_of_range_samples_when_encoding_wav_then_clamped_to_pcm16_range() {
    let segment = AudioSegment::new(vec![2.0, -2.0], 0, 1);

    let wav = segment.to_wav_bytes();
    let payload = &wav[44..];

    assert_eq!(&payload[0..2], &i16::MAX.to_le_bytes());
    assert_eq!(&payload[2..4], &(-i16::MAX).to_le_bytes());
}

#[test]
fn given_segment_bounds_when_reading_duration_then_difference_of_bounds() {
    let segment = AudioSegment::new(vec![0.0; 1600], 2000, 2100);

    assert_eq!(segment.start_ms(), 2000);
    assert_eq!(segment.end_ms(), 2100);
    assert_eq!(segment.duration_ms(), 100);
}
