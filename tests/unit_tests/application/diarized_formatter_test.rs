use rapporteur::application::services::format_diarized;
use rapporteur::domain::{DiarizedSegment, SegmentTiming};

fn segment(speaker: &str, timing: Option<(f32, f32)>, text: &str) -> DiarizedSegment {
    DiarizedSegment {
        speaker: speaker.to_string(),
        timing: timing.map(|(start_secs, end_secs)| SegmentTiming {
            start_secs,
            end_secs,
        }),
        text: text.to_string(),
    }
}

#[test]
fn given_timed_segments_when_formatting_then_exact_line_rendering() {
    let segments = vec![
        segment("A", Some((0.0, 5.2)), "hi"),
        segment("B", Some((5.2, 9.0)), "bye"),
    ];

    let formatted = format_diarized(&segments);

    assert_eq!(formatted, "A [0.0s–5.2s] : hi\nB [5.2s–9.0s] : bye");
}

#[test]
fn given_segment_without_timing_when_formatting_then_label_and_text_only() {
    let segments = vec![segment("A", None, "hello there")];

    assert_eq!(format_diarized(&segments), "A : hello there");
}

#[test]
fn given_interleaved_speakers_when_formatting_then_input_order_preserved() {
    let segments = vec![
        segment("B", Some((0.0, 1.0)), "first"),
        segment("A", Some((1.0, 2.0)), "second"),
        segment("B", Some((2.0, 3.0)), "third"),
    ];

    let formatted = format_diarized(&segments);

    let lines: Vec<&str> = formatted.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("B "));
    assert!(lines[1].starts_with("A "));
    assert!(lines[2].starts_with("B "));
}

#[test]
fn given_no_segments_when_formatting_then_empty_string() {
    assert_eq!(format_diarized(&[]), "");
}

#[test]
fn given_fractional_offsets_when_formatting_then_one_decimal_place() {
    let segments = vec![segment("C", Some((12.34, 56.78)), "ok")];

    assert_eq!(format_diarized(&segments), "C [12.3s–56.8s] : ok");
}
