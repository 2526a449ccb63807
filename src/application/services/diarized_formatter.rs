use std::fmt::Write;

use crate::domain::DiarizedSegment;

/// Renders diarized segments into one human-readable transcript string, one
/// line per segment, strictly in input order. The service's ordering is
/// assumed chronological; no sorting or speaker deduplication happens here.
pub fn format_diarized(segments: &[DiarizedSegment]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match &segment.timing {
            Some(timing) => {
                let _ = write!(
                    out,
                    "{} [{:.1}s–{:.1}s] : {}",
                    segment.speaker, timing.start_secs, timing.end_secs, segment.text
                );
            }
            None => {
                let _ = write!(out, "{} : {}", segment.speaker, segment.text);
            }
        }
    }
    out
}
