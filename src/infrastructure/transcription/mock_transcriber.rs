use async_trait::async_trait;

use crate::application::ports::{Transcriber, TranscriberError};
use crate::domain::{DiarizedSegment, SegmentTiming};

/// Canned transcriber for tests and offline development.
pub struct MockTranscriber;

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(
        &self,
        _audio: &[u8],
        _filename: &str,
        _language: &str,
    ) -> Result<String, TranscriberError> {
        Ok("Mock transcript".to_string())
    }

    async fn transcribe_diarized(
        &self,
        _audio: &[u8],
        _filename: &str,
    ) -> Result<Vec<DiarizedSegment>, TranscriberError> {
        Ok(vec![
            DiarizedSegment {
                speaker: "A".to_string(),
                timing: Some(SegmentTiming {
                    start_secs: 0.0,
                    end_secs: 2.5,
                }),
                text: "Mock diarized line".to_string(),
            },
            DiarizedSegment {
                speaker: "B".to_string(),
                timing: None,
                text: "Mock reply".to_string(),
            },
        ])
    }
}
