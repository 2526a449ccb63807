use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{Transcriber, TranscriberError};
use crate::domain::{AudioFormat, DiarizedSegment, SegmentTiming};

/// Speech-to-text client for the OpenAI-compatible `audio/transcriptions`
/// endpoint, covering both plain text and diarized JSON responses.
///
/// The credential is optional by construction; a missing key surfaces as
/// `Unconfigured` on the first call rather than a scattered null-check.
pub struct OpenAiTranscriber {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    diarized_model: String,
}

#[derive(Deserialize)]
struct DiarizedResponse {
    segments: Vec<DiarizedSegmentPayload>,
}

/// Loosely-typed wire shape: the service reports `start`/`end` as independent
/// optionals. Validation into the paired domain type happens here, at the
/// boundary.
#[derive(Deserialize)]
struct DiarizedSegmentPayload {
    speaker: String,
    #[serde(default)]
    start: Option<f32>,
    #[serde(default)]
    end: Option<f32>,
    text: String,
}

impl OpenAiTranscriber {
    pub fn new(
        api_key: Option<String>,
        base_url: String,
        model: String,
        diarized_model: String,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            diarized_model,
        }
    }

    fn credential(&self) -> Result<&str, TranscriberError> {
        self.api_key.as_deref().ok_or(TranscriberError::Unconfigured)
    }

    fn audio_part(audio: &[u8], filename: &str) -> Result<multipart::Part, TranscriberError> {
        let mime = filename
            .rsplit_once('.')
            .and_then(|(_, ext)| AudioFormat::from_extension(ext))
            .map(|f| f.mime())
            .unwrap_or("application/octet-stream");

        multipart::Part::bytes(audio.to_vec())
            .file_name(filename.to_string())
            .mime_str(mime)
            .map_err(|e| TranscriberError::ApiRequestFailed(format!("mime: {}", e)))
    }

    async fn post_form(
        &self,
        form: multipart::Form,
    ) -> Result<reqwest::Response, TranscriberError> {
        let key = self.credential()?;
        let url = format!("{}/audio/transcriptions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriberError::ApiRequestFailed(format!("request: {}", e)))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranscriberError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranscriberError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl Transcriber for OpenAiTranscriber {
    async fn transcribe(
        &self,
        audio: &[u8],
        filename: &str,
        language: &str,
    ) -> Result<String, TranscriberError> {
        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("language", language.to_string())
            .text("response_format", "text")
            .part("file", Self::audio_part(audio, filename)?);

        tracing::debug!(
            model = %self.model,
            filename,
            bytes = audio.len(),
            "Submitting audio for plain transcription"
        );

        let response = self.post_form(form).await?;

        let transcript = response
            .text()
            .await
            .map_err(|e| TranscriberError::ApiRequestFailed(format!("body: {}", e)))?;

        Ok(transcript.trim().to_string())
    }

    async fn transcribe_diarized(
        &self,
        audio: &[u8],
        filename: &str,
    ) -> Result<Vec<DiarizedSegment>, TranscriberError> {
        let form = multipart::Form::new()
            .text("model", self.diarized_model.clone())
            .text("response_format", "diarized_json")
            .text("chunking_strategy", "auto")
            .part("file", Self::audio_part(audio, filename)?);

        tracing::debug!(
            model = %self.diarized_model,
            filename,
            bytes = audio.len(),
            "Submitting audio for diarized transcription"
        );

        let response = self.post_form(form).await?;

        let payload: DiarizedResponse = response
            .json()
            .await
            .map_err(|e| TranscriberError::InvalidResponse(e.to_string()))?;

        payload
            .segments
            .into_iter()
            .map(validate_segment)
            .collect()
    }
}

fn validate_segment(payload: DiarizedSegmentPayload) -> Result<DiarizedSegment, TranscriberError> {
    let timing = match (payload.start, payload.end) {
        (Some(start_secs), Some(end_secs)) => Some(SegmentTiming {
            start_secs,
            end_secs,
        }),
        (None, None) => None,
        _ => {
            return Err(TranscriberError::InvalidResponse(format!(
                "segment for speaker {} has unpaired start/end offsets",
                payload.speaker
            )));
        }
    };

    Ok(DiarizedSegment {
        speaker: payload.speaker,
        timing,
        text: payload.text,
    })
}
