use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Summarizer, SummarizerError};
use crate::domain::{MeetingMetadata, SummaryStyle};
use crate::infrastructure::observability::log_preview;

const SYSTEM_INSTRUCTION: &str = "You are an assistant that writes meeting reports from \
transcripts. Be clear, structured, and faithful to the content; never invent decisions or \
figures. When the transcript carries speaker labels such as 'A' or 'B', explain in the report \
who each speaker appears to be (interviewer, guest, expert...) without inventing a real \
identity.";

/// Meeting-report generator backed by an OpenAI-compatible chat-completions
/// endpoint. One non-streaming request per summary.
pub struct OpenAiSummarizer {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiSummarizer {
    pub fn new(
        api_key: Option<String>,
        base_url: String,
        model: String,
        max_tokens: usize,
        temperature: f32,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            max_tokens,
            temperature,
        }
    }

    fn build_messages(
        transcript: &str,
        metadata: Option<&MeetingMetadata>,
        style: SummaryStyle,
    ) -> Vec<ChatMessage> {
        let mut user_prompt = String::new();
        user_prompt.push_str(style.instruction());
        user_prompt.push_str("\n\n");

        if let Some(meta) = metadata.filter(|m| !m.is_empty()) {
            user_prompt.push_str("Meeting details:\n");
            for line in meta.header_lines() {
                user_prompt.push_str(&line);
                user_prompt.push('\n');
            }
            user_prompt.push('\n');
        }

        user_prompt.push_str(
            "Here is the transcript of the meeting (possibly with speaker labels):\n\n",
        );
        user_prompt.push_str(transcript);
        user_prompt.push_str("\n\nNow produce the requested meeting report.");

        vec![
            ChatMessage {
                role: "system".to_string(),
                content: SYSTEM_INSTRUCTION.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user_prompt,
            },
        ]
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(
        &self,
        transcript: &str,
        metadata: Option<&MeetingMetadata>,
        style: SummaryStyle,
    ) -> Result<String, SummarizerError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(SummarizerError::Unconfigured)?;

        let messages = Self::build_messages(transcript, metadata, style);
        tracing::debug!(
            model = %self.model,
            style = %style,
            prompt = %log_preview(&messages[1].content),
            "Requesting chat completion"
        );

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizerError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SummarizerError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizerError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| SummarizerError::InvalidResponse("empty choices".to_string()))
    }
}
