use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use rapporteur::application::ports::{Summarizer, SummarizerError};
use rapporteur::domain::{MeetingMetadata, SummaryStyle};
use rapporteur::infrastructure::llm::OpenAiSummarizer;

async fn start_mock_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/chat/completions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn summarizer(api_key: Option<&str>, base_url: &str) -> OpenAiSummarizer {
    OpenAiSummarizer::new(
        api_key.map(String::from),
        base_url.to_string(),
        "gpt-4o-mini".to_string(),
        2048,
        0.3,
    )
}

#[tokio::test]
async fn given_transcript_when_summarizing_then_returns_completion_content() {
    let body = r#"{"choices": [{"message": {"role": "assistant", "content": "Key decisions..."}}]}"#;
    let (base_url, shutdown_tx) = start_mock_server(200, body).await;

    let client = summarizer(Some("test-key"), &base_url);
    let result = client
        .summarize("A : hi\nB : bye", None, SummaryStyle::Professional)
        .await;

    assert_eq!(result.unwrap(), "Key decisions...");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_metadata_when_summarizing_then_request_still_succeeds() {
    let body = r#"{"choices": [{"message": {"role": "assistant", "content": "ok"}}]}"#;
    let (base_url, shutdown_tx) = start_mock_server(200, body).await;

    let metadata = MeetingMetadata {
        title: Some("Weekly sync".to_string()),
        ..Default::default()
    };
    let client = summarizer(Some("test-key"), &base_url);
    let result = client
        .summarize("transcript", Some(&metadata), SummaryStyle::DetailedMinutes)
        .await;

    assert!(result.is_ok());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_missing_credential_when_summarizing_then_unconfigured() {
    let client = summarizer(None, "http://127.0.0.1:9");

    let result = client.summarize("text", None, SummaryStyle::Professional).await;

    assert!(matches!(result, Err(SummarizerError::Unconfigured)));
}

#[tokio::test]
async fn given_server_error_when_summarizing_then_api_error() {
    let (base_url, shutdown_tx) = start_mock_server(500, "internal error").await;

    let client = summarizer(Some("test-key"), &base_url);
    let result = client.summarize("text", None, SummaryStyle::BulletPoints).await;

    assert!(matches!(result, Err(SummarizerError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_429_when_summarizing_then_rate_limited() {
    let (base_url, shutdown_tx) = start_mock_server(429, "slow down").await;

    let client = summarizer(Some("test-key"), &base_url);
    let result = client.summarize("text", None, SummaryStyle::Professional).await;

    assert!(matches!(result, Err(SummarizerError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_summarizing_then_invalid_response() {
    let (base_url, shutdown_tx) = start_mock_server(200, r#"{"choices": []}"#).await;

    let client = summarizer(Some("test-key"), &base_url);
    let result = client.summarize("text", None, SummaryStyle::Professional).await;

    assert!(matches!(result, Err(SummarizerError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}
