use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{SessionId, TranscriptKind};
use crate::presentation::state::AppState;

use super::error_body;

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub session_id: String,
    pub kind: String,
    pub text: String,
}

#[tracing::instrument(skip(state))]
pub async fn transcript_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let session = match state.session_store.get(id).await {
        Ok(s) => s,
        Err(e) => {
            return (StatusCode::NOT_FOUND, error_body(e.to_string())).into_response();
        }
    };

    match session.transcript {
        Some(transcript) => {
            let kind = match transcript.kind {
                TranscriptKind::Plain => "plain",
                TranscriptKind::Diarized => "diarized",
            };
            (
                StatusCode::OK,
                Json(TranscriptResponse {
                    session_id,
                    kind: kind.to_string(),
                    text: transcript.text,
                }),
            )
                .into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            error_body("No transcript yet: the transcription run has not completed"),
        )
            .into_response(),
    }
}

pub(crate) fn parse_session_id(raw: &str) -> Result<SessionId, axum::response::Response> {
    Uuid::parse_str(raw)
        .map(SessionId::from_uuid)
        .map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                error_body(format!("Invalid session ID: {}", raw)),
            )
                .into_response()
        })
}
