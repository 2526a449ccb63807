use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::services::SummaryServiceError;
use crate::domain::{MeetingMetadata, SummaryStyle};
use crate::presentation::state::AppState;

use super::error_body;
use super::transcript::parse_session_id;

#[derive(Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub style: SummaryStyle,
    #[serde(default)]
    pub metadata: Option<MeetingMetadata>,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub session_id: String,
    pub style: String,
    pub summary: String,
}

/// Synchronous summarization of a session's transcript. Blocking on the LLM
/// round trip is deliberate; the caller waits for the finished report.
#[tracing::instrument(skip(state, request))]
pub async fn summary_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<SummaryRequest>,
) -> impl IntoResponse {
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .summary_service
        .summarize_session(id, request.style, request.metadata)
        .await
    {
        Ok(summary) => (
            StatusCode::OK,
            Json(SummaryResponse {
                session_id,
                style: request.style.to_string(),
                summary,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Summarization failed");
            let status = match &e {
                SummaryServiceError::NoTranscript => StatusCode::CONFLICT,
                SummaryServiceError::Session(_) => StatusCode::NOT_FOUND,
                SummaryServiceError::Summarization(_) => StatusCode::BAD_GATEWAY,
            };
            (status, error_body(e.to_string())).into_response()
        }
    }
}
