use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::JobId;
use crate::presentation::state::AppState;

use super::error_body;

#[derive(Serialize)]
pub struct JobStatusResponse {
    pub id: String,
    pub session_id: String,
    pub status: String,
    pub segments_completed: u32,
    pub segments_total: u32,
    pub duration_minutes: Option<f64>,
    pub estimated_cost_usd: Option<f64>,
    pub error_message: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[tracing::instrument(skip(state))]
pub async fn job_status_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match Uuid::parse_str(&job_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                error_body(format!("Invalid job ID: {}", job_id)),
            )
                .into_response();
        }
    };

    match state.job_store.get(JobId::from_uuid(uuid)).await {
        Ok(Some(job)) => {
            let (duration_minutes, estimated_cost_usd) = job
                .outcome
                .as_ref()
                .map(|o| (o.duration_minutes, o.estimated_cost_usd))
                .unwrap_or((None, None));

            let response = JobStatusResponse {
                id: job.id.as_uuid().to_string(),
                session_id: job.session_id.as_uuid().to_string(),
                status: job.status.as_str().to_string(),
                segments_completed: job.segments_completed,
                segments_total: job.segments_total,
                duration_minutes,
                estimated_cost_usd,
                error_message: job.error_message,
                created_at: job.created_at.to_rfc3339(),
                updated_at: job.updated_at.to_rfc3339(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            error_body(format!("Job not found: {}", job_id)),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch job status");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_body(format!("Failed to fetch job: {}", e)),
            )
                .into_response()
        }
    }
}
