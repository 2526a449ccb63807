use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    create_transcription_handler, export_handler, health_handler, job_status_handler,
    summary_handler, transcript_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Leave room above the policy ceiling so oversize uploads reach the
    // gatekeeper and get its error message, not a bare 413.
    let body_limit = state.settings.limits.max_upload_bytes() as usize + 1024 * 1024;

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/transcriptions", post(create_transcription_handler))
        .route("/api/v1/jobs/{job_id}", get(job_status_handler))
        .route(
            "/api/v1/sessions/{session_id}/transcript",
            get(transcript_handler),
        )
        .route(
            "/api/v1/sessions/{session_id}/summary",
            post(summary_handler),
        )
        .route(
            "/api/v1/sessions/{session_id}/export",
            get(export_handler),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
