use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::presentation::state::AppState;

use super::error_body;
use super::transcript::parse_session_id;

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "markdown".to_string()
}

/// Streams the session's summary as a downloadable document, with the
/// metadata header block when the session carries metadata.
#[tracing::instrument(skip(state))]
pub async fn export_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Query(query): Query<ExportQuery>,
) -> impl IntoResponse {
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let Some(exporter) = state.exporters.for_format(&query.format) else {
        return (
            StatusCode::BAD_REQUEST,
            error_body(format!(
                "Unknown export format: {}. Expected markdown or pdf",
                query.format
            )),
        )
            .into_response();
    };

    let session = match state.session_store.get(id).await {
        Ok(s) => s,
        Err(e) => {
            return (StatusCode::NOT_FOUND, error_body(e.to_string())).into_response();
        }
    };

    let Some(summary) = session.summary else {
        return (
            StatusCode::CONFLICT,
            error_body("No summary yet: generate a meeting report first"),
        )
            .into_response();
    };

    match exporter.export(&summary, session.metadata.as_ref()) {
        Ok(document) => {
            let filename = format!("meeting-report.{}", exporter.file_extension());
            tracing::info!(format = %query.format, bytes = document.len(), "Summary exported");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, exporter.content_type().to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                document,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Export failed");
            (StatusCode::INTERNAL_SERVER_ERROR, error_body(e.to_string())).into_response()
        }
    }
}
