use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::services::{TranscriptionJobMessage, UploadPolicyError};
use crate::domain::{
    AudioBlob, Job, PreparationMode, TranscriptionMode, TranscriptionOptions,
    chunk_minutes_is_valid,
};
use crate::presentation::state::AppState;

use super::error_body;

#[derive(Serialize)]
pub struct TranscriptionAccepted {
    pub job_id: String,
    pub session_id: String,
    pub message: String,
}

/// Upload boundary: reads the multipart form, runs the size/format
/// gatekeeper before any expensive work, and enqueues the run.
#[tracing::instrument(skip(state, multipart))]
pub async fn create_transcription_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut file: Option<AudioBlob> = None;
    let mut mode = TranscriptionMode::Segmented;
    let mut preparation: Option<PreparationMode> = None;
    let mut chunk_minutes = state.settings.limits.default_chunk_minutes;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    error_body(format!("Failed to read multipart: {}", e)),
                )
                    .into_response();
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                match field.bytes().await {
                    Ok(data) => {
                        tracing::debug!(filename = %filename, bytes = data.len(), "File data received");
                        file = Some(AudioBlob::new(filename, data.to_vec()));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return (
                            StatusCode::BAD_REQUEST,
                            error_body(format!("Failed to read file: {}", e)),
                        )
                            .into_response();
                    }
                }
            }
            "mode" | "preparation" | "chunk_minutes" => {
                let value = match field.text().await {
                    Ok(v) => v,
                    Err(e) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            error_body(format!("Failed to read field {}: {}", name, e)),
                        )
                            .into_response();
                    }
                };
                match parse_option(&name, &value, &mut mode, &mut preparation, &mut chunk_minutes)
                {
                    Ok(()) => {}
                    Err(message) => {
                        return (StatusCode::BAD_REQUEST, error_body(message)).into_response();
                    }
                }
            }
            other => {
                tracing::debug!(field = %other, "Ignoring unknown multipart field");
            }
        }
    }

    let Some(blob) = file else {
        tracing::warn!("Transcription request with no file");
        return (StatusCode::BAD_REQUEST, error_body("No file uploaded")).into_response();
    };

    let preparation = preparation.unwrap_or_else(|| PreparationMode::default_for(mode));

    // Gatekeeper: pure validation, before any decoding or subprocess work.
    let format = match state.upload_policy.validate(&blob, mode, preparation) {
        Ok(format) => format,
        Err(e) => {
            tracing::warn!(error = %e, filename = %blob.filename(), "Upload rejected");
            let status = match e {
                UploadPolicyError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                UploadPolicyError::FileTooLarge { .. }
                | UploadPolicyError::FileTooLargeForDiarization { .. } => {
                    StatusCode::PAYLOAD_TOO_LARGE
                }
            };
            return (status, error_body(e.to_string())).into_response();
        }
    };

    let session_id = state.session_store.create().await;
    let job = Job::new(session_id);
    let job_id = job.id;

    if let Err(e) = state.job_store.create(job).await {
        tracing::error!(error = %e, "Failed to create job record");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_body(format!("Failed to create job: {}", e)),
        )
            .into_response();
    }

    let msg = TranscriptionJobMessage {
        job_id,
        session_id,
        blob,
        format,
        options: TranscriptionOptions::new(mode, preparation, chunk_minutes),
    };

    if let Err(e) = state.job_sender.send(msg).await {
        tracing::error!(error = %e, "Failed to enqueue transcription job");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            error_body("Transcription queue full or worker unavailable"),
        )
            .into_response();
    }

    tracing::info!(
        job_id = %job_id.as_uuid(),
        session_id = %session_id.as_uuid(),
        "Transcription job enqueued"
    );

    (
        StatusCode::ACCEPTED,
        Json(TranscriptionAccepted {
            job_id: job_id.as_uuid().to_string(),
            session_id: session_id.as_uuid().to_string(),
            message: "Transcription started".to_string(),
        }),
    )
        .into_response()
}

fn parse_option(
    name: &str,
    value: &str,
    mode: &mut TranscriptionMode,
    preparation: &mut Option<PreparationMode>,
    chunk_minutes: &mut u64,
) -> Result<(), String> {
    match name {
        "mode" => {
            *mode = value.parse()?;
        }
        "preparation" => {
            *preparation = Some(value.parse()?);
        }
        "chunk_minutes" => {
            let minutes: u64 = value
                .parse()
                .map_err(|_| format!("Invalid chunk_minutes: {}", value))?;
            if !chunk_minutes_is_valid(minutes) {
                return Err(format!(
                    "Invalid chunk_minutes: {}. Expected 5-20 in 5-minute steps",
                    minutes
                ));
            }
            *chunk_minutes = minutes;
        }
        _ => unreachable!("parse_option called for unknown field"),
    }
    Ok(())
}
