mod export;
mod health;
mod job_status;
mod summary;
mod transcript;
mod transcriptions;

pub use export::export_handler;
pub use health::health_handler;
pub use job_status::job_status_handler;
pub use summary::summary_handler;
pub use transcript::transcript_handler;
pub use transcriptions::create_transcription_handler;

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(crate) fn error_body(message: impl Into<String>) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: message.into(),
    })
}
