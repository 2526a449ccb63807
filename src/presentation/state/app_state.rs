use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::ports::{JobStore, SessionStore};
use crate::application::services::{SummaryService, TranscriptionJobMessage, UploadPolicy};
use crate::infrastructure::export::ExporterRegistry;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub upload_policy: UploadPolicy,
    pub job_store: Arc<dyn JobStore>,
    pub session_store: Arc<dyn SessionStore>,
    pub summary_service: Arc<SummaryService>,
    pub exporters: Arc<ExporterRegistry>,
    pub job_sender: mpsc::Sender<TranscriptionJobMessage>,
    pub settings: Settings,
}
