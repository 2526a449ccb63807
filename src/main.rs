use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use rapporteur::application::services::{
    AudioPreparation, SummaryService, TranscriptionOrchestrator, TranscriptionWorker, UploadPolicy,
};
use rapporteur::infrastructure::audio::{FfmpegTranscoder, SymphoniaDecoder};
use rapporteur::infrastructure::export::ExporterRegistry;
use rapporteur::infrastructure::llm::OpenAiSummarizer;
use rapporteur::infrastructure::observability::{TracingConfig, init_tracing};
use rapporteur::infrastructure::persistence::{InMemoryJobStore, InMemorySessionStore};
use rapporteur::infrastructure::transcription::OpenAiTranscriber;
use rapporteur::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::new(environment.to_string(), settings.logging.json_format),
        settings.server.port,
    );

    if settings.openai.api_key.is_none() {
        tracing::warn!(
            "No OpenAI API key configured; transcription and summarization will fail until \
             OPENAI_API_KEY is set"
        );
    }

    let transcriber = Arc::new(OpenAiTranscriber::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        settings.transcription.model.clone(),
        settings.transcription.diarized_model.clone(),
    ));
    let summarizer = Arc::new(OpenAiSummarizer::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        settings.summary.model.clone(),
        settings.summary.max_tokens,
        settings.summary.temperature,
    ));

    let preparation = AudioPreparation::new(
        Arc::new(SymphoniaDecoder),
        Arc::new(FfmpegTranscoder::default()),
    );
    let orchestrator =
        TranscriptionOrchestrator::new(transcriber, settings.transcription.language.clone());

    let job_store = Arc::new(InMemoryJobStore::new());
    let session_store = Arc::new(InMemorySessionStore::new());

    let (job_sender, job_receiver) = mpsc::channel(16);
    let worker = TranscriptionWorker::new(
        job_receiver,
        preparation,
        orchestrator,
        job_store.clone(),
        session_store.clone(),
        settings.transcription.price_per_minute_usd,
    );
    tokio::spawn(worker.run());

    let summary_service = Arc::new(SummaryService::new(summarizer, session_store.clone()));

    let state = AppState {
        upload_policy: UploadPolicy::new(settings.limits.max_upload_bytes()),
        job_store,
        session_store,
        summary_service,
        exporters: Arc::new(ExporterRegistry::new()),
        job_sender,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
