use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub openai: OpenAiSettings,
    #[serde(default)]
    pub transcription: TranscriptionSettings,
    #[serde(default)]
    pub summary: SummarySettings,
    #[serde(default)]
    pub limits: LimitsSettings,
}

impl Settings {
    /// Layered load: optional `appsettings.{environment}` file, then
    /// `APP__`-prefixed environment variables. The conventional
    /// `OPENAI_API_KEY` variable is honored as a credential fallback.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .add_source(File::with_name(&environment.config_file()).required(false))
            .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;

        if settings.openai.api_key.is_none() {
            settings.openai.api_key = std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty());
        }

        Ok(settings)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json_format: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    /// Absent by default; adapters report `Unconfigured` on use.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_openai_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    #[serde(default = "default_transcription_model")]
    pub model: String,
    #[serde(default = "default_diarized_model")]
    pub diarized_model: String,
    /// ISO 639-1 language hint submitted with every plain request.
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_price_per_minute")]
    pub price_per_minute_usd: f64,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            model: default_transcription_model(),
            diarized_model: default_diarized_model(),
            language: default_language(),
            price_per_minute_usd: default_price_per_minute(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarySettings {
    #[serde(default = "default_summary_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            model: default_summary_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsSettings {
    /// Soft ceiling for the segmented/decode path, which re-encodes and
    /// chunks locally. The diarized/single-shot 25 MiB ceiling is the
    /// service's own and is not configurable.
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: u64,
    #[serde(default = "default_chunk_minutes")]
    pub default_chunk_minutes: u64,
}

impl LimitsSettings {
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_mb * 1024 * 1024
    }
}

impl Default for LimitsSettings {
    fn default() -> Self {
        Self {
            max_upload_mb: default_max_upload_mb(),
            default_chunk_minutes: default_chunk_minutes(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_transcription_model() -> String {
    "whisper-1".to_string()
}

fn default_diarized_model() -> String {
    "gpt-4o-transcribe-diarize".to_string()
}

fn default_language() -> String {
    "fr".to_string()
}

fn default_price_per_minute() -> f64 {
    0.006
}

fn default_summary_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> usize {
    2048
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_upload_mb() -> u64 {
    200
}

fn default_chunk_minutes() -> u64 {
    10
}
