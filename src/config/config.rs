use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Request timeout (seconds)
    pub request_timeout: u64,
    /// Maximum request body size (bytes)
    pub max_request_size: usize,
    /// Allowed CORS origins, empty allows any origin
    pub cors_origins: Vec<String>,
}

/// Language-model provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AiConfig {
    /// Provider name: "openai" or "gemini"
    pub provider: String,
    /// Provider API key
    pub api_key: Option<String>,
    /// OpenAI API base URL
    pub openai_base_url: String,
    /// OpenAI chat model
    pub openai_model: String,
    /// Gemini API base URL
    pub gemini_base_url: String,
    /// Gemini model
    pub gemini_model: String,
    /// Token limit for chat replies
    pub chat_max_tokens: u32,
    /// Sampling temperature for chat replies
    pub chat_temperature: f32,
    /// Token limit for quiz recommendations
    pub quiz_max_tokens: u32,
    /// Sampling temperature for quiz recommendations
    pub quiz_temperature: f32,
    /// Number of history messages forwarded to the provider
    pub history_limit: usize,
    /// Provider request timeout (seconds)
    pub request_timeout: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level, overridden by RUST_LOG
    pub level: String,
    /// JSON log lines
    pub structured: bool,
    /// Directory for daily rolling log files
    pub log_dir: Option<PathBuf>,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Provider configuration
    pub ai: AiConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Application name
    pub app_name: String,
    /// Environment
    pub environment: String,
}

impl AppConfig {
    /// Development configuration
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 8080,
                request_timeout: 30,
                max_request_size: 64 * 1024,
                cors_origins: Vec::new(),
            },
            ai: AiConfig {
                provider: "openai".into(),
                api_key: None,
                openai_base_url: "https://api.openai.com/v1".into(),
                openai_model: "gpt-4o".into(),
                gemini_base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
                gemini_model: "gemini-2.0-flash".into(),
                chat_max_tokens: 500,
                chat_temperature: 0.8,
                quiz_max_tokens: 400,
                quiz_temperature: 0.85,
                history_limit: 20,
                request_timeout: 30,
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
                log_dir: None,
            },
            app_name: "chronos".into(),
            environment: "development".into(),
        }
    }
}
