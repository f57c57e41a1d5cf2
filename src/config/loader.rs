use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Names accepted by `ai.provider`
pub const SUPPORTED_PROVIDERS: &[&str] = &["openai", "gemini"];

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the default location
    ///
    /// Sources, lowest precedence first:
    /// 1. built-in development defaults
    /// 2. ./config.toml, or the file named by CHRONOS_CONFIG
    /// 3. CHRONOS_* environment variables, `__` separating sections
    /// 4. AI_API_KEY / AI_PROVIDER
    pub fn load() -> Result<AppConfig, figment::Error> {
        let path = std::env::var("CHRONOS_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_config_path());
        Self::load_from(path)
    }

    /// Load configuration from the given file
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig, figment::Error> {
        Self::figment(path.as_ref()).extract()
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::development()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("CHRONOS_").split("__"))
            .merge(
                Env::raw()
                    .only(&["AI_API_KEY", "AI_PROVIDER"])
                    .map(|key| {
                        let key = key.as_str().to_ascii_lowercase();
                        key.replacen("ai_", "ai.", 1).into()
                    }),
            )
    }

    /// Validate configuration
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        let provider = config.ai.provider.to_lowercase();
        if !SUPPORTED_PROVIDERS.contains(&provider.as_str()) {
            return Err(ConfigValidationError::UnknownProvider(
                config.ai.provider.clone(),
            ));
        }

        if config.ai.history_limit == 0 {
            return Err(ConfigValidationError::InvalidHistoryLimit);
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("Invalid server port, must be greater than 0")]
    InvalidPort,

    #[error("Unknown AI provider: {0}")]
    UnknownProvider(String),

    #[error("History limit must be greater than 0")]
    InvalidHistoryLimit,
}

/// Default configuration file path
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}

/// Whether the default configuration file exists
pub fn config_exists() -> bool {
    default_config_path().exists()
}
