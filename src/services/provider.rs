//! Language-model providers
//!
//! OpenAI chat completions and Gemini `generateContent` clients behind one
//! trait. Every failure is classified into a [`ProviderError`] so callers can
//! decide how to degrade.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::config::AiConfig;
use crate::error::Result;
use crate::models::conversation::{ChatMessage, Role};

/// Placeholder shipped in the sample environment file
const API_KEY_PLACEHOLDER: &str = "VOTRE_CLE";
const MIN_API_KEY_LEN: usize = 10;

/// Why a provider could not produce a reply
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("API key missing or placeholder")]
    MissingApiKey,

    #[error("Authentication rejected: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Provider returned an empty reply")]
    EmptyResponse,

    #[error("Unreadable provider reply: {0}")]
    Decode(String),
}

impl ProviderError {
    /// Classifies a non-success HTTP reply
    pub fn from_status(status: u16, body: &str) -> Self {
        let lowered = body.to_lowercase();

        match status {
            401 | 403 => ProviderError::Authentication(body.to_string()),
            429 => ProviderError::RateLimited(body.to_string()),
            _ if body.contains("RESOURCE_EXHAUSTED") || lowered.contains("quota") => {
                ProviderError::RateLimited(body.to_string())
            }
            _ if body.contains("API_KEY_INVALID") || body.contains("Incorrect API key") => {
                ProviderError::Authentication(body.to_string())
            }
            _ => ProviderError::Upstream {
                status,
                body: body.to_string(),
            },
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        ProviderError::Network(e.to_string())
    }
}

/// One completion call
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    /// Prior turns, oldest first, already trimmed by the caller
    pub history: Vec<ChatMessage>,
    pub message: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Provider name, as configured
    fn name(&self) -> &'static str;

    /// Reply text for `request`
    async fn complete(&self, request: CompletionRequest) -> std::result::Result<String, ProviderError>;
}

/// Returns the key when it looks usable: present, not the placeholder,
/// at least 10 characters.
pub fn usable_api_key(key: Option<&str>) -> Option<&str> {
    key.map(str::trim).filter(|k| {
        !k.is_empty() && !k.contains(API_KEY_PLACEHOLDER) && k.chars().count() >= MIN_API_KEY_LEN
    })
}

fn http_client(timeout_secs: u64) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs.max(1)))
        .build()?;
    Ok(client)
}

async fn send_json(request: reqwest::RequestBuilder) -> std::result::Result<Value, ProviderError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ProviderError::from_status(status.as_u16(), &body));
    }

    serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))
}

fn non_empty(text: Option<&str>) -> std::result::Result<String, ProviderError> {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => Err(ProviderError::EmptyResponse),
    }
}

/// OpenAI chat-completions client
pub struct OpenAiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(base_url: &str, api_key: &str, model: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout_secs)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    fn body(&self, request: &CompletionRequest) -> Value {
        let mut messages = Vec::with_capacity(request.history.len() + 2);
        messages.push(json!({ "role": "system", "content": request.system_prompt }));
        messages.extend(
            request
                .history
                .iter()
                .map(|m| json!({ "role": m.role.as_str(), "content": m.content })),
        );
        messages.push(json!({ "role": "user", "content": request.message }));

        json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        })
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, request: CompletionRequest) -> std::result::Result<String, ProviderError> {
        debug!("OpenAI completion with {} history messages", request.history.len());

        let reply = send_json(
            self.client
                .post(format!("{}/chat/completions", self.base_url))
                .bearer_auth(&self.api_key)
                .json(&self.body(&request)),
        )
        .await?;

        non_empty(reply["choices"][0]["message"]["content"].as_str())
    }
}

/// Gemini `generateContent` client
pub struct GeminiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(base_url: &str, api_key: &str, model: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout_secs)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    fn body(&self, request: &CompletionRequest) -> Value {
        let mut contents: Vec<Value> = request
            .history
            .iter()
            .map(|m| {
                let role = match m.role {
                    Role::Assistant => "model",
                    Role::User => "user",
                };
                json!({ "role": role, "parts": [{ "text": m.content }] })
            })
            .collect();
        contents.push(json!({ "role": "user", "parts": [{ "text": request.message }] }));

        json!({
            "system_instruction": { "parts": [{ "text": request.system_prompt }] },
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": request.max_tokens,
                "temperature": request.temperature,
            },
        })
    }
}

#[async_trait]
impl ChatProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn complete(&self, request: CompletionRequest) -> std::result::Result<String, ProviderError> {
        debug!("Gemini completion with {} history messages", request.history.len());

        let reply = send_json(
            self.client
                .post(format!(
                    "{}/models/{}:generateContent",
                    self.base_url, self.model
                ))
                .query(&[("key", self.api_key.as_str())])
                .json(&self.body(&request)),
        )
        .await?;

        non_empty(reply["candidates"][0]["content"]["parts"][0]["text"].as_str())
    }
}

/// Builds the configured provider, or `None` when the API key is unusable
pub fn create_provider(config: &AiConfig) -> Result<Option<Arc<dyn ChatProvider>>> {
    let Some(api_key) = usable_api_key(config.api_key.as_deref()) else {
        warn!("No usable AI API key configured, chat will use the local knowledge base");
        return Ok(None);
    };

    let provider: Arc<dyn ChatProvider> = match config.provider.to_lowercase().as_str() {
        "gemini" => Arc::new(GeminiProvider::new(
            &config.gemini_base_url,
            api_key,
            &config.gemini_model,
            config.request_timeout,
        )?),
        _ => Arc::new(OpenAiProvider::new(
            &config.openai_base_url,
            api_key,
            &config.openai_model,
            config.request_timeout,
        )?),
    };

    Ok(Some(provider))
}
