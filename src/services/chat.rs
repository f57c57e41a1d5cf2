//! Conversation orchestrator
//!
//! Sends the conversation to the configured provider and answers from the
//! local knowledge base whenever the provider is absent or fails.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::config::AiConfig;
use crate::error::Result;
use crate::knowledge::FallbackMatcher;
use crate::models::conversation::{ChatMessage, recent_history};
use crate::observability::AppMetrics;
use crate::security::validation::validators;
use crate::services::prompts::CHRONOS_SYSTEM_PROMPT;
use crate::services::provider::{ChatProvider, CompletionRequest, ProviderError};

/// Why the reply came from the knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FallbackReason {
    ApiKeyMissing,
    AuthError,
    RateLimit,
    ServerError,
}

impl FallbackReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::ApiKeyMissing => "API_KEY_MISSING",
            FallbackReason::AuthError => "AUTH_ERROR",
            FallbackReason::RateLimit => "RATE_LIMIT",
            FallbackReason::ServerError => "SERVER_ERROR",
        }
    }
}

impl From<&ProviderError> for FallbackReason {
    fn from(e: &ProviderError) -> Self {
        match e {
            ProviderError::MissingApiKey => FallbackReason::ApiKeyMissing,
            ProviderError::Authentication(_) => FallbackReason::AuthError,
            ProviderError::RateLimited(_) => FallbackReason::RateLimit,
            _ => FallbackReason::ServerError,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Provider,
    Fallback(FallbackReason),
}

/// Assistant reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub content: String,
    pub source: ReplySource,
}

impl ChatReply {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ReplySource::Fallback(_))
    }
}

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Answers `message`, given the prior turns oldest first
    async fn reply(&self, message: &str, history: &[ChatMessage]) -> Result<ChatReply>;

    /// Name of the configured provider, if any
    fn provider_name(&self) -> Option<&'static str>;
}

pub struct ConversationOrchestrator {
    provider: Option<Arc<dyn ChatProvider>>,
    matcher: FallbackMatcher,
    history_limit: usize,
    max_tokens: u32,
    temperature: f32,
    metrics: Option<Arc<AppMetrics>>,
}

impl ConversationOrchestrator {
    pub fn new(
        provider: Option<Arc<dyn ChatProvider>>,
        matcher: FallbackMatcher,
        config: &AiConfig,
    ) -> Self {
        Self {
            provider,
            matcher,
            history_limit: config.history_limit,
            max_tokens: config.chat_max_tokens,
            temperature: config.chat_temperature,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<AppMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    fn fallback(&self, message: &str, reason: FallbackReason) -> ChatReply {
        if let Some(metrics) = &self.metrics {
            metrics.record_fallback(reason.as_str());
        }

        ChatReply {
            content: self.matcher.select_response(message).to_string(),
            source: ReplySource::Fallback(reason),
        }
    }
}

impl std::fmt::Debug for ConversationOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationOrchestrator")
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .field("matcher", &self.matcher)
            .field("history_limit", &self.history_limit)
            .finish()
    }
}

#[async_trait]
impl ChatService for ConversationOrchestrator {
    async fn reply(&self, message: &str, history: &[ChatMessage]) -> Result<ChatReply> {
        validators::validate_chat_message(message)?;

        if let Some(metrics) = &self.metrics {
            metrics.record_chat_request();
        }

        let Some(provider) = &self.provider else {
            debug!("No provider configured, answering from the knowledge base");
            return Ok(self.fallback(message, FallbackReason::ApiKeyMissing));
        };

        let request = CompletionRequest {
            system_prompt: CHRONOS_SYSTEM_PROMPT.to_string(),
            history: recent_history(history, self.history_limit).to_vec(),
            message: message.trim().to_string(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        match provider.complete(request).await {
            Ok(content) => {
                if let Some(metrics) = &self.metrics {
                    metrics.record_provider_reply();
                }
                Ok(ChatReply {
                    content,
                    source: ReplySource::Provider,
                })
            }
            Err(e) => {
                let reason = FallbackReason::from(&e);
                warn!(
                    provider = provider.name(),
                    reason = reason.as_str(),
                    "Provider failed, answering from the knowledge base: {}",
                    e
                );
                Ok(self.fallback(message, reason))
            }
        }
    }

    fn provider_name(&self) -> Option<&'static str> {
        self.provider.as_ref().map(|p| p.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config::AppConfig;
    use crate::error::AppError;
    use crate::services::provider::MockChatProvider;

    const CLOTHING_QUESTION: &str = "Quels vêtements pour Florence 1504 ?";

    fn orchestrator(provider: Option<MockChatProvider>) -> ConversationOrchestrator {
        let provider = provider.map(|p| Arc::new(p) as Arc<dyn ChatProvider>);
        ConversationOrchestrator::new(provider, FallbackMatcher::builtin(), &AppConfig::development().ai)
    }

    fn failing(error: ProviderError) -> MockChatProvider {
        let mut mock = MockChatProvider::new();
        mock.expect_name().return_const("mock");
        mock.expect_complete()
            .times(1)
            .returning(move |_| Err(error.clone()));
        mock
    }

    fn expected_fallback() -> &'static str {
        FallbackMatcher::builtin().select_response(CLOTHING_QUESTION)
    }

    #[tokio::test]
    async fn test_provider_reply_is_returned() {
        let mut mock = MockChatProvider::new();
        mock.expect_name().return_const("mock");
        mock.expect_complete()
            .withf(|req| req.message == "Bonjour" && req.max_tokens == 500)
            .returning(|_| Ok("Bienvenue chez TimeTravel Agency.".to_string()));

        let metrics = Arc::new(AppMetrics::default());
        let service = orchestrator(Some(mock)).with_metrics(metrics.clone());
        let reply = service.reply("Bonjour", &[]).await.unwrap();

        assert_eq!(reply.content, "Bienvenue chez TimeTravel Agency.");
        assert_eq!(reply.source, ReplySource::Provider);
        assert_eq!(
            metrics
                .provider_replies_total
                .load(std::sync::atomic::Ordering::Relaxed),
            1
        );
    }

    #[tokio::test]
    async fn test_no_provider_uses_matcher() {
        let reply = orchestrator(None).reply(CLOTHING_QUESTION, &[]).await.unwrap();

        assert_eq!(reply.content, expected_fallback());
        assert_eq!(reply.source, ReplySource::Fallback(FallbackReason::ApiKeyMissing));
    }

    #[tokio::test]
    async fn test_provider_failures_map_to_reasons() {
        let cases = [
            (ProviderError::MissingApiKey, FallbackReason::ApiKeyMissing),
            (ProviderError::Authentication("401".into()), FallbackReason::AuthError),
            (ProviderError::RateLimited("quota".into()), FallbackReason::RateLimit),
            (
                ProviderError::Upstream {
                    status: 500,
                    body: "boom".into(),
                },
                FallbackReason::ServerError,
            ),
            (ProviderError::Network("timeout".into()), FallbackReason::ServerError),
            (ProviderError::EmptyResponse, FallbackReason::ServerError),
        ];

        for (error, reason) in cases {
            let metrics = Arc::new(AppMetrics::default());
            let service = orchestrator(Some(failing(error))).with_metrics(metrics.clone());
            let reply = service.reply(CLOTHING_QUESTION, &[]).await.unwrap();

            assert_eq!(reply.content, expected_fallback());
            assert_eq!(reply.source, ReplySource::Fallback(reason));
            assert_eq!(metrics.fallback_count(reason.as_str()), 1);
        }
    }

    #[tokio::test]
    async fn test_fallback_ignores_history() {
        let history = vec![
            ChatMessage::user("Parlez-moi des dinosaures"),
            ChatMessage::assistant("Le Crétacé vous attend."),
        ];
        let service = orchestrator(Some(failing(ProviderError::EmptyResponse)));
        let reply = service.reply(CLOTHING_QUESTION, &history).await.unwrap();

        assert_eq!(reply.content, expected_fallback());
    }

    #[tokio::test]
    async fn test_history_is_trimmed() {
        let history: Vec<ChatMessage> = (0..30)
            .map(|i| ChatMessage::user(format!("message {}", i)))
            .collect();

        let mut mock = MockChatProvider::new();
        mock.expect_name().return_const("mock");
        mock.expect_complete()
            .withf(|req| req.history.len() == 20 && req.history[0].content == "message 10")
            .returning(|_| Ok("ok".to_string()));

        let reply = orchestrator(Some(mock)).reply("Bonjour", &history).await.unwrap();
        assert_eq!(reply.content, "ok");
    }

    #[tokio::test]
    async fn test_long_history_is_accepted() {
        let history: Vec<ChatMessage> = (0..102)
            .map(|i| ChatMessage::user(format!("message {}", i)))
            .collect();

        let reply = orchestrator(None).reply("Bonjour", &history).await.unwrap();
        assert_eq!(reply.source, ReplySource::Fallback(FallbackReason::ApiKeyMissing));

        let mut mock = MockChatProvider::new();
        mock.expect_name().return_const("mock");
        mock.expect_complete()
            .withf(|req| req.history.len() == 20 && req.history[19].content == "message 101")
            .returning(|_| Ok("ok".to_string()));
        let reply = orchestrator(Some(mock)).reply("Bonjour", &history).await.unwrap();
        assert_eq!(reply.content, "ok");
    }

    #[tokio::test]
    async fn test_provider_gets_trimmed_message() {
        let padded = format!("  {}\n", CLOTHING_QUESTION);

        let mut mock = MockChatProvider::new();
        mock.expect_name().return_const("mock");
        mock.expect_complete()
            .withf(|req| req.message == CLOTHING_QUESTION)
            .returning(|_| Err(ProviderError::EmptyResponse));

        let reply = orchestrator(Some(mock)).reply(&padded, &[]).await.unwrap();
        assert_eq!(
            reply.content,
            FallbackMatcher::builtin().select_response(&padded)
        );
    }

    #[tokio::test]
    async fn test_invalid_messages_are_rejected() {
        let service = orchestrator(None);

        assert!(matches!(
            service.reply("   ", &[]).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            service.reply(&"a".repeat(2001), &[]).await,
            Err(AppError::Validation(_))
        ));
        assert!(service.reply(&"a".repeat(2000), &[]).await.is_ok());
    }

    #[test]
    fn test_reason_labels() {
        assert_eq!(FallbackReason::RateLimit.as_str(), "RATE_LIMIT");
        assert_eq!(
            serde_json::to_value(FallbackReason::ApiKeyMissing).unwrap(),
            "API_KEY_MISSING"
        );
    }
}
