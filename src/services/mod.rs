//! Services

pub mod booking;
pub mod chat;
pub mod prompts;
pub mod provider;
pub mod quiz;

use std::sync::Arc;

use crate::config::config::AiConfig;
use crate::knowledge::FallbackMatcher;
use crate::observability::AppMetrics;

pub use booking::{BookingRequest, BookingService, InMemoryBookingService};
pub use chat::{ChatReply, ChatService, ConversationOrchestrator, FallbackReason, ReplySource};
pub use provider::{
    ChatProvider, CompletionRequest, GeminiProvider, OpenAiProvider, ProviderError,
    create_provider,
};
pub use quiz::{QuizRecommendation, QuizService, QuizServiceImpl};

/// Chat service backed by `provider` and the built-in knowledge base
pub fn create_chat_service(
    provider: Option<Arc<dyn ChatProvider>>,
    config: &AiConfig,
    metrics: Arc<AppMetrics>,
) -> Box<dyn ChatService> {
    Box::new(
        ConversationOrchestrator::new(provider, FallbackMatcher::builtin(), config)
            .with_metrics(metrics),
    )
}

pub fn create_quiz_service(
    provider: Option<Arc<dyn ChatProvider>>,
    config: &AiConfig,
    metrics: Arc<AppMetrics>,
) -> Box<dyn QuizService> {
    Box::new(QuizServiceImpl::new(provider, config).with_metrics(metrics))
}

pub fn create_booking_service(metrics: Arc<AppMetrics>) -> Box<dyn BookingService> {
    Box::new(InMemoryBookingService::new().with_metrics(metrics))
}
