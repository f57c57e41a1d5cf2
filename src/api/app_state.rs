use crate::observability::AppMetrics;
use crate::services::{BookingService, ChatService, QuizService};
use std::sync::Arc;

/// Shared services of the API
#[derive(Clone)]
pub struct AppState {
    /// Chat with provider and knowledge-base fallback
    pub chat_service: Arc<dyn ChatService>,
    /// Quiz scoring and recommendation
    pub quiz_service: Arc<dyn QuizService>,
    /// Booking validation and storage
    pub booking_service: Arc<dyn BookingService>,
    /// Request counters
    pub metrics: Arc<AppMetrics>,
    /// Allowed CORS origins, empty for any
    pub cors_origins: Vec<String>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("chat_service", &"Arc<dyn ChatService>")
            .field("quiz_service", &"Arc<dyn QuizService>")
            .field("booking_service", &"Arc<dyn BookingService>")
            .field("metrics", &"Arc<AppMetrics>")
            .field("cors_origins", &self.cors_origins)
            .finish()
    }
}

impl AppState {
    pub fn new(
        chat_service: Box<dyn ChatService>,
        quiz_service: Box<dyn QuizService>,
        booking_service: Box<dyn BookingService>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            chat_service: Arc::from(chat_service),
            quiz_service: Arc::from(quiz_service),
            booking_service: Arc::from(booking_service),
            metrics,
            cors_origins: Vec::new(),
        }
    }

    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    /// State without a provider: chat and quiz answer locally
    pub fn offline(config: &crate::config::config::AiConfig) -> Self {
        use crate::services::{create_booking_service, create_chat_service, create_quiz_service};

        let metrics = Arc::new(AppMetrics::default());
        Self::new(
            create_chat_service(None, config, metrics.clone()),
            create_quiz_service(None, config, metrics.clone()),
            create_booking_service(metrics.clone()),
            metrics,
        )
    }
}
