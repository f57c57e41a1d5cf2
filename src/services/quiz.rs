//! Quiz scoring and recommendation

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::config::AiConfig;
use crate::error::Result;
use crate::models::destination::DestinationId;
use crate::models::quiz::{DestinationScores, QUESTIONS, QuizAnswer, QuizQuestion, score_answers};
use crate::observability::AppMetrics;
use crate::services::prompts::{QUIZ_SYSTEM_PROMPT, quiz_user_prompt};
use crate::services::provider::{ChatProvider, CompletionRequest};

/// Outcome of a quiz
#[derive(Debug, Clone, Serialize)]
pub struct QuizRecommendation {
    pub destination: DestinationId,
    pub label: &'static str,
    pub recommendation: String,
    /// `false` when the canned text was used
    pub from_api: bool,
    pub scores: DestinationScores,
}

/// Canned recommendation used without a provider
pub fn fallback_recommendation(destination: DestinationId) -> &'static str {
    match destination {
        DestinationId::Paris1889 => {
            "Votre profil révèle une âme éprise de culture, d'élégance et d'innovation. \
Paris 1889 est faite pour vous : l'inauguration de la Tour Eiffel, les lumières de l'Exposition Universelle, \
les Grands Boulevards vibrant d'une énergie sans précédent. \
La Belle Époque vous tend les bras — il ne vous reste plus qu'à franchir le seuil du temps."
        }
        DestinationId::Cretace => {
            "Votre esprit aventurier ne fait aucun doute. Le Crétacé est votre terrain de jeu idéal : \
des paysages primitifs à couper le souffle, des géants préhistoriques que personne d'autre n'a vus de ses propres yeux, \
et une immersion dans la nature la plus brute et la plus spectaculaire qui ait jamais existé. \
Préparez-vous à vivre l'aventure ultime."
        }
        DestinationId::Florence1504 => {
            "Vous êtes un esthète, sensible à la beauté et à la grandeur de la création humaine. \
Florence 1504 vous offrira ce que des siècles entiers n'ont pu reproduire : \
Michel-Ange dévoilant son David, Léonard de Vinci dans son atelier, les intrigues des Médicis. \
La Renaissance vous attend — et elle est encore plus belle en vrai."
        }
    }
}

#[async_trait]
pub trait QuizService: Send + Sync {
    fn questions(&self) -> &'static [QuizQuestion];

    /// Scores `answers` and writes a recommendation for the winner
    async fn recommend(&self, answers: &[QuizAnswer]) -> Result<QuizRecommendation>;
}

pub struct QuizServiceImpl {
    provider: Option<Arc<dyn ChatProvider>>,
    max_tokens: u32,
    temperature: f32,
    metrics: Option<Arc<AppMetrics>>,
}

impl QuizServiceImpl {
    pub fn new(provider: Option<Arc<dyn ChatProvider>>, config: &AiConfig) -> Self {
        Self {
            provider,
            max_tokens: config.quiz_max_tokens,
            temperature: config.quiz_temperature,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<AppMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }
}

#[async_trait]
impl QuizService for QuizServiceImpl {
    fn questions(&self) -> &'static [QuizQuestion] {
        QUESTIONS
    }

    async fn recommend(&self, answers: &[QuizAnswer]) -> Result<QuizRecommendation> {
        let score = score_answers(answers)?;
        if let Some(metrics) = &self.metrics {
            metrics.record_quiz_request();
        }
        info!("Quiz winner: {} ({:?})", score.winner, score.scores);

        let generated = match &self.provider {
            Some(provider) => {
                let request = CompletionRequest {
                    system_prompt: QUIZ_SYSTEM_PROMPT.to_string(),
                    history: Vec::new(),
                    message: quiz_user_prompt(&score),
                    max_tokens: self.max_tokens,
                    temperature: self.temperature,
                };
                provider
                    .complete(request)
                    .await
                    .inspect_err(|e| warn!("Quiz recommendation falls back to canned text: {}", e))
                    .ok()
            }
            None => None,
        };

        let (recommendation, from_api) = match generated {
            Some(text) => (text, true),
            None => (fallback_recommendation(score.winner).to_string(), false),
        };

        Ok(QuizRecommendation {
            destination: score.winner,
            label: score.winner.label(),
            recommendation,
            from_api,
            scores: score.scores,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config::AppConfig;
    use crate::error::AppError;
    use crate::services::provider::{MockChatProvider, ProviderError};

    fn answers(ids: [&str; 4]) -> Vec<QuizAnswer> {
        QUESTIONS
            .iter()
            .zip(ids)
            .map(|(q, a)| QuizAnswer::new(q.id, a))
            .collect()
    }

    fn service(provider: Option<MockChatProvider>) -> QuizServiceImpl {
        let provider = provider.map(|p| Arc::new(p) as Arc<dyn ChatProvider>);
        QuizServiceImpl::new(provider, &AppConfig::development().ai)
    }

    #[tokio::test]
    async fn test_canned_recommendation_without_provider() {
        let result = service(None)
            .recommend(&answers(["innovation", "safe", "monument", "festive"]))
            .await
            .unwrap();

        assert_eq!(result.destination, DestinationId::Paris1889);
        assert_eq!(result.label, "Paris 1889");
        assert!(!result.from_api);
        assert_eq!(
            result.recommendation,
            fallback_recommendation(DestinationId::Paris1889)
        );
    }

    #[tokio::test]
    async fn test_provider_recommendation() {
        let mut mock = MockChatProvider::new();
        mock.expect_complete()
            .withf(|req| {
                req.max_tokens == 400
                    && (req.temperature - 0.85).abs() < f32::EPSILON
                    && req.message.contains("Crétacé")
                    && req.history.is_empty()
            })
            .returning(|_| Ok("Le Crétacé vous appelle.".to_string()));

        let result = service(Some(mock))
            .recommend(&answers(["nature", "extreme", "creature", "raw"]))
            .await
            .unwrap();

        assert_eq!(result.destination, DestinationId::Cretace);
        assert!(result.from_api);
        assert_eq!(result.recommendation, "Le Crétacé vous appelle.");
    }

    #[tokio::test]
    async fn test_provider_failure_uses_canned_text() {
        let mut mock = MockChatProvider::new();
        mock.expect_complete()
            .returning(|_| Err(ProviderError::RateLimited("quota".into())));

        let result = service(Some(mock))
            .recommend(&answers(["art", "moderate", "genius", "refined"]))
            .await
            .unwrap();

        assert_eq!(result.destination, DestinationId::Florence1504);
        assert!(!result.from_api);
        assert_eq!(
            result.recommendation,
            fallback_recommendation(DestinationId::Florence1504)
        );
    }

    #[tokio::test]
    async fn test_incomplete_answers_are_rejected() {
        let err = service(None)
            .recommend(&[QuizAnswer::new("passion", "art")])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
