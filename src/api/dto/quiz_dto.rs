//! Quiz DTOs

use serde::{Deserialize, Serialize};

use crate::models::quiz::{QuizAnswer, QuizQuestion};

/// Quiz questions, without their scores
#[derive(Debug, Serialize)]
pub struct QuizQuestionsResponse {
    pub questions: &'static [QuizQuestion],
}

/// Quiz submission
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuizRequest {
    pub answers: Vec<QuizAnswer>,
}

pub use crate::services::quiz::QuizRecommendation as QuizResponse;
