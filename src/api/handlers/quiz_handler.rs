use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::quiz_dto::*},
    error::AppError,
};

pub async fn get_questions(State(state): State<AppState>) -> impl IntoResponse {
    Json(QuizQuestionsResponse {
        questions: state.quiz_service.questions(),
    })
}

pub async fn submit_quiz(
    State(state): State<AppState>,
    Json(request): Json<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Quiz submitted with {} answers", request.answers.len());

    let response: QuizResponse = state.quiz_service.recommend(&request.answers).await?;
    Ok(Json(response))
}
