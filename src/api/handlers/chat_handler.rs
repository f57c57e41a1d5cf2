use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::chat_dto::*},
    error::AppError,
};

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!(
        "Chat message received: {} chars, {} history messages",
        request.message.chars().count(),
        request.history.len()
    );

    let reply = state
        .chat_service
        .reply(&request.message, &request.history)
        .await?;

    Ok(Json(ChatResponse {
        response: reply.content,
    }))
}
