use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;
use crate::api::handlers::quiz_handler::*;

pub fn create_quiz_router() -> Router<AppState> {
    Router::new()
        .route("/quiz", post(submit_quiz))
        .route("/quiz/questions", get(get_questions))
}
