use axum::{Router, routing::get};

use crate::api::app_state::AppState;
use crate::api::handlers::destination_handler::*;

pub fn create_destination_router() -> Router<AppState> {
    Router::new()
        .route("/destinations", get(list_destinations))
        .route("/destinations/:id", get(get_destination))
}
