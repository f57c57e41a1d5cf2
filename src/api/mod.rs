//! API
//!
//! REST endpoints under `/api/v1`.

pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;

use crate::api::app_state::AppState;
use crate::observability::metrics_middleware;
use crate::security::middleware::{cors_layer, security_headers_middleware};
use axum::Router;

pub fn create_router(app_state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::chat_routes::create_chat_router())
        .merge(routes::destination_routes::create_destination_router())
        .merge(routes::quiz_routes::create_quiz_router())
        .merge(routes::booking_routes::create_booking_router());

    Router::new()
        .nest("/api/v1", api)
        .layer(axum::middleware::from_fn_with_state(
            app_state.metrics.clone(),
            metrics_middleware,
        ))
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(cors_layer(&app_state.cors_origins))
        .with_state(app_state)
}
