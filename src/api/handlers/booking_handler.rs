use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::booking_dto::*},
    error::AppError,
};

pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating booking for {}", request.destination);

    let booking = state.booking_service.create(request).await?;
    Ok((StatusCode::CREATED, Json(BookingResponse::from(booking))))
}

pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Getting booking: {}", id);

    let booking = state.booking_service.get(&id).await?;
    Ok(Json(BookingResponse::from(booking)))
}
