use axum::{Json, extract::Path, response::IntoResponse};
use tracing::debug;

use crate::{
    api::dto::destination_dto::DestinationResponse,
    error::AppError,
    models::destination::{CATALOG, DestinationId},
};

pub async fn list_destinations() -> impl IntoResponse {
    let destinations: Vec<DestinationResponse> = CATALOG.iter().map(Into::into).collect();
    Json(destinations)
}

pub async fn get_destination(Path(id): Path<String>) -> Result<impl IntoResponse, AppError> {
    debug!("Getting destination: {}", id);

    let id: DestinationId = id.parse().map_err(AppError::NotFound)?;
    Ok(Json(DestinationResponse::from(id.destination())))
}
