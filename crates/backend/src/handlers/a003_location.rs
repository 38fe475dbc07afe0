use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a003_location::aggregate::{Location, LocationDto};

use super::query::DemoFilter;
use crate::domain::a003_location::service;
use crate::shared::data::AppState;
use crate::shared::error::ApiError;

/// GET /api/locations/?is_demo=0|1
pub async fn list_all(
    State(state): State<AppState>,
    Query(filter): Query<DemoFilter>,
) -> Result<Json<Vec<Location>>, ApiError> {
    let is_demo = filter.parse()?;
    Ok(Json(service::list(&state, is_demo).await))
}

/// GET /api/locations/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Location>, ApiError> {
    service::get_by_id(&state, id).await.map(Json)
}

/// POST /api/locations/
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<LocationDto>,
) -> Result<(StatusCode, Json<Location>), ApiError> {
    let created = service::create(&state, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /api/locations/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    service::delete(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
