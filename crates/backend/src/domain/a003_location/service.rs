use contracts::domain::a003_location::aggregate::{Location, LocationDto};

use crate::shared::data::AppState;
use crate::shared::error::ApiError;

pub async fn list(state: &AppState, is_demo: Option<bool>) -> Vec<Location> {
    state.catalog.read().await.locations.list(is_demo)
}

pub async fn get_by_id(state: &AppState, id: i64) -> Result<Location, ApiError> {
    state
        .catalog
        .read()
        .await
        .locations
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::not_found(format!("Location {}", id)))
}

pub async fn create(state: &AppState, dto: LocationDto) -> Result<Location, ApiError> {
    Location::from_dto(0, dto.clone())
        .validate()
        .map_err(ApiError::Validation)?;

    let mut catalog = state.catalog.write().await;
    let location = catalog
        .locations
        .insert_with(|id| Location::from_dto(id, dto));
    tracing::info!("Location {} created: {}", location.id, location.name);
    Ok(location)
}

pub async fn delete(state: &AppState, id: i64) -> Result<(), ApiError> {
    let mut catalog = state.catalog.write().await;
    if !catalog.locations.remove(id) {
        return Err(ApiError::not_found(format!("Location {}", id)));
    }
    for pd in catalog.part_detections.iter_mut() {
        if pd.location == Some(id) {
            pd.location = None;
        }
    }
    tracing::info!("Location {} deleted", id);
    Ok(())
}
