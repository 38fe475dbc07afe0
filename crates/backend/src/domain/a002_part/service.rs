use contracts::domain::a002_part::aggregate::{Part, PartDto};

use crate::shared::data::AppState;
use crate::shared::error::ApiError;

pub async fn list(state: &AppState, is_demo: Option<bool>) -> Vec<Part> {
    state.catalog.read().await.parts.list(is_demo)
}

pub async fn get_by_id(state: &AppState, id: i64) -> Result<Part, ApiError> {
    state
        .catalog
        .read()
        .await
        .parts
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::not_found(format!("Part {}", id)))
}

pub async fn create(state: &AppState, dto: PartDto) -> Result<Part, ApiError> {
    Part::from_dto(0, dto.clone())
        .validate()
        .map_err(ApiError::Validation)?;

    let mut catalog = state.catalog.write().await;
    let part = catalog.parts.insert_with(|id| Part::from_dto(id, dto));
    tracing::info!("Part {} created: {}", part.id, part.name);
    Ok(part)
}

/// Удаление детали и её упоминаний в проектах
pub async fn delete(state: &AppState, id: i64) -> Result<(), ApiError> {
    let mut catalog = state.catalog.write().await;
    if !catalog.parts.remove(id) {
        return Err(ApiError::not_found(format!("Part {}", id)));
    }
    for pd in catalog.part_detections.iter_mut() {
        if pd.parts.contains(&id) {
            pd.parts.retain(|p| *p != id);
            pd.has_configured = false;
        }
    }
    tracing::info!("Part {} deleted", id);
    Ok(())
}
