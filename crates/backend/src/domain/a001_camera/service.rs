use contracts::domain::a001_camera::aggregate::{Camera, CameraDto};

use crate::shared::data::AppState;
use crate::shared::error::ApiError;

/// Получение списка камер
pub async fn list(state: &AppState, is_demo: Option<bool>) -> Vec<Camera> {
    state.catalog.read().await.cameras.list(is_demo)
}

pub async fn get_by_id(state: &AppState, id: i64) -> Result<Camera, ApiError> {
    state
        .catalog
        .read()
        .await
        .cameras
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::not_found(format!("Camera {}", id)))
}

/// Создание новой камеры
pub async fn create(state: &AppState, dto: CameraDto) -> Result<Camera, ApiError> {
    Camera::from_dto(0, dto.clone())
        .validate()
        .map_err(ApiError::Validation)?;

    let mut catalog = state.catalog.write().await;
    let camera = catalog.cameras.insert_with(|id| Camera::from_dto(id, dto));
    tracing::info!("Camera {} created: {}", camera.id, camera.name);
    Ok(camera)
}

/// Удаление камеры; проекты, ссылающиеся на неё, остаются без камеры
pub async fn delete(state: &AppState, id: i64) -> Result<(), ApiError> {
    let mut catalog = state.catalog.write().await;
    if !catalog.cameras.remove(id) {
        return Err(ApiError::not_found(format!("Camera {}", id)));
    }
    for pd in catalog.part_detections.iter_mut() {
        if pd.camera == Some(id) {
            pd.camera = None;
            pd.has_configured = false;
        }
    }
    tracing::info!("Camera {} deleted", id);
    Ok(())
}
