use contracts::domain::a004_part_detection::aggregate::{
    validate_prob_threshold, PartDetection, PartDetectionDto, SimpleStatus,
};

use crate::shared::data::{AppState, Catalog};
use crate::shared::error::ApiError;

pub async fn list(state: &AppState, is_demo: Option<bool>) -> Vec<PartDetection> {
    state.catalog.read().await.part_detections.list(is_demo)
}

pub async fn get_by_id(state: &AppState, id: i64) -> Result<PartDetection, ApiError> {
    state
        .catalog
        .read()
        .await
        .part_detections
        .get(id)
        .cloned()
        .ok_or_else(|| not_found(id))
}

/// Сохранение конфигурации проекта
///
/// Referenced camera, location and parts must exist; settings are checked
/// by `DetectionSettings::validate`.
pub async fn update(
    state: &AppState,
    id: i64,
    dto: PartDetectionDto,
) -> Result<PartDetection, ApiError> {
    dto.settings.validate().map_err(ApiError::Validation)?;

    let mut catalog = state.catalog.write().await;
    check_references(&catalog, &dto)?;

    let pd = catalog
        .part_detections
        .get_mut(id)
        .ok_or_else(|| not_found(id))?;
    pd.apply(&dto);
    tracing::info!(
        "Part detection {} updated: camera={:?} location={:?} parts={:?}",
        id,
        pd.camera,
        pd.location,
        pd.parts
    );
    Ok(pd.clone())
}

/// Пометить проект как сконфигурированный
///
/// Training and deployment run elsewhere; here the project is only checked
/// for a camera and at least one part.
pub async fn configure(state: &AppState, id: i64) -> Result<SimpleStatus, ApiError> {
    let mut catalog = state.catalog.write().await;
    let pd = catalog
        .part_detections
        .get_mut(id)
        .ok_or_else(|| not_found(id))?;

    if pd.camera.is_none() {
        return Err(ApiError::ConfigureWithoutCamera(id));
    }
    if pd.parts.is_empty() {
        return Err(ApiError::ConfigureWithoutParts(id));
    }

    pd.has_configured = true;
    tracing::info!("Part detection {} configured", id);
    Ok(SimpleStatus::ok())
}

/// Обновить порог вероятности для bounding box
pub async fn update_prob_threshold(
    state: &AppState,
    id: i64,
    raw: Option<&str>,
) -> Result<SimpleStatus, ApiError> {
    let threshold = validate_prob_threshold(raw.unwrap_or_default())?;

    let mut catalog = state.catalog.write().await;
    let pd = catalog
        .part_detections
        .get_mut(id)
        .ok_or_else(|| not_found(id))?;
    pd.prob_threshold = threshold;
    tracing::info!("Part detection {} prob_threshold = {}", id, threshold);
    Ok(SimpleStatus::ok())
}

fn check_references(catalog: &Catalog, dto: &PartDetectionDto) -> Result<(), ApiError> {
    if let Some(camera) = dto.camera {
        if !catalog.cameras.contains(camera) {
            return Err(ApiError::Validation(format!("Camera {} does not exist", camera)));
        }
    }
    if let Some(location) = dto.location {
        if !catalog.locations.contains(location) {
            return Err(ApiError::Validation(format!(
                "Location {} does not exist",
                location
            )));
        }
    }
    if let Some(part) = dto.parts.iter().find(|p| !catalog.parts.contains(**p)) {
        return Err(ApiError::Validation(format!("Part {} does not exist", part)));
    }
    Ok(())
}

fn not_found(id: i64) -> ApiError {
    ApiError::not_found(format!("Part detection {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::initialization::seed_demo_data;
    use contracts::domain::a004_part_detection::aggregate::{DetectionSettings, ProbThresholdError};

    async fn seeded() -> (AppState, PartDetection) {
        let state = AppState::new();
        seed_demo_data(&state).await.unwrap();
        let real = list(&state, Some(false)).await.remove(0);
        (state, real)
    }

    #[tokio::test]
    async fn test_update_checks_references() {
        let (state, real) = seeded().await;
        let dto = PartDetectionDto {
            camera: Some(999),
            ..Default::default()
        };
        let err = update(&state, real.id, dto).await.unwrap_err();
        assert_eq!(err.to_string(), "Camera 999 does not exist");

        let dto = PartDetectionDto {
            parts: vec![999],
            ..Default::default()
        };
        assert!(matches!(
            update(&state, real.id, dto).await,
            Err(ApiError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_rejects_small_max_images() {
        let (state, real) = seeded().await;
        let dto = PartDetectionDto {
            settings: DetectionSettings {
                max_images: 10,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = update(&state, real.id, dto).await.unwrap_err();
        assert_eq!(err.to_string(), "Cannot be less than 15");
    }

    #[tokio::test]
    async fn test_update_then_configure() {
        let (state, real) = seeded().await;
        assert!(matches!(
            configure(&state, real.id).await,
            Err(ApiError::ConfigureWithoutCamera(_))
        ));

        let (camera, part) = {
            let catalog = state.catalog.read().await;
            (
                catalog.cameras.list(None)[0].id,
                catalog.parts.list(None)[0].id,
            )
        };

        let dto = PartDetectionDto {
            camera: Some(camera),
            ..Default::default()
        };
        update(&state, real.id, dto).await.unwrap();
        assert!(matches!(
            configure(&state, real.id).await,
            Err(ApiError::ConfigureWithoutParts(_))
        ));

        let dto = PartDetectionDto {
            camera: Some(camera),
            parts: vec![part],
            ..Default::default()
        };
        let saved = update(&state, real.id, dto).await.unwrap();
        assert_eq!(saved.parts, vec![part]);
        assert!(saved.updated_at.is_some());

        assert_eq!(configure(&state, real.id).await.unwrap(), SimpleStatus::ok());
        assert!(get_by_id(&state, real.id).await.unwrap().has_configured);
    }

    #[tokio::test]
    async fn test_prob_threshold() {
        let (state, real) = seeded().await;
        update_prob_threshold(&state, real.id, Some("55"))
            .await
            .unwrap();
        assert_eq!(get_by_id(&state, real.id).await.unwrap().prob_threshold, 55);

        assert!(matches!(
            update_prob_threshold(&state, real.id, None).await,
            Err(ApiError::ProbThreshold(ProbThresholdError::NotInteger))
        ));
        assert!(matches!(
            update_prob_threshold(&state, real.id, Some("150")).await,
            Err(ApiError::ProbThreshold(ProbThresholdError::OutOfRange(150)))
        ));
    }

    #[tokio::test]
    async fn test_unknown_id() {
        let state = AppState::new();
        assert!(matches!(
            configure(&state, 42).await,
            Err(ApiError::NotFound(_))
        ));
    }
}
