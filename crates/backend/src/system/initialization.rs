use contracts::domain::a001_camera::aggregate::{Camera, CameraDto};
use contracts::domain::a002_part::aggregate::{Part, PartDto};
use contracts::domain::a003_location::aggregate::{Location, LocationDto, DEMO_LOCATION_NAME};
use contracts::domain::a004_part_detection::aggregate::PartDetection;

use crate::shared::data::{AppState, Catalog};

const DEMO_CAMERA_NAME: &str = "Demo Video";
const DEMO_CAMERA_RTSP: &str = "sample_video/video.mp4";
const DEMO_PARTS: [&str; 2] = ["Box", "Barrel"];

/// Заполнение демонстрационных данных
///
/// Update-or-create keyed by `(name, is_demo)`, so calling it again leaves
/// one copy of every demo record. Also makes sure a non-demo project exists
/// for the configuration page to edit.
pub async fn seed_demo_data(state: &AppState) -> anyhow::Result<()> {
    let mut catalog = state.catalog.write().await;

    tracing::info!("Creating Demo Location");
    let location = upsert_location(
        &mut catalog,
        LocationDto {
            id: None,
            name: DEMO_LOCATION_NAME.into(),
            description: DEMO_LOCATION_NAME.into(),
            is_demo: true,
        },
    )?;

    tracing::info!("Creating Demo Camera");
    let camera = upsert_camera(
        &mut catalog,
        CameraDto {
            id: None,
            name: DEMO_CAMERA_NAME.into(),
            rtsp: DEMO_CAMERA_RTSP.into(),
            area: None,
            is_demo: true,
        },
    )?;

    tracing::info!("Creating Demo Parts");
    let mut parts = Vec::with_capacity(DEMO_PARTS.len());
    for name in DEMO_PARTS {
        let part = upsert_part(
            &mut catalog,
            PartDto {
                id: None,
                name: name.into(),
                description: format!("Demo {}", name.to_lowercase()),
                is_demo: true,
            },
        )?;
        parts.push(part.id);
    }

    let demo_project = catalog.part_detections.find(|pd| pd.is_demo).map(|pd| pd.id);
    let demo_project = match demo_project {
        Some(id) => id,
        None => catalog
            .part_detections
            .insert_with(|id| PartDetection::new(id, true))
            .id,
    };
    if let Some(pd) = catalog.part_detections.get_mut(demo_project) {
        pd.camera = Some(camera.id);
        pd.location = Some(location.id);
        pd.parts = parts;
        pd.settings.need_retraining = false;
        pd.has_configured = true;
    }

    if catalog.part_detections.find(|pd| !pd.is_demo).is_none() {
        tracing::info!("Creating default project");
        catalog
            .part_detections
            .insert_with(|id| PartDetection::new(id, false));
    }

    tracing::info!(
        "Demo data ready: {} cameras, {} parts, {} locations, {} projects",
        catalog.cameras.len(),
        catalog.parts.len(),
        catalog.locations.len(),
        catalog.part_detections.len()
    );
    Ok(())
}

fn upsert_location(catalog: &mut Catalog, dto: LocationDto) -> anyhow::Result<Location> {
    let existing = catalog
        .locations
        .find(|l| l.name == dto.name && l.is_demo == dto.is_demo)
        .map(|l| l.id);
    let location = match existing {
        Some(id) => {
            let updated = Location::from_dto(id, dto);
            if let Some(row) = catalog.locations.get_mut(id) {
                *row = updated.clone();
            }
            updated
        }
        None => catalog.locations.insert_with(|id| Location::from_dto(id, dto)),
    };
    location.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(location)
}

fn upsert_camera(catalog: &mut Catalog, dto: CameraDto) -> anyhow::Result<Camera> {
    let existing = catalog
        .cameras
        .find(|c| c.name == dto.name && c.is_demo == dto.is_demo)
        .map(|c| c.id);
    let camera = match existing {
        Some(id) => {
            let updated = Camera::from_dto(id, dto);
            if let Some(row) = catalog.cameras.get_mut(id) {
                *row = updated.clone();
            }
            updated
        }
        None => catalog.cameras.insert_with(|id| Camera::from_dto(id, dto)),
    };
    camera.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(camera)
}

fn upsert_part(catalog: &mut Catalog, dto: PartDto) -> anyhow::Result<Part> {
    let existing = catalog
        .parts
        .find(|p| p.name == dto.name && p.is_demo == dto.is_demo)
        .map(|p| p.id);
    let part = match existing {
        Some(id) => {
            let updated = Part::from_dto(id, dto);
            if let Some(row) = catalog.parts.get_mut(id) {
                *row = updated.clone();
            }
            updated
        }
        None => catalog.parts.insert_with(|id| Part::from_dto(id, dto)),
    };
    part.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let state = AppState::new();
        seed_demo_data(&state).await.unwrap();
        seed_demo_data(&state).await.unwrap();

        let catalog = state.catalog.read().await;
        assert_eq!(catalog.locations.len(), 1);
        assert_eq!(catalog.cameras.len(), 1);
        assert_eq!(catalog.parts.len(), DEMO_PARTS.len());
        assert_eq!(catalog.part_detections.len(), 2);
    }

    #[tokio::test]
    async fn test_demo_project_points_at_demo_records() {
        let state = AppState::new();
        seed_demo_data(&state).await.unwrap();

        let catalog = state.catalog.read().await;
        let demo = catalog.part_detections.find(|pd| pd.is_demo).unwrap();
        let location = catalog.locations.get(demo.location.unwrap()).unwrap();
        assert_eq!(location.name, DEMO_LOCATION_NAME);
        assert!(location.is_demo);
        assert_eq!(demo.parts.len(), 2);
        assert!(demo.has_configured);

        let real = catalog.part_detections.find(|pd| !pd.is_demo).unwrap();
        assert_eq!(real.camera, None);
        assert!(real.parts.is_empty());
    }
}
