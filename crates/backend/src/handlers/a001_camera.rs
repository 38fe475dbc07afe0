use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_camera::aggregate::{Camera, CameraDto};

use super::query::DemoFilter;
use crate::domain::a001_camera::service;
use crate::shared::data::AppState;
use crate::shared::error::ApiError;

/// GET /api/cameras/?is_demo=0|1
pub async fn list_all(
    State(state): State<AppState>,
    Query(filter): Query<DemoFilter>,
) -> Result<Json<Vec<Camera>>, ApiError> {
    let is_demo = filter.parse()?;
    Ok(Json(service::list(&state, is_demo).await))
}

/// GET /api/cameras/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Camera>, ApiError> {
    service::get_by_id(&state, id).await.map(Json)
}

/// POST /api/cameras/
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CameraDto>,
) -> Result<(StatusCode, Json<Camera>), ApiError> {
    let created = service::create(&state, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /api/cameras/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    service::delete(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::initialization::seed_demo_data;

    #[tokio::test]
    async fn test_list_respects_demo_filter() {
        let state = AppState::new();
        seed_demo_data(&state).await.unwrap();
        service::create(
            &state,
            CameraDto {
                name: "Line 2".into(),
                rtsp: "rtsp://10.0.0.2/live".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let Json(all) = list_all(State(state.clone()), Query(DemoFilter::default()))
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let Json(real) = list_all(
            State(state.clone()),
            Query(DemoFilter {
                is_demo: Some("0".into()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(real.len(), 1);
        assert_eq!(real[0].name, "Line 2");
    }

    #[tokio::test]
    async fn test_get_missing_is_404() {
        let state = AppState::new();
        let err = get_by_id(State(state), Path(5)).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_returns_201() {
        let state = AppState::new();
        let (status, Json(camera)) = create(
            State(state),
            Json(CameraDto {
                name: "Dock".into(),
                rtsp: "rtsp://dock/live".into(),
                ..Default::default()
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(camera.id, 1);
    }
}
