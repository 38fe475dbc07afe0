use axum::extract::{Path, Query, State};
use axum::Json;
use contracts::domain::a004_part_detection::aggregate::{
    PartDetection, PartDetectionDto, SimpleStatus,
};

use super::query::{DemoFilter, ProbThresholdQuery};
use crate::domain::a004_part_detection::service;
use crate::shared::data::AppState;
use crate::shared::error::ApiError;

/// GET /api/part_detections/?is_demo=0|1
pub async fn list_all(
    State(state): State<AppState>,
    Query(filter): Query<DemoFilter>,
) -> Result<Json<Vec<PartDetection>>, ApiError> {
    let is_demo = filter.parse()?;
    Ok(Json(service::list(&state, is_demo).await))
}

/// GET /api/part_detections/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PartDetection>, ApiError> {
    service::get_by_id(&state, id).await.map(Json)
}

/// PUT /api/part_detections/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<PartDetectionDto>,
) -> Result<Json<PartDetection>, ApiError> {
    service::update(&state, id, dto).await.map(Json)
}

/// GET /api/part_detections/:id/configure
pub async fn configure(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SimpleStatus>, ApiError> {
    service::configure(&state, id).await.map(Json)
}

/// GET /api/part_detections/:id/update_prob_threshold?prob_threshold=N
pub async fn update_prob_threshold(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(q): Query<ProbThresholdQuery>,
) -> Result<Json<SimpleStatus>, ApiError> {
    service::update_prob_threshold(&state, id, q.prob_threshold.as_deref())
        .await
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::initialization::seed_demo_data;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_project_lookup_by_mode() {
        let state = AppState::new();
        seed_demo_data(&state).await.unwrap();

        let Json(demo) = list_all(
            State(state.clone()),
            Query(DemoFilter {
                is_demo: Some("1".into()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(demo.len(), 1);
        assert!(demo[0].is_demo);
        assert!(demo[0].camera.is_some());
    }

    #[tokio::test]
    async fn test_bad_threshold_is_400() {
        let state = AppState::new();
        seed_demo_data(&state).await.unwrap();

        let err = update_prob_threshold(
            State(state),
            Path(1),
            Query(ProbThresholdQuery {
                prob_threshold: Some("high".into()),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
