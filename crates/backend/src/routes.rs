use axum::{routing::get, Router};

use crate::handlers;
use crate::shared::data::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Cameras
        .route(
            "/api/cameras/",
            get(handlers::a001_camera::list_all).post(handlers::a001_camera::create),
        )
        .route(
            "/api/cameras/:id",
            get(handlers::a001_camera::get_by_id).delete(handlers::a001_camera::delete),
        )
        // Parts
        .route(
            "/api/parts/",
            get(handlers::a002_part::list_all).post(handlers::a002_part::create),
        )
        .route(
            "/api/parts/:id",
            get(handlers::a002_part::get_by_id).delete(handlers::a002_part::delete),
        )
        // Locations
        .route(
            "/api/locations/",
            get(handlers::a003_location::list_all).post(handlers::a003_location::create),
        )
        .route(
            "/api/locations/:id",
            get(handlers::a003_location::get_by_id).delete(handlers::a003_location::delete),
        )
        // Part detections (project configuration)
        .route(
            "/api/part_detections/",
            get(handlers::a004_part_detection::list_all),
        )
        .route(
            "/api/part_detections/:id",
            get(handlers::a004_part_detection::get_by_id)
                .put(handlers::a004_part_detection::update),
        )
        .route(
            "/api/part_detections/:id/configure",
            get(handlers::a004_part_detection::configure),
        )
        .route(
            "/api/part_detections/:id/update_prob_threshold",
            get(handlers::a004_part_detection::update_prob_threshold),
        )
        .with_state(state)
}
