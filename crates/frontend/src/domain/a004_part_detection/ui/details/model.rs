use contracts::domain::a004_part_detection::aggregate::{
    PartDetection, PartDetectionDto, SimpleStatus,
};

use crate::shared::api_utils::{get_json, put_json};

/// Проект для режима: демо или обычный
pub async fn fetch_project(is_demo: bool) -> Result<Option<PartDetection>, String> {
    let list: Vec<PartDetection> =
        get_json(&format!("/api/part_detections/?is_demo={}", u8::from(is_demo))).await?;
    Ok(list.into_iter().next())
}

pub async fn save_project(id: i64, dto: &PartDetectionDto) -> Result<PartDetection, String> {
    put_json(&format!("/api/part_detections/{}", id), dto).await
}

pub async fn configure(id: i64) -> Result<SimpleStatus, String> {
    get_json(&format!("/api/part_detections/{}/configure", id)).await
}
