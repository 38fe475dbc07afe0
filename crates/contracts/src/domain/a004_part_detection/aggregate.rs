use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Нижняя граница для maxImages
pub const MIN_MAX_IMAGES: i32 = 15;

// ============================================================================
// Aggregate
// ============================================================================

/// Конфигурация проекта распознавания деталей
///
/// One record per mode: the demo project and the real project are kept apart
/// by `is_demo`, the same partition the listing endpoints use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDetection {
    pub id: i64,
    pub camera: Option<i64>,
    pub location: Option<i64>,
    #[serde(default)]
    pub parts: Vec<i64>,
    #[serde(flatten)]
    pub settings: DetectionSettings,
    #[serde(default = "default_prob_threshold")]
    pub prob_threshold: i32,
    #[serde(default)]
    pub has_configured: bool,
    #[serde(default)]
    pub is_demo: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PartDetection {
    pub fn new(id: i64, is_demo: bool) -> Self {
        Self {
            id,
            camera: None,
            location: None,
            parts: Vec::new(),
            settings: DetectionSettings::default(),
            prob_threshold: default_prob_threshold(),
            has_configured: false,
            is_demo,
            updated_at: None,
        }
    }

    /// Применить данные из DTO
    pub fn apply(&mut self, dto: &PartDetectionDto) {
        self.camera = dto.camera;
        self.location = dto.location;
        self.parts = dto.parts.clone();
        self.settings = dto.settings.clone();
        self.updated_at = Some(Utc::now());
    }
}

fn default_prob_threshold() -> i32 {
    10
}

/// Retraining and cloud-message settings edited on the Part Identification page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionSettings {
    #[serde(rename = "needRetraining")]
    pub need_retraining: bool,
    #[serde(rename = "accuracyRangeMin")]
    pub accuracy_range_min: i32,
    #[serde(rename = "accuracyRangeMax")]
    pub accuracy_range_max: i32,
    #[serde(rename = "maxImages")]
    pub max_images: i32,
    #[serde(rename = "sendMessageToCloud")]
    pub send_message_to_cloud: bool,
    #[serde(rename = "framesPerMin")]
    pub frames_per_min: i32,
    #[serde(rename = "accuracyThreshold")]
    pub accuracy_threshold: i32,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            need_retraining: true,
            accuracy_range_min: 60,
            accuracy_range_max: 80,
            max_images: 20,
            send_message_to_cloud: false,
            frames_per_min: 6,
            accuracy_threshold: 50,
        }
    }
}

impl DetectionSettings {
    /// Проверка настроек
    ///
    /// Retraining fields are only checked while retraining is on, cloud
    /// fields only while messages are sent.
    pub fn validate(&self) -> Result<(), String> {
        if self.need_retraining {
            if self.max_images < MIN_MAX_IMAGES {
                return Err(format!("Cannot be less than {}", MIN_MAX_IMAGES));
            }
            if self.accuracy_range_min < 0 || self.accuracy_range_max > 100 {
                return Err("Accuracy range must be within 0..100".into());
            }
            if self.accuracy_range_min > self.accuracy_range_max {
                return Err("Accuracy range minimum exceeds maximum".into());
            }
        }
        if self.send_message_to_cloud {
            if !(0..=100).contains(&self.accuracy_threshold) {
                return Err("Accuracy threshold must be within 0..100".into());
            }
            if self.frames_per_min < 1 {
                return Err("Frames per minute must be at least 1".into());
            }
        }
        Ok(())
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Тело запроса на сохранение конфигурации
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartDetectionDto {
    pub camera: Option<i64>,
    pub location: Option<i64>,
    #[serde(default)]
    pub parts: Vec<i64>,
    #[serde(flatten)]
    pub settings: DetectionSettings,
}

/// Ответ вида `{"status": "ok"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleStatus {
    pub status: String,
}

impl SimpleStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".into(),
        }
    }
}

// ============================================================================
// Probability threshold
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbThresholdError {
    #[error("prob_threshold must be an integer")]
    NotInteger,

    #[error("prob_threshold must be within 0..100, got {0}")]
    OutOfRange(i64),
}

/// Разбор `prob_threshold` из query string
pub fn validate_prob_threshold(raw: &str) -> Result<i32, ProbThresholdError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ProbThresholdError::NotInteger)?;
    if !(0..=100).contains(&value) {
        return Err(ProbThresholdError::OutOfRange(value));
    }
    Ok(value as i32)
}
