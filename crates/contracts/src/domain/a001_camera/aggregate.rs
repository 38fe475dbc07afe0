use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateId, SelectableEntity};

// ============================================================================
// Aggregate
// ============================================================================

/// Камера, поставляющая кадры для инференса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub id: i64,
    pub name: String,
    /// RTSP stream url
    pub rtsp: String,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub is_demo: bool,
}

impl Camera {
    pub fn from_dto(id: i64, dto: CameraDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            rtsp: dto.rtsp.trim().to_string(),
            area: dto.area.filter(|a| !a.trim().is_empty()),
            is_demo: dto.is_demo,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Camera name is required".into());
        }
        if self.rtsp.trim().is_empty() {
            return Err("Camera rtsp url is required".into());
        }
        Ok(())
    }
}

impl SelectableEntity for Camera {
    fn id_key(&self) -> String {
        self.id.as_string()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

// ============================================================================
// DTO
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraDto {
    pub id: Option<i64>,
    pub name: String,
    pub rtsp: String,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub is_demo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dto_trims_and_drops_blank_area() {
        let camera = Camera::from_dto(
            7,
            CameraDto {
                id: None,
                name: "  Line 1 ".into(),
                rtsp: "rtsp://10.0.0.1/stream".into(),
                area: Some("   ".into()),
                is_demo: false,
            },
        );
        assert_eq!(camera.name, "Line 1");
        assert_eq!(camera.area, None);
        assert_eq!(camera.id_key(), "7");
        assert!(camera.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_rtsp() {
        let camera = Camera::from_dto(
            1,
            CameraDto {
                name: "cam".into(),
                ..Default::default()
            },
        );
        assert!(camera.validate().is_err());
    }
}
