use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateId, SelectableEntity};

/// Name of the location every installation ships with.
pub const DEMO_LOCATION_NAME: &str = "Demo Location";

/// Место установки камер
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_demo: bool,
}

impl Location {
    pub fn from_dto(id: i64, dto: LocationDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            description: dto.description,
            is_demo: dto.is_demo,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Location name is required".into());
        }
        Ok(())
    }
}

impl SelectableEntity for Location {
    fn id_key(&self) -> String {
        self.id.as_string()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationDto {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_demo: bool,
}
