use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateId, SelectableEntity};

/// Деталь, которую модель учится распознавать
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_demo: bool,
}

impl Part {
    pub fn from_dto(id: i64, dto: PartDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            description: dto.description,
            is_demo: dto.is_demo,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Part name is required".into());
        }
        Ok(())
    }
}

impl SelectableEntity for Part {
    fn id_key(&self) -> String {
        self.id.as_string()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartDto {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_demo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_is_rejected() {
        let part = Part::from_dto(
            1,
            PartDto {
                name: "   ".into(),
                ..Default::default()
            },
        );
        assert!(part.validate().is_err());
    }

    #[test]
    fn test_deserializes_without_optional_fields() {
        let part: Part = serde_json::from_str(r#"{"id": 3, "name": "Box"}"#).unwrap();
        assert_eq!(part.display_name(), "Box");
        assert!(!part.is_demo);
    }
}
