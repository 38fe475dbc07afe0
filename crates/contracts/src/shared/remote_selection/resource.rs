use serde::{Deserialize, Serialize};
use std::fmt;

/// Вид ресурса, который можно перечислить через `/api/{kind}/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Cameras,
    Parts,
    Locations,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Cameras => "cameras",
            ResourceKind::Parts => "parts",
            ResourceKind::Locations => "locations",
        }
    }

    /// Singular label used by selectors ("Select camera", "Add camera").
    pub fn module_name(&self) -> &'static str {
        match self {
            ResourceKind::Cameras => "camera",
            ResourceKind::Parts => "parts",
            ResourceKind::Locations => "location",
        }
    }

    /// Whether a listing for this kind carries the `is_demo` filter.
    ///
    /// Cameras in demo mode are listed unfiltered.
    pub fn filters_demo(&self, is_demo: bool) -> bool {
        !(matches!(self, ResourceKind::Cameras) && is_demo)
    }

    /// Listing path relative to the API base.
    pub fn list_path(&self, is_demo: bool) -> String {
        if self.filters_demo(is_demo) {
            format!("/api/{}/?is_demo={}", self.as_str(), u8::from(is_demo))
        } else {
            format!("/api/{}/", self.as_str())
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The (source, filter) pair a store is loaded for. A change of key is what
/// triggers a refetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadKey {
    pub kind: ResourceKind,
    pub is_demo: bool,
}

impl LoadKey {
    pub fn new(kind: ResourceKind, is_demo: bool) -> Self {
        Self { kind, is_demo }
    }

    pub fn list_path(&self) -> String {
        self.kind.list_path(self.is_demo)
    }
}

impl fmt::Display for LoadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(is_demo={})", self.kind, self.is_demo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_paths() {
        assert_eq!(ResourceKind::Parts.list_path(false), "/api/parts/?is_demo=0");
        assert_eq!(ResourceKind::Parts.list_path(true), "/api/parts/?is_demo=1");
        assert_eq!(
            ResourceKind::Locations.list_path(true),
            "/api/locations/?is_demo=1"
        );
        assert_eq!(
            ResourceKind::Cameras.list_path(false),
            "/api/cameras/?is_demo=0"
        );
    }

    #[test]
    fn test_demo_cameras_are_unfiltered() {
        assert_eq!(ResourceKind::Cameras.list_path(true), "/api/cameras/");
        assert!(!ResourceKind::Cameras.filters_demo(true));
        assert!(ResourceKind::Parts.filters_demo(true));
    }
}
