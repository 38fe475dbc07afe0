use serde::Deserialize;

use crate::shared::error::ApiError;

/// `?is_demo=0|1` on listing endpoints
#[derive(Debug, Default, Deserialize)]
pub struct DemoFilter {
    pub is_demo: Option<String>,
}

impl DemoFilter {
    /// `None` when the parameter is absent (no filtering).
    pub fn parse(&self) -> Result<Option<bool>, ApiError> {
        match self.is_demo.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some("1") | Some("true") | Some("True") => Ok(Some(true)),
            Some("0") | Some("false") | Some("False") => Ok(Some(false)),
            Some(other) => Err(ApiError::Validation(format!(
                "is_demo must be 0 or 1, got {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProbThresholdQuery {
    pub prob_threshold: Option<String>,
}
