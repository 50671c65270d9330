use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCATION: &str = "Bangalore";

/// Crop name reported when nothing has been identified yet. It matches no
/// catalog entry, so advisories carry risk and spray guidance only.
pub const UNKNOWN_CROP: &str = "Unknown";

/// Per-caller analysis context: the crop being looked at and where.
///
/// Owned by whoever drives the advisory (a CLI invocation, a UI view);
/// the engine only ever sees the values passed out of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSession {
    crop: Option<String>,
    location: String,
}

impl AnalysisSession {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            crop: None,
            location: location.into(),
        }
    }

    pub fn with_crop(mut self, crop: impl Into<String>) -> Self {
        self.set_crop(crop);
        self
    }

    /// Record the crop produced by identification. Blank names clear it.
    pub fn set_crop(&mut self, crop: impl Into<String>) {
        let crop = crop.into();
        let trimmed = crop.trim();
        self.crop = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// Remember a new location; blank input keeps the previous one.
    pub fn set_location(&mut self, location: &str) -> bool {
        let trimmed = location.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.location = trimmed.to_string();
        true
    }

    pub fn crop(&self) -> Option<&str> {
        self.crop.as_deref()
    }

    pub fn crop_or_unknown(&self) -> &str {
        self.crop().unwrap_or(UNKNOWN_CROP)
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new(DEFAULT_LOCATION)
    }
}
