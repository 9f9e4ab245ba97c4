//! Style configuration for annotation layout
//!
//! Layout never looks style values up globally; a `StyleConfig` is passed in
//! explicitly. Per-annotation overrides live on the annotation itself
//! (`Fingering::placement`, `Fingering::min_distance`).

pub mod errors;

pub use errors::StyleError;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::Placement;

/// Style values consumed by fingering layout
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    /// Absolute size of one staff space
    pub spatium: f32,

    /// Style placement; `None` lets the placement policy decide
    pub fingering_placement: Option<Placement>,

    /// Minimum clearance from the skyline, in staff spaces
    pub fingering_min_distance: f32,

    /// Text height of fingerings, in staff spaces
    pub fingering_text_size: f32,

    /// Text height of string numbers, in staff spaces
    pub string_number_text_size: f32,

    /// Padding between a string number and its circle frame, in staff spaces
    pub string_number_frame_padding: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            spatium: 24.8,
            fingering_placement: None,
            fingering_min_distance: 0.5,
            fingering_text_size: 1.6,
            string_number_text_size: 1.6,
            string_number_frame_padding: 0.2,
        }
    }
}

impl StyleConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, StyleError> {
        let style: StyleConfig = serde_yaml::from_str(source)?;
        style.validate()?;
        Ok(style)
    }

    pub fn from_json_str(source: &str) -> Result<Self, StyleError> {
        let style: StyleConfig = serde_json::from_str(source)?;
        style.validate()?;
        Ok(style)
    }

    /// Load a style file, picking the parser from the extension
    pub fn load(path: &Path) -> Result<Self, StyleError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content = fs::read_to_string(path)?;
        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&content),
            "json" => Self::from_json_str(&content),
            _ => Err(StyleError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Reject values layout cannot work with
    pub fn validate(&self) -> Result<(), StyleError> {
        let positive = [
            ("spatium", self.spatium),
            ("fingering_text_size", self.fingering_text_size),
            ("string_number_text_size", self.string_number_text_size),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(StyleError::InvalidValue { field, value });
            }
        }

        let finite = [
            ("fingering_min_distance", self.fingering_min_distance),
            ("string_number_frame_padding", self.string_number_frame_padding),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(StyleError::InvalidValue { field, value });
            }
        }
        Ok(())
    }

    /// Convert staff spaces to absolute units
    pub fn sp(&self, spaces: f32) -> f32 {
        spaces * self.spatium
    }
}
