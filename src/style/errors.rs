//! Error types for style loading

use thiserror::Error;

/// Failure to load or validate a `StyleConfig`
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Failed to read style file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse style YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse style JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither YAML nor JSON
    #[error("Unsupported style format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid style value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f32 },
}
