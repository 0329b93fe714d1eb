//! Error types for panmask

use thiserror::Error;

/// Errors raised while building or loading sanitizer settings.
///
/// Sanitizing text never fails; only configuration does.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
