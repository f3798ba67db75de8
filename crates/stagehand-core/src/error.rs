//! Error types for Stagehand

use thiserror::Error;

/// The main error type for Stagehand operations
#[derive(Debug, Error)]
pub enum StagehandError {
    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Build list error: {0}")]
    BuildListError(String),

    #[error("Host error: {0}")]
    HostError(String),

    #[error("Settings error: {0}")]
    SettingsError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type alias for Stagehand operations
pub type Result<T> = std::result::Result<T, StagehandError>;

impl From<toml::de::Error> for StagehandError {
    fn from(err: toml::de::Error) -> Self {
        StagehandError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for StagehandError {
    fn from(err: toml::ser::Error) -> Self {
        StagehandError::TomlSerError(err.to_string())
    }
}

impl From<serde_json::Error> for StagehandError {
    fn from(err: serde_json::Error) -> Self {
        StagehandError::JsonError(err.to_string())
    }
}
