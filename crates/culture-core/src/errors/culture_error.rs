use super::{CatalogError, ConfigError, ProfileError};

/// Top-level error for everything that crosses into the gap engine.
#[derive(Debug, thiserror::Error)]
pub enum CultureError {
    #[error("profile error: {0}")]
    ProfileError(#[from] ProfileError),

    #[error("catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type CultureResult<T> = Result<T, CultureError>;
