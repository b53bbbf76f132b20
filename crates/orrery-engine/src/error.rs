use thiserror::Error;

/// Errors raised while loading the static catalog or the configuration.
/// Per-frame operations never fail; they clamp or ignore instead.
#[derive(Debug, Error)]
pub enum OrreryError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate body id `{0}`")]
    DuplicateBodyId(String),
    #[error("duplicate satellite id `{id}` under `{parent}`")]
    DuplicateSatelliteId { parent: String, id: String },
    #[error("body with empty id (name: `{0}`)")]
    EmptyId(String),
}

pub type Result<T> = std::result::Result<T, OrreryError>;
