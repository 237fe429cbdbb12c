//! Error types for the CLI

/// CLI Result type
pub type Result<T> = std::result::Result<T, Error>;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Resolve(#[from] cluster_auth::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
