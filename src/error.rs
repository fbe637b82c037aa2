//! Environment error types

use thiserror::Error;

/// Errors surfaced across the environment boundary.
///
/// Out-of-bounds baskets and missed apples are not errors; they end the
/// episode through the `(reward, done)` pair.
#[derive(Debug, Error)]
pub enum EnvError {
    /// Numeric action outside the discrete action space
    #[error("action {0} out of range (expected 0..3)")]
    InvalidAction(u8),

    /// Configuration rejected by validation
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EnvError>;
