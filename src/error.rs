//! Error types for screate.

use thiserror::Error;

/// Result type for screate operations.
pub type Result<T> = std::result::Result<T, CreateError>;

/// Banner prefixed onto init script failures so users can tell which step
/// of project creation broke.
pub const INIT_FAILED_BANNER: &str = "Oh no! Template's spacey.init script failed";

/// Main error type for screate.
#[derive(Error, Debug)]
pub enum CreateError {
    /// The init script's own dependency install failed
    #[error("Dependency install exited with status {code}")]
    InstallFailed { code: i32 },

    /// The init script entry has no callable export
    #[error("spacey.init/index.js must export an init function.")]
    MissingInitExport,

    /// The init script was invoked but did not complete successfully
    #[error("{0}")]
    InitScriptFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General error with message
    #[error("{0}")]
    Other(String),
}

impl CreateError {
    /// Wrap an init script failure with the fixed banner.
    pub fn init_failed(message: impl AsRef<str>) -> Self {
        CreateError::InitScriptFailed(format!("{INIT_FAILED_BANNER}\n\n{}", message.as_ref()))
    }
}

impl From<anyhow::Error> for CreateError {
    fn from(err: anyhow::Error) -> Self {
        CreateError::Other(err.to_string())
    }
}

impl From<&str> for CreateError {
    fn from(s: &str) -> Self {
        CreateError::Other(s.to_string())
    }
}

impl From<String> for CreateError {
    fn from(s: String) -> Self {
        CreateError::Other(s)
    }
}
