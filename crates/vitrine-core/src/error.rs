//! Error types for the boundary operations (payload files, preferences).
//!
//! The display derivations themselves never fail; only loading external
//! files can, and those paths return `VitrineResult`.

use thiserror::Error;

/// Result type for payload and preference loading.
pub type VitrineResult<T> = Result<T, VitrineError>;

/// Errors raised while loading externally supplied files.
#[derive(Debug, Error)]
pub enum VitrineError {
    #[error("Payload decode failed: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Preferences parse failed: {0}")]
    Prefs(#[from] toml::de::Error),

    #[error("Preferences encode failed: {0}")]
    PrefsEncode(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
