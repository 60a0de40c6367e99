use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the formatting helpers and the config loader
#[derive(Debug, Error)]
pub enum Error {
    #[error("Timestamp out of range: {ms}ms")]
    TimestampOutOfRange { ms: i64 },

    #[error("Configuration error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("IO operation failed: {operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }
}
