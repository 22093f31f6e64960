use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Index {index} is out of bounds (collection has {len} records)")]
    Index { index: usize, len: usize },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Corrupt data file {}: {reason}", .path.display())]
    CorruptData { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl OrreryError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        OrreryError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OrreryError>;
