use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PchunkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Worker pool error: {0}")]
    Pool(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, PchunkError>;
