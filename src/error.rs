// Error types for postboard.
// Covers HTTP transport, response status, decoding, and storage failures.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostboardError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Network response was not ok")]
    Status(StatusCode),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, PostboardError>;
