use std::path::PathBuf;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced by the prediction backend client
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection or network failure from the HTTP transport
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response received with a non-success status code
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read upload file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}
