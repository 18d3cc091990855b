use std::path::PathBuf;

use thiserror::Error;

use crate::app::domain::SessionId;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not open file: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not save file: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The file could not be found at the specified location: {}", .0.display())]
    NotFound(PathBuf),

    #[error("No open tab with id {}", .0.0)]
    UnknownSession(SessionId),
}

impl AppError {
    /// Title used when the error is shown in an alert.
    pub fn title(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "File Not Found",
            _ => "Error",
        }
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
