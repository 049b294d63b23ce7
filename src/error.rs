/// Error types for the mosaic review tool
///
/// Startup errors (configuration, data directory, sidecar files) are fatal and
/// abort before any window is created. Thumbnail decode errors are reported
/// through the same type but the caller only logs them.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Data directory does not exist: {}", .0.display())]
    DataDirNotFound(PathBuf),

    #[error("Data path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Sidecar label file not found: {}", .0.display())]
    MissingSidecar(PathBuf),

    #[error("Sidecar label file has no label line: {}", .0.display())]
    EmptyLabelFile(PathBuf),

    #[error("No .jpg images found in {}", .0.display())]
    EmptyDataset(PathBuf),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReviewError {
    /// True for the two sidecar failures that the skip policy may tolerate
    pub fn is_sidecar_error(&self) -> bool {
        matches!(self, Self::MissingSidecar(_) | Self::EmptyLabelFile(_))
    }
}

pub type Result<T> = std::result::Result<T, ReviewError>;
