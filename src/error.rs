use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Download failed: {url}: {reason}")]
    DownloadError { url: String, reason: String },

    #[error("Extraction failed: {path}: {reason}")]
    ExtractionError { path: PathBuf, reason: String },

    #[error("Archive entry '{entry}' resolves outside the target directory")]
    UnsafeArchivePath { entry: String },

    #[error("Missing expected artifact: no extracted file matched '{name}'")]
    MissingArtifact { name: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },
}

impl FetchError {
    pub fn download<S: Into<String>>(url: S, reason: S) -> Self {
        FetchError::DownloadError {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn extraction<S: Into<String>>(path: &std::path::Path, reason: S) -> Self {
        FetchError::ExtractionError {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}
