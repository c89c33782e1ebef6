//! Error types for normalization operations.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `NormalizeError`.
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Errors that can occur while normalizing asset archives.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive extension is outside the supported set (zip/rar/7z).
    #[error("unsupported archive format")]
    UnsupportedFormat,

    /// A codec failed to decode an archive. Treated as "nothing extracted"
    /// by callers; whatever was written before the failure remains on disk.
    #[error("failed to extract {path}: {message}")]
    Codec {
        /// The archive that failed to decode.
        path: PathBuf,
        /// Underlying decoder message.
        message: String,
    },

    /// Nested unpacking did not settle within the pass cap. Extraction
    /// recreated an identically named archive in a cycle, or deletions kept
    /// failing.
    #[error("nested unpacking did not settle after {passes} passes")]
    PassLimitExceeded {
        /// Number of passes that ran before giving up.
        passes: u32,
    },
}

impl NormalizeError {
    /// Builds a [`NormalizeError::Codec`] from an archive path and any
    /// displayable decoder error.
    pub fn codec(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Codec {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}
