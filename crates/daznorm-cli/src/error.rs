//! Error conversion utilities for CLI.
//!
//! Converts daznorm-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Result;
use anyhow::anyhow;
use daznorm_core::NormalizeError;
use std::path::Path;

/// Converts `NormalizeError` to a user-friendly anyhow error with context.
pub fn convert_normalize_error(err: NormalizeError, dir: &Path) -> anyhow::Error {
    match err {
        NormalizeError::UnsupportedFormat => {
            anyhow!(
                "Unsupported archive format under '{}'\n\
                 HINT: Supported formats: zip, rar, 7z.",
                dir.display()
            )
        }
        NormalizeError::Codec { path, message } => {
            anyhow!(
                "Failed to decode archive '{}': {message}\n\
                 HINT: The archive may be corrupted or use an unsupported compression method.",
                path.display()
            )
        }
        NormalizeError::PassLimitExceeded { passes } => {
            anyhow!(
                "Nested unpacking under '{}' did not settle after {passes} passes\n\
                 HINT: An archive may be recreating itself when extracted. Inspect with --keep-temp.",
                dir.display()
            )
        }
        NormalizeError::Io(io_err) => {
            anyhow!("I/O error while processing '{}': {io_err}", dir.display())
        }
    }
}

/// Adds directory context to a core result.
pub fn add_dir_context<T>(result: Result<T, NormalizeError>, dir: &Path) -> anyhow::Result<T> {
    result.map_err(|e| convert_normalize_error(e, dir))
}
