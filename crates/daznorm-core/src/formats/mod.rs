//! Archive format implementations.
//!
//! The format set is closed: zip, rar, and 7z, selected strictly by file
//! extension. There is no plugin mechanism and no content sniffing.

pub mod detect;
pub mod rar;
pub mod sevenz;
pub mod zip;

pub use detect::ArchiveKind;
pub use detect::detect_format;
pub use detect::is_archive_path;

use std::path::Path;

use crate::Result;

/// Extracts one archive into `dest_dir`, dispatching on the detected format.
///
/// # Errors
///
/// Returns [`crate::NormalizeError::UnsupportedFormat`] for unrecognized
/// extensions and [`crate::NormalizeError::Codec`] for decode failures.
/// Callers treat both as "nothing extracted" and continue; no
/// partial-extraction cleanup is attempted.
pub fn extract_archive(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    match detect_format(archive_path)? {
        ArchiveKind::Zip => zip::extract_zip(archive_path, dest_dir),
        ArchiveKind::Rar => rar::extract_rar(archive_path, dest_dir),
        ArchiveKind::SevenZ => sevenz::extract_sevenz(archive_path, dest_dir),
    }
}
