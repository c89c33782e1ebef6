//! 7z archive extraction.

use std::fs;
use std::path::Path;

use crate::NormalizeError;
use crate::Result;

/// Extracts a 7z archive into `dest_dir`.
///
/// # Errors
///
/// Returns [`NormalizeError::Codec`] if the decoder rejects the archive
/// (corrupt header, unsupported or encrypted compression).
pub fn extract_sevenz(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    fs::create_dir_all(dest_dir)?;

    sevenz_rust2::decompress_file(archive_path, dest_dir)
        .map_err(|e| NormalizeError::codec(archive_path, e))?;

    Ok(())
}
