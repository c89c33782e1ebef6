//! ZIP archive extraction.

use std::fs;
use std::fs::File;
use std::path::Path;

use zip::ZipArchive;

use crate::NormalizeError;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;

/// Extracts a ZIP archive into `dest_dir`.
///
/// Entries whose names would escape `dest_dir` are skipped.
///
/// # Errors
///
/// Returns [`NormalizeError::Codec`] if the archive cannot be opened or an
/// entry fails to decode; files written before the failure remain on disk.
pub fn extract_zip(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = File::open(archive_path)?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| NormalizeError::codec(archive_path, e))?;

    let mut buffer = CopyBuffer::new();
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| NormalizeError::codec(archive_path, e))?;

        // enclosed_name rejects absolute and parent-escaping entry names
        let Some(entry_path) = entry.enclosed_name() else {
            log::warn!(
                "skipping unsafe entry name in {}: {}",
                archive_path.display(),
                entry.name()
            );
            continue;
        };
        let output_path = dest_dir.join(entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path)?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = File::create(&output_path)?;
            copy_with_buffer(&mut entry, &mut outfile, &mut buffer)?;
        }
    }

    Ok(())
}
