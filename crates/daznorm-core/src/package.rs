//! Flat zip packaging of a normalized directory.

use std::fs::File;
use std::io;
use std::path::Path;

use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;

/// Statistics from one [`zip_directory`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackageStats {
    /// Files added to the archive.
    pub files_added: usize,
    /// Directory entries added to the archive.
    pub directories_added: usize,
    /// Uncompressed file bytes written.
    pub bytes_written: u64,
}

/// Packages the contents of `src_dir` as a single deflate zip at `output`.
///
/// Entry names are relative to `src_dir` with forward-slash separators;
/// directories get explicit entries with trailing slashes.
pub fn zip_directory(src_dir: &Path, output: &Path) -> Result<PackageStats> {
    let file = File::create(output)?;
    let mut zip = ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut stats = PackageStats::default();
    let mut buffer = CopyBuffer::new();

    for entry in WalkDir::new(src_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| io::Error::other(format!("walk error: {e}")))?;
        let rel = entry
            .path()
            .strip_prefix(src_dir)
            .map_err(|e| io::Error::other(format!("path outside source root: {e}")))?;
        if rel.as_os_str().is_empty() {
            continue; // the root itself has no entry
        }
        let name = zip_entry_name(rel)?;

        if entry.file_type().is_dir() {
            zip.add_directory(format!("{name}/"), options)
                .map_err(|e| io::Error::other(format!("failed to add directory: {e}")))?;
            stats.directories_added += 1;
        } else {
            zip.start_file(&name, options)
                .map_err(|e| io::Error::other(format!("failed to start file in zip: {e}")))?;
            let mut input = File::open(entry.path())?;
            stats.bytes_written += copy_with_buffer(&mut input, &mut zip, &mut buffer)?;
            stats.files_added += 1;
        }
    }

    zip.finish()
        .map_err(|e| io::Error::other(format!("failed to finish zip archive: {e}")))?;

    Ok(stats)
}

/// Normalizes a relative path for zip entry naming.
///
/// Zip entries use forward slashes regardless of platform.
fn zip_entry_name(path: &Path) -> Result<String> {
    let path_str = path.to_str().ok_or_else(|| {
        io::Error::other(format!("path is not valid UTF-8: {}", path.display()))
    })?;

    #[cfg(windows)]
    let name = path_str.replace('\\', "/");

    #[cfg(not(windows))]
    let name = path_str.to_string();

    Ok(name)
}
