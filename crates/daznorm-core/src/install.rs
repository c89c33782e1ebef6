//! Selective copying of a content root into an output directory.
//!
//! Entries copy item by item: directories recursively, files directly, with
//! destination files of the same name overwritten and directories merged.
//! Promotional-material filtering applies only to files at the top level of
//! the source root; nothing deeper is ever filtered.

use std::fs;
use std::path::Path;

use crate::Result;
use crate::content::is_promo_file;
use crate::copy::CopyBuffer;
use crate::copy::copy_file;

/// Statistics from one [`copy_content_root`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Files copied into the destination.
    pub files_copied: usize,
    /// Directories created or merged into.
    pub directories_copied: usize,
    /// Top-level promotional files skipped by the filter.
    pub promos_skipped: usize,
    /// Total file bytes written.
    pub bytes_copied: u64,
}

/// Copies every entry of `source_root` into `dest_dir`.
///
/// With `include_promos` false, top-level files with promotional extensions
/// are skipped. Existing destination entries of the same name are merged
/// (directories) or overwritten (files).
pub fn copy_content_root(
    source_root: &Path,
    dest_dir: &Path,
    include_promos: bool,
) -> Result<CopyStats> {
    fs::create_dir_all(dest_dir)?;

    let mut stats = CopyStats::default();
    let mut buffer = CopyBuffer::new();

    for entry in sorted_entries(source_root)? {
        let path = entry.path();
        let dest = dest_dir.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_tree(&path, &dest, &mut stats, &mut buffer)?;
        } else {
            if !include_promos && is_promo_file(&path) {
                log::debug!("skipping promo file {}", path.display());
                stats.promos_skipped += 1;
                continue;
            }
            stats.bytes_copied += copy_file(&path, &dest, &mut buffer)?;
            stats.files_copied += 1;
        }
    }

    Ok(stats)
}

/// Recursively copies `src` into `dest`, merging with whatever is already
/// there.
fn copy_tree(
    src: &Path,
    dest: &Path,
    stats: &mut CopyStats,
    buffer: &mut CopyBuffer,
) -> Result<()> {
    fs::create_dir_all(dest)?;
    stats.directories_copied += 1;

    for entry in sorted_entries(src)? {
        let path = entry.path();
        let child_dest = dest.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_tree(&path, &child_dest, stats, buffer)?;
        } else {
            stats.bytes_copied += copy_file(&path, &child_dest, buffer)?;
            stats.files_copied += 1;
        }
    }

    Ok(())
}

/// Directory entries sorted by file name for deterministic copy order.
fn sorted_entries(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir)?.collect::<std::io::Result<_>>()?;
    entries.sort_by_key(fs::DirEntry::file_name);
    Ok(entries)
}
