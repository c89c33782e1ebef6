//! Recursive unpacking of nested archives.
//!
//! Asset bundles routinely ship archives inside archives (a zip of rars of
//! zips). Each pass scans the whole tree for remaining archive files,
//! extracts every one into its containing directory, and deletes it. Passes
//! repeat until a scan finds nothing. Progress is driven by the deletions, so
//! the loop settles unless extraction keeps recreating an identically named
//! archive; a pass cap turns that pathological case into a reported error
//! instead of an infinite loop.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::NormalizeError;
use crate::Result;
use crate::formats;

/// Upper bound on unpacking passes before giving up.
pub const MAX_UNPACK_PASSES: u32 = 32;

/// Statistics from one [`unpack_nested`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnpackReport {
    /// Number of extraction passes that found at least one archive. A tree
    /// with no nested archives reports zero.
    pub passes: u32,
    /// Archives successfully extracted and deleted.
    pub archives_unpacked: usize,
    /// Archives whose extraction failed (they are still deleted, and the
    /// failure is non-fatal).
    pub failures: usize,
}

/// Repeatedly extracts and deletes nested archives under `root` until none
/// remain.
///
/// Extraction and deletion failures are logged and non-fatal; the loop
/// continues with the next archive.
///
/// # Errors
///
/// Returns [`NormalizeError::PassLimitExceeded`] if archives are still being
/// found after [`MAX_UNPACK_PASSES`] passes.
pub fn unpack_nested(root: &Path) -> Result<UnpackReport> {
    let mut report = UnpackReport::default();

    loop {
        let archives = collect_archives(root);
        if archives.is_empty() {
            log::debug!(
                "no archives left under {} after {} passes",
                root.display(),
                report.passes
            );
            return Ok(report);
        }
        if report.passes == MAX_UNPACK_PASSES {
            return Err(NormalizeError::PassLimitExceeded {
                passes: report.passes,
            });
        }
        report.passes += 1;
        log::debug!(
            "pass {}: found {} nested archives",
            report.passes,
            archives.len()
        );

        for archive in archives {
            let dest = archive
                .parent()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf);

            match formats::extract_archive(&archive, &dest) {
                Ok(()) => report.archives_unpacked += 1,
                Err(e) => {
                    log::warn!("failed to unpack nested archive {}: {e}", archive.display());
                    report.failures += 1;
                }
            }

            // Deleting the input archive is what guarantees progress;
            // a missing file means someone beat us to it.
            if let Err(e) = fs::remove_file(&archive)
                && e.kind() != io::ErrorKind::NotFound
            {
                log::warn!("failed to delete {}: {e}", archive.display());
            }
        }
    }
}

/// Scans the tree for archive files, sorted by path.
fn collect_archives(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) if entry.file_type().is_file() => {
                let path = entry.into_path();
                formats::is_archive_path(&path).then_some(path)
            }
            Ok(_) => None,
            Err(e) => {
                log::warn!("walk error under {}: {e}", root.display());
                None
            }
        })
        .collect()
}
