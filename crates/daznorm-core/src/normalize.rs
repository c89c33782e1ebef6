//! Per-archive normalization pipeline and batch driver.
//!
//! Each archive runs the same sequence in its own scratch directory: extract,
//! recursively unpack nested archives, locate the content root, copy the
//! root's contents to the output, then either package a per-archive zip or
//! leave the copy merged in the shared `Content/` tree. Archives are
//! processed one at a time; a failure is confined to its archive and never
//! aborts the batch.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::Result;
use crate::formats;
use crate::install;
use crate::install::CopyStats;
use crate::locate;
use crate::package;
use crate::unpack;

/// Name of the shared output directory in merge mode.
pub const CONTENT_DIR_NAME: &str = "Content";

/// Suffix appended to an archive's stem to name its normalized output.
pub const NORMALIZED_SUFFIX: &str = "_normalized";

/// Options controlling a normalization run.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Copy promotional files (images, documentation) instead of skipping
    /// them.
    pub include_promos: bool,
    /// Retain per-archive scratch directories for inspection.
    pub keep_temp: bool,
    /// Merge every archive's content into one shared `Content/` directory
    /// instead of producing one normalized zip per archive.
    pub merge_into_content: bool,
}

/// What happened to a single archive.
#[derive(Debug, Clone)]
pub enum ArchiveOutcome {
    /// Per-archive mode: content copied and packaged as a flat zip.
    Normalized {
        /// Path of the produced zip.
        zip_path: PathBuf,
        /// Copy statistics.
        stats: CopyStats,
    },
    /// Merge mode: content copied into the shared `Content/` directory.
    Merged {
        /// Copy statistics.
        stats: CopyStats,
    },
    /// No content root was found; the archive was abandoned without output.
    NoContentRoot,
    /// Extraction or a later step failed; the archive produced no output.
    Failed {
        /// Human-readable failure description.
        message: String,
    },
}

impl ArchiveOutcome {
    /// Returns `true` for outcomes that produced output.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Normalized { .. } | Self::Merged { .. })
    }
}

/// Result for one archive of a batch.
#[derive(Debug, Clone)]
pub struct ArchiveResult {
    /// The input archive.
    pub archive: PathBuf,
    /// What happened to it.
    pub outcome: ArchiveOutcome,
}

/// Accumulated results of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Per-archive results in processing order.
    pub results: Vec<ArchiveResult>,
}

impl BatchReport {
    /// Records the outcome for one archive.
    pub fn push(&mut self, archive: PathBuf, outcome: ArchiveOutcome) {
        self.results.push(ArchiveResult { archive, outcome });
    }

    /// Archives that produced output.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome.is_success())
            .count()
    }

    /// Archives abandoned because no content root was found.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, ArchiveOutcome::NoContentRoot))
            .count()
    }

    /// Archives that failed outright.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, ArchiveOutcome::Failed { .. }))
            .count()
    }
}

/// Scans `input_dir` (non-recursively) for supported archives, sorted by
/// path for deterministic processing order.
pub fn discover_archives(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut archives = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file() && formats::is_archive_path(&path) {
            archives.push(path);
        }
    }
    archives.sort();
    Ok(archives)
}

/// Runs the full pipeline for one archive.
///
/// Contained failures (decode errors, missing content root, unpack pass-limit
/// hits) come back as an [`ArchiveOutcome`]; only scratch-directory creation
/// failures surface as `Err`.
pub fn process_archive(
    archive: &Path,
    output_dir: &Path,
    options: &NormalizeOptions,
) -> Result<ArchiveOutcome> {
    let scratch = tempfile::tempdir()?;
    log::info!("processing {}", archive.display());

    let outcome = run_pipeline(archive, scratch.path(), output_dir, options);
    release_scratch(scratch, options.keep_temp);

    match outcome {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            log::warn!("failed to process {}: {e}", archive.display());
            Ok(ArchiveOutcome::Failed {
                message: e.to_string(),
            })
        }
    }
}

/// Processes every archive discovered in `input_dir`, writing results under
/// `output_dir`.
///
/// An empty input directory yields an empty report. Per-archive failures are
/// recorded in the report, not propagated.
pub fn run(
    input_dir: &Path,
    output_dir: &Path,
    options: &NormalizeOptions,
) -> Result<BatchReport> {
    fs::create_dir_all(output_dir)?;

    let archives = discover_archives(input_dir)?;
    let mut report = BatchReport::default();
    if archives.is_empty() {
        log::warn!("no archives found in {}", input_dir.display());
        return Ok(report);
    }

    for archive in archives {
        let outcome = match process_archive(&archive, output_dir, options) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("failed to process {}: {e}", archive.display());
                ArchiveOutcome::Failed {
                    message: e.to_string(),
                }
            }
        };
        report.push(archive, outcome);
    }

    Ok(report)
}

fn run_pipeline(
    archive: &Path,
    scratch: &Path,
    output_dir: &Path,
    options: &NormalizeOptions,
) -> Result<ArchiveOutcome> {
    if let Err(e) = formats::extract_archive(archive, scratch) {
        log::warn!("failed to extract {}: {e}", archive.display());
        return Ok(ArchiveOutcome::Failed {
            message: e.to_string(),
        });
    }

    unpack::unpack_nested(scratch)?;

    let Some(content_root) = locate::find_content_root(scratch)? else {
        log::warn!("no content root found in {}", archive.display());
        return Ok(ArchiveOutcome::NoContentRoot);
    };
    log::debug!("content root: {}", content_root.display());

    if options.merge_into_content {
        let content_dir = output_dir.join(CONTENT_DIR_NAME);
        fs::create_dir_all(&content_dir)?;
        let stats =
            install::copy_content_root(&content_root, &content_dir, options.include_promos)?;
        Ok(ArchiveOutcome::Merged { stats })
    } else {
        let stem = archive.file_stem().map_or_else(
            || "archive".to_string(),
            |s| s.to_string_lossy().into_owned(),
        );
        let normalized_name = format!("{stem}{NORMALIZED_SUFFIX}");
        let normalized_dir = output_dir.join(&normalized_name);
        fs::create_dir_all(&normalized_dir)?;

        let stats =
            install::copy_content_root(&content_root, &normalized_dir, options.include_promos)?;

        let zip_path = output_dir.join(format!("{normalized_name}.zip"));
        package::zip_directory(&normalized_dir, &zip_path)?;
        Ok(ArchiveOutcome::Normalized { zip_path, stats })
    }
}

fn release_scratch(scratch: TempDir, keep: bool) {
    if keep {
        let path = scratch.keep();
        log::info!("keeping scratch directory for inspection: {}", path.display());
    }
    // otherwise dropped here; cleanup is best-effort
}
