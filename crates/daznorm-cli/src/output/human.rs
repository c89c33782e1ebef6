//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use daznorm_core::ArchiveOutcome;
use daznorm_core::BatchReport;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn archive_name(archive: &Path) -> String {
        archive.file_name().map_or_else(
            || archive.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        )
    }

    fn write_status(&self, marker: console::StyledObject<&str>, plain: &str, rest: &str) {
        if self.use_colors {
            let _ = self.term.write_line(&format!("{marker} {rest}"));
        } else {
            let _ = self.term.write_line(&format!("{plain} {rest}"));
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_archive_outcome(&self, archive: &Path, outcome: &ArchiveOutcome) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let name = Self::archive_name(archive);
        match outcome {
            ArchiveOutcome::Normalized { zip_path, stats } => {
                let zip_name = Self::archive_name(zip_path);
                self.write_status(
                    style("✓").green().bold(),
                    "OK:",
                    &format!(
                        "Normalized: {name} → {zip_name} ({} files, {})",
                        stats.files_copied,
                        Self::format_size(stats.bytes_copied)
                    ),
                );
                if self.verbose {
                    let _ = self.term.write_line(&format!(
                        "  Directories: {}  Promos skipped: {}",
                        stats.directories_copied, stats.promos_skipped
                    ));
                }
            }
            ArchiveOutcome::Merged { stats } => {
                self.write_status(
                    style("✓").green().bold(),
                    "OK:",
                    &format!(
                        "Merged: {name} → Content ({} files, {})",
                        stats.files_copied,
                        Self::format_size(stats.bytes_copied)
                    ),
                );
                if self.verbose {
                    let _ = self.term.write_line(&format!(
                        "  Directories: {}  Promos skipped: {}",
                        stats.directories_copied, stats.promos_skipped
                    ));
                }
            }
            ArchiveOutcome::NoContentRoot => {
                self.write_status(
                    style("⚠").yellow().bold(),
                    "WARNING:",
                    &format!("No content root found in {name}, skipped"),
                );
            }
            ArchiveOutcome::Failed { message } => {
                self.write_status(
                    style("✗").red().bold(),
                    "FAILED:",
                    &format!("Failed: {name}: {message}"),
                );
            }
        }

        Ok(())
    }

    fn format_batch_summary(&self, report: &BatchReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let _ = self.term.write_line("");
        let _ = self
            .term
            .write_line(&format!("Processed {} archives", report.results.len()));
        let _ = self
            .term
            .write_line(&format!("  Normalized: {}", report.succeeded()));
        if report.skipped() > 0 {
            let _ = self.term.write_line(&format!(
                "  Skipped (no content root): {}",
                report.skipped()
            ));
        }
        if report.failed() > 0 {
            let _ = self
                .term
                .write_line(&format!("  Failed: {}", report.failed()));
        }

        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.term.write_line(&format!("ERROR: {error:?}"));
        }
    }
}
