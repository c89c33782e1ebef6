//! Progress bar for the archive batch.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use std::path::Path;

/// Batch-level progress bar, one tick per archive.
///
/// Draws to stderr so per-archive status lines on stdout stay clean.
/// Automatically cleans up on drop.
pub struct BatchProgress {
    bar: ProgressBar,
}

impl BatchProgress {
    /// Creates a progress bar sized to the number of archives.
    #[must_use]
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);

        // Template: "Normalizing fantasy.zip [████░░░░] 2/5 archives"
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} archives")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        bar.set_message("Normalizing");

        Self { bar }
    }

    /// Checks if progress should be shown (TTY, not quiet, not JSON).
    #[must_use]
    pub fn should_show(quiet: bool, json: bool) -> bool {
        !quiet && !json && Term::stdout().is_term()
    }

    /// Shows the archive currently being processed.
    pub fn begin(&self, archive: &Path) {
        let name = archive
            .file_name()
            .map_or_else(|| archive.display().to_string(), |n| n.to_string_lossy().into_owned());
        self.bar.set_message(format!("Normalizing {name}"));
    }

    /// Marks one archive as finished.
    pub fn advance(&self) {
        self.bar.inc(1);
    }
}

impl Drop for BatchProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
