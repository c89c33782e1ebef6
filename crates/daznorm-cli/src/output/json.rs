//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use daznorm_core::ArchiveOutcome;
use daznorm_core::BatchReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct ArchiveResultOutput {
    archive: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    files_copied: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bytes_copied: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    promos_skipped: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ArchiveResultOutput {
    fn new(archive: &Path, outcome: &ArchiveOutcome) -> Self {
        let archive = archive.display().to_string();
        match outcome {
            ArchiveOutcome::Normalized { zip_path, stats } => Self {
                archive,
                status: "normalized",
                output: Some(zip_path.display().to_string()),
                files_copied: Some(stats.files_copied),
                bytes_copied: Some(stats.bytes_copied),
                promos_skipped: Some(stats.promos_skipped),
                message: None,
            },
            ArchiveOutcome::Merged { stats } => Self {
                archive,
                status: "merged",
                output: None,
                files_copied: Some(stats.files_copied),
                bytes_copied: Some(stats.bytes_copied),
                promos_skipped: Some(stats.promos_skipped),
                message: None,
            },
            ArchiveOutcome::NoContentRoot => Self {
                archive,
                status: "no_content_root",
                output: None,
                files_copied: None,
                bytes_copied: None,
                promos_skipped: None,
                message: None,
            },
            ArchiveOutcome::Failed { message } => Self {
                archive,
                status: "failed",
                output: None,
                files_copied: None,
                bytes_copied: None,
                promos_skipped: None,
                message: Some(message.clone()),
            },
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_archive_outcome(&self, _archive: &Path, _outcome: &ArchiveOutcome) -> Result<()> {
        // Per-archive lines are folded into the batch summary document
        Ok(())
    }

    fn format_batch_summary(&self, report: &BatchReport) -> Result<()> {
        #[derive(Serialize)]
        struct SummaryOutput {
            archives_processed: usize,
            succeeded: usize,
            skipped: usize,
            failed: usize,
            results: Vec<ArchiveResultOutput>,
        }

        let data = SummaryOutput {
            archives_processed: report.results.len(),
            succeeded: report.succeeded(),
            skipped: report.skipped(),
            failed: report.failed(),
            results: report
                .results
                .iter()
                .map(|r| ArchiveResultOutput::new(&r.archive, &r.outcome))
                .collect(),
        };

        let output = JsonOutput::success("normalize", data);
        Self::output(&output)
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("normalize", format!("{error:?}"));
        let _ = Self::output(&output);
    }
}
