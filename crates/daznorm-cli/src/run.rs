//! Batch execution: drives the core pipeline archive by archive.

use crate::cli::Cli;
use crate::error::add_dir_context;
use crate::output::OutputFormatter;
use crate::progress::BatchProgress;
use anyhow::Context;
use anyhow::Result;
use daznorm_core::ArchiveOutcome;
use daznorm_core::BatchReport;
use daznorm_core::NormalizeOptions;
use daznorm_core::discover_archives;
use daznorm_core::process_archive;
use std::fs;

pub fn execute(args: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let options = NormalizeOptions {
        include_promos: args.include_promos,
        keep_temp: args.keep_temp,
        merge_into_content: args.merge_into_content,
    };

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "failed to create output directory '{}'",
            args.output_dir.display()
        )
    })?;

    let archives = add_dir_context(discover_archives(&args.input_dir), &args.input_dir)?;
    if archives.is_empty() {
        formatter.format_warning("no archives found in input directory");
        return Ok(());
    }

    let progress =
        BatchProgress::should_show(args.quiet, args.json).then(|| BatchProgress::new(archives.len()));

    let mut report = BatchReport::default();
    for archive in archives {
        if let Some(p) = &progress {
            p.begin(&archive);
        }

        // process_archive already confines per-archive failures to an
        // outcome; an Err here means the scratch dir could not be created
        let outcome = process_archive(&archive, &args.output_dir, &options)
            .unwrap_or_else(|e| ArchiveOutcome::Failed {
                message: e.to_string(),
            });

        if let Some(p) = &progress {
            p.advance();
        }
        formatter.format_archive_outcome(&archive, &outcome)?;
        report.push(archive, outcome);
    }
    drop(progress);

    formatter.format_batch_summary(&report)
}
