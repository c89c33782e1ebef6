//! CLI argument parsing using clap.

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "daznorm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory scanned (non-recursively) for .zip/.rar/.7z archives
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Directory where normalized output is written (created if absent)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Keep promo images and documentation instead of skipping them
    #[arg(long)]
    pub include_promos: bool,

    /// Retain per-archive scratch directories for inspection
    #[arg(long)]
    pub keep_temp: bool,

    /// Merge every archive's content into one shared Content/ directory
    /// instead of producing one normalized zip per archive
    #[arg(long)]
    pub merge_into_content: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output the batch summary in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_asserts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_positional_and_flags() {
        let cli = Cli::parse_from([
            "daznorm",
            "downloads",
            "library",
            "--merge-into-content",
            "--keep-temp",
        ]);
        assert_eq!(cli.input_dir, PathBuf::from("downloads"));
        assert_eq!(cli.output_dir, PathBuf::from("library"));
        assert!(cli.merge_into_content);
        assert!(cli.keep_temp);
        assert!(!cli.include_promos);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["daznorm", "in", "out", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }
}
