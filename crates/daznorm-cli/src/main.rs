//! Daznorm CLI - normalizes asset archives into a consistent layout.

mod cli;
mod error;
mod output;
mod progress;
mod run;

use anyhow::Result;
use clap::CommandFactory;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(
            shell,
            &mut cli::Cli::command(),
            "daznorm",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_logger(cli.verbose);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);
    run::execute(&cli, &*formatter)
}

/// Routes core-side diagnostics through env_logger; `--verbose` lowers the
/// default filter so per-pass and per-root details show up.
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
