//! docsync CLI
//!
//! Imports and exports CMS content collections to and from a document store.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::{CliError, Result};

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    logging::init(cli.verbose);
    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Execute the parsed command; `Ok(false)` when any item failed.
async fn run(cli: Cli) -> Result<bool> {
    if cli.verbose {
        println!("{}", format!("{cli:#?}").dimmed());
    }

    let Some(command) = &cli.command else {
        return Err(CliError::user(
            "Missing command; run `docsync --help` for usage",
        ));
    };

    let cwd = std::env::current_dir()?;
    let project = command.project();
    let report = match command {
        Commands::Export { .. } => commands::run_export(&cli, project, &cwd).await?,
        Commands::Import { outdir, .. } => {
            commands::run_import(&cli, project, outdir.as_ref(), &cwd).await?
        }
    };

    Ok(report.success())
}
