//! Import command implementation

use std::path::{Path, PathBuf};

use colored::Colorize;
use docsync_core::SyncReport;
use docsync_fs::NormalizedPath;

use super::{print_report, print_summary};
use crate::cli::Cli;
use crate::context::RunContext;
use crate::error::{CliError, Result};

/// Run the import command
///
/// Downloads every configured collection from the project's store into
/// `outdir`.
pub async fn run_import(
    cli: &Cli,
    project: Option<&str>,
    outdir: Option<&PathBuf>,
    cwd: &Path,
) -> Result<SyncReport> {
    let outdir = outdir.ok_or_else(|| CliError::user("Missing --outdir option"))?;
    let ctx = RunContext::build(cli, project, cwd)?;
    let outdir = NormalizedPath::new(cwd.join(outdir));

    println!(
        "{} Importing {} collection(s) from {} into {}",
        "=>".blue().bold(),
        ctx.engine.config().collections.len(),
        ctx.project.cyan(),
        outdir.to_string().cyan()
    );

    let report = ctx.engine.import(&outdir).await?;

    print_report(&report, cli.verbose);
    print_summary(
        "Import finished",
        &report,
        &[
            (report.written(), "written"),
            (report.overwritten(), "overwritten"),
            (report.skipped(), "skipped"),
        ],
    );
    Ok(report)
}
