//! Export command implementation

use std::path::Path;

use colored::Colorize;
use docsync_core::SyncReport;

use super::{print_report, print_summary};
use crate::cli::Cli;
use crate::context::RunContext;
use crate::error::Result;

/// Run the export command
///
/// Uploads every configured collection to the project's store.
pub async fn run_export(cli: &Cli, project: Option<&str>, cwd: &Path) -> Result<SyncReport> {
    let ctx = RunContext::build(cli, project, cwd)?;
    println!(
        "{} Exporting {} collection(s) to {}",
        "=>".blue().bold(),
        ctx.engine.config().collections.len(),
        ctx.project.cyan()
    );

    let report = ctx.engine.export().await?;

    print_report(&report, cli.verbose);
    print_summary(
        "Export finished",
        &report,
        &[(report.created(), "created"), (report.updated(), "updated")],
    );
    Ok(report)
}
