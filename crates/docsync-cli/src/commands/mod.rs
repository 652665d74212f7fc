//! Command implementations for docsync CLI
//!
//! Each command builds a [`RunContext`](crate::context::RunContext), runs
//! the engine and prints one line per item.

pub mod export;
pub mod import;

use colored::Colorize;
use docsync_core::{ItemOutcome, ItemStatus, SyncReport};

pub use export::run_export;
pub use import::run_import;

/// Print the outcome lines of a run followed by a summary.
///
/// Successful items are only listed when `verbose` is set.
pub fn print_report(report: &SyncReport, verbose: bool) {
    for outcome in &report.outcomes {
        print_outcome(outcome, verbose);
    }
}

fn print_outcome(outcome: &ItemOutcome, verbose: bool) {
    let target = format!("{}/{}", outcome.collection, outcome.path);
    match &outcome.status {
        ItemStatus::Skipped(reason) => {
            println!("{} {} {}", "⚠".yellow().bold(), target.cyan(), reason.yellow());
        }
        ItemStatus::Failed(error) => {
            println!("{} {} {}", "✗".red().bold(), target.cyan(), error.red());
        }
        status if verbose => {
            let id = outcome.id.as_deref().unwrap_or_default();
            println!(
                "{} {} {} {}",
                "✔".green().bold(),
                target.cyan(),
                status.to_string().green(),
                id.dimmed()
            );
        }
        _ => {}
    }
}

/// One-line summary; `parts` are `(count, label)` pairs.
fn print_summary(title: &str, report: &SyncReport, parts: &[(usize, &str)]) {
    let counts = parts
        .iter()
        .map(|(count, label)| format!("{count} {label}"))
        .collect::<Vec<_>>()
        .join(", ");

    if report.success() {
        println!("{} {title}: {counts}", "✔".green().bold());
    } else {
        println!(
            "{} {title}: {counts}, {} failed",
            "✗".red().bold(),
            report.failed()
        );
    }
}
