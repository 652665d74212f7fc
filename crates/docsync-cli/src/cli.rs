//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::{Parser, Subcommand};
use docsync_core::DEFAULT_CONCURRENCY;

/// docsync - Sync CMS content collections with a document database
#[derive(Parser, Debug)]
#[command(name = "docsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Sync configuration file (YAML, JSON or TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Service account key file
    #[arg(short = 'k', long, global = true)]
    pub authkey: Option<PathBuf>,

    /// Rewrite front-matter as `export const meta` when importing MDX
    #[arg(short, long, global = true)]
    pub meta: bool,

    /// Create missing directories and overwrite existing files
    #[arg(short = 'F', long = "Force", visible_alias = "force", global = true)]
    pub force: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Root directory of the document store
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Maximum number of concurrent store operations
    #[arg(long, global = true, default_value_t = DEFAULT_CONCURRENCY, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub concurrency: usize,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Download documents into local files
    ///
    /// Examples:
    ///   docsync import my-project -c config.yml -o site/
    ///   docsync import my-project -c config.yml -o site/ --meta -F
    Import {
        /// Project name
        project: Option<String>,

        /// Directory to write files into
        #[arg(short, long)]
        outdir: Option<PathBuf>,
    },

    /// Upload local files as documents
    ///
    /// Examples:
    ///   docsync export my-project -c config.yml -k key.json
    Export {
        /// Project name
        project: Option<String>,
    },
}

impl Commands {
    pub fn project(&self) -> Option<&str> {
        match self {
            Self::Import { project, .. } | Self::Export { project } => project.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["docsync"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.concurrency, DEFAULT_CONCURRENCY);
    }

    #[test]
    fn parse_import_full() {
        let cli = Cli::parse_from([
            "docsync", "import", "blog", "-c", "config.yml", "-o", "out", "-k", "key.json", "-m",
            "-F", "-v",
        ]);
        assert_eq!(
            cli.command,
            Some(Commands::Import {
                project: Some("blog".into()),
                outdir: Some(PathBuf::from("out")),
            })
        );
        assert_eq!(cli.config, Some(PathBuf::from("config.yml")));
        assert_eq!(cli.authkey, Some(PathBuf::from("key.json")));
        assert!(cli.meta && cli.force && cli.verbose);
    }

    #[test]
    fn parse_export_with_options_before_command() {
        let cli = Cli::parse_from(["docsync", "--config", "c.yml", "export", "blog"]);
        assert_eq!(cli.command.as_ref().and_then(Commands::project), Some("blog"));
        assert_eq!(cli.config, Some(PathBuf::from("c.yml")));
    }

    #[rstest]
    #[case("-F")]
    #[case("--Force")]
    #[case("--force")]
    fn parse_force_spellings(#[case] flag: &str) {
        let cli = Cli::parse_from(["docsync", "export", "blog", flag]);
        assert!(cli.force);
    }

    #[test]
    fn parse_missing_project_is_allowed() {
        let cli = Cli::parse_from(["docsync", "export"]);
        assert_eq!(cli.command, Some(Commands::Export { project: None }));
    }

    #[test]
    fn parse_concurrency() {
        let cli = Cli::parse_from(["docsync", "export", "blog", "--concurrency", "2"]);
        assert_eq!(cli.concurrency, 2);
        assert!(Cli::try_parse_from(["docsync", "export", "blog", "--concurrency", "0"]).is_err());
    }
}
