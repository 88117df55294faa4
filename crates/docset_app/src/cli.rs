use std::path::PathBuf;

use clap::{Parser, Subcommand};
use docset_engine::SiteRevision;

#[derive(Parser, Debug)]
#[command(name = "docset")]
#[command(about = "Inspect how the Laravel Zero docset indexes and rewrites a stored page")]
#[command(version)]
pub struct Cli {
    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory stored page paths are resolved against
    #[arg(long, global = true, value_name = "DIR", default_value = "storage")]
    pub storage: PathBuf,

    /// RON file overriding the docset configuration
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Force a markup revision instead of detecting it (legacy, current)
    #[arg(long, global = true)]
    pub revision: Option<SiteRevision>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the search-index entries of a stored page, one JSON object per line
    Entries { file: String },

    /// Print the rewritten HTML of a stored page
    Format { file: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "docset",
            "entries",
            "laravel-zero/page.html",
            "--revision",
            "current",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.revision, Some(SiteRevision::Current));
        assert_eq!(cli.storage, PathBuf::from("storage"));
        assert!(matches!(cli.command, Commands::Entries { ref file } if file == "laravel-zero/page.html"));
    }

    #[test]
    fn rejects_unknown_revision() {
        let result = Cli::try_parse_from(["docset", "format", "a.html", "--revision", "v9"]);
        assert!(result.is_err());
    }
}
