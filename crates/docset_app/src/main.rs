mod cli;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use docset_core::Entry;
use docset_engine::{Docset, DocsetConfig, FsStorage, LaravelZero};
use docset_logging::{docset_error, docset_info, LogDestination};
use log::LevelFilter;

use crate::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    docset_logging::initialize(level_for(cli.verbose), LogDestination::Terminal);

    if let Err(err) = run(cli) {
        docset_error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => DocsetConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DocsetConfig::default(),
    };
    if cli.revision.is_some() {
        config.revision = cli.revision;
    }
    docset_info!(
        "{} docset, storage at {}",
        config.name,
        cli.storage.display()
    );

    let docset = LaravelZero::with_config(config, FsStorage::new(&cli.storage));
    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Entries { file } => {
            let entries = docset.entries(&file)?;
            stdout.write_all(render_entries(&entries)?.as_bytes())?;
        }
        Commands::Format { file } => {
            let html = docset.format(&file)?;
            stdout.write_all(html.as_bytes())?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn render_entries(entries: &[Entry]) -> serde_json::Result<String> {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&serde_json::to_string(entry)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn entries_render_as_json_lines() {
        let entries = vec![
            Entry::guide("Logging", "laravel-zero.com/docs/logging.html"),
            Entry::section("Usage", "laravel-zero.com/docs/logging.html#usage"),
        ];
        assert_eq!(
            render_entries(&entries).unwrap(),
            concat!(
                r#"{"name":"Logging","type":"Guide","path":"laravel-zero.com/docs/logging.html"}"#,
                "\n",
                r#"{"name":"Usage","type":"Section","path":"laravel-zero.com/docs/logging.html#usage"}"#,
                "\n",
            )
        );
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), LevelFilter::Info);
        assert_eq!(level_for(1), LevelFilter::Debug);
        assert_eq!(level_for(5), LevelFilter::Trace);
    }
}
