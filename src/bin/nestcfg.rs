//! Command-line inspector for nestcfg files.
//!
//! Usage:
//!   nestcfg `<path>` [--format text|json] [--get a/b/c]

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use nestcfg::{Config, Entry, export};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Canonical config text
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "nestcfg")]
#[command(version, about = "Load a config file and print it back", long_about = None)]
struct Cli {
    /// Config file to load
    path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print only the entry at this slash-separated path
    #[arg(short, long)]
    get: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_file(&cli.path)?;

    let entry = match &cli.get {
        Some(path) => match config.find(path) {
            Some(entry) => entry,
            None => bail!("No entry at '{}' in {}", path, cli.path.display()),
        },
        None => Entry::Group(config.view()),
    };

    let output = match (entry, cli.format) {
        (Entry::Scalar(value), Format::Text) => format!("{}\n", value),
        (Entry::Scalar(value), Format::Json) => {
            format!("{}\n", serde_json::to_string(value).context("Failed to encode value")?)
        }
        (Entry::Group(view), Format::Text) => export::render(view),
        (Entry::Group(view), Format::Json) => {
            format!("{}\n", export::to_json(view).context("Failed to encode config")?)
        }
    };

    print!("{}", output);
    Ok(())
}
