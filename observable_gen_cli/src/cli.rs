//! Command-line interface definitions for `observable-gen`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Parsed CLI arguments for `observable-gen`.
#[derive(Debug, Clone, Parser)]
#[command(name = "observable-gen")]
#[command(about = "Validate observable-property fields and derive generated property metadata")]
#[command(version)]
pub struct Args {
    /// Snapshot JSON describing the declared types and fields.
    #[arg(value_name = "snapshot")]
    pub snapshot: Utf8PathBuf,
    /// TOML file with generator options.
    #[arg(long, value_name = "path")]
    pub config: Option<Utf8PathBuf>,
    /// Write the generated units as one JSON array to this file instead of
    /// standard output.
    #[arg(long, value_name = "path")]
    pub out: Option<Utf8PathBuf>,
    /// Also emit one JSON file per generated unit into this directory,
    /// removing files for units that no longer exist.
    #[arg(long, value_name = "dir")]
    pub emit_dir: Option<Utf8PathBuf>,
    /// Run the pipeline this many times over the same snapshot.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub repeat: u32,
    /// Log stage statistics at debug level.
    #[arg(long, short)]
    pub verbose: bool,
}
