//! Entry point for `observable-gen`.

use std::process::ExitCode;

use clap::Parser;
use observable_gen_cli::{Args, CliError, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode, CliError> {
    let args = Args::parse();
    setup_tracing(args.verbose);
    run(&args)
}

fn setup_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("observable_gen=debug,observable_gen_cli=debug")
        } else {
            EnvFilter::new("observable_gen=warn,observable_gen_cli=info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
