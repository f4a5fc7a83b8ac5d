//! Command-line host for the `observable_gen` pipeline.
//!
//! The binary reads a JSON snapshot of declared types and fields, runs the
//! observable property pipeline over it and prints diagnostics to standard
//! error. Generated units are written as JSON to standard output, to a file
//! or, one file per unit, to a directory that is kept in sync across passes.

pub mod cli;
pub mod directory;
pub mod error;
pub mod report;
pub mod session;

use std::process::ExitCode;

pub use cli::Args;
pub use directory::{DirectoryEmitter, UnitFileError};
pub use error::CliError;

/// Runs the tool for parsed arguments.
///
/// Returns [`ExitCode::FAILURE`] when any error-severity diagnostic was
/// reported.
///
/// # Errors
///
/// Returns an error when inputs cannot be loaded, the pipeline fails or
/// results cannot be written.
pub fn run(args: &Args) -> Result<ExitCode, CliError> {
    let output = session::execute(args)?;
    session::deliver(args, &output)?;
    Ok(if output.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
