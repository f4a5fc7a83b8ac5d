//! Loading inputs, running the pipeline and delivering its results.

use std::io::{self, BufWriter};

use camino::Utf8Path;
use cap_std::fs_utf8::OpenOptions;
use observable_gen::model::Snapshot;
use observable_gen::{GeneratorOptions, ObservablePropertyPipeline, PipelineOutput};
use tracing::{debug, info};

use crate::cli::Args;
use crate::directory::{DirectoryEmitter, open_parent};
use crate::error::CliError;
use crate::report;

/// Reads and parses a snapshot file.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the file cannot be read and
/// [`CliError::Snapshot`] when it is not valid snapshot JSON.
pub fn read_snapshot(path: &Utf8Path) -> Result<Snapshot, CliError> {
    let (dir, file_name) = open_parent(path)?;
    let text = dir
        .read_to_string(file_name)
        .map_err(|source| CliError::io(path, source))?;
    serde_json::from_str(&text).map_err(|source| CliError::Snapshot {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs the pipeline `args.repeat` times and returns the last output.
///
/// Every pass after the first reuses the session's cache, so the stage
/// statistics logged per pass show how much work was skipped.
///
/// # Errors
///
/// Returns an error when configuration, snapshot loading, the pipeline or
/// the directory emitter fails.
pub fn execute(args: &Args) -> Result<PipelineOutput, CliError> {
    let options = GeneratorOptions::load(args.config.as_deref().map(Utf8Path::as_std_path))?;
    let snapshot = read_snapshot(&args.snapshot)?;
    let mut pipeline = ObservablePropertyPipeline::new(options);
    let mut emitter = args
        .emit_dir
        .as_deref()
        .map(DirectoryEmitter::create)
        .transpose()?;

    let mut output = run_pass(&mut pipeline, &snapshot, emitter.as_mut(), 1)?;
    for pass in 2..=args.repeat {
        output = run_pass(&mut pipeline, &snapshot, emitter.as_mut(), pass)?;
    }
    Ok(output)
}

fn run_pass(
    pipeline: &mut ObservablePropertyPipeline,
    snapshot: &Snapshot,
    emitter: Option<&mut DirectoryEmitter>,
    pass: u32,
) -> Result<PipelineOutput, CliError> {
    let output = match emitter {
        Some(target) => {
            let (produced, emitted) = pipeline.run_and_emit(snapshot, target)?;
            info!(
                pass,
                written = emitted.emitted.len(),
                unchanged = emitted.unchanged,
                retired = emitted.retired.len(),
                "unit files updated"
            );
            produced
        }
        None => pipeline.run(snapshot)?,
    };
    info!(
        pass,
        evaluated = output.stats.total_evaluated(),
        reused = output.stats.total_reused(),
        "{}",
        report::summary(&output)
    );
    for (stage, stats) in output.stats.iter() {
        debug!(pass, stage, evaluated = stats.evaluated, reused = stats.reused, "stage");
    }
    Ok(output)
}

/// Writes diagnostics to standard error and units to `args.out`, or to
/// standard output when no file is given.
///
/// # Errors
///
/// Returns an error when any of the writes fail.
pub fn deliver(args: &Args, output: &PipelineOutput) -> Result<(), CliError> {
    report::write_diagnostics(io::stderr().lock(), &output.diagnostics).map_err(|source| {
        CliError::Stream {
            stream: "stderr",
            source,
        }
    })?;
    match &args.out {
        Some(path) => {
            let (dir, file_name) = open_parent(path)?;
            let file = dir
                .open_with(
                    file_name,
                    OpenOptions::new().write(true).create(true).truncate(true),
                )
                .map_err(|source| CliError::io(path, source))?;
            report::write_units(BufWriter::new(file), &output.units)?;
        }
        None => report::write_units(io::stdout().lock(), &output.units)?,
    }
    Ok(())
}
