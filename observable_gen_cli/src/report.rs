//! Rendering of pipeline results for the terminal and output files.

use std::io::{self, Write};

use observable_gen::{Diagnostic, GeneratedUnit, PipelineOutput, Severity};

/// Writes one line per diagnostic in `location: severity ID: message` form.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn write_diagnostics<W: Write>(mut out: W, diagnostics: &[Diagnostic]) -> io::Result<()> {
    for diagnostic in diagnostics {
        writeln!(out, "{diagnostic}")?;
    }
    out.flush()
}

/// Writes the generated units as one pretty-printed JSON array and flushes
/// `out`.
///
/// # Errors
///
/// Returns an error when serialisation, the underlying write or the final
/// flush fails.
pub fn write_units<W: Write>(mut out: W, units: &[GeneratedUnit]) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut out, units)?;
    writeln!(out).map_err(serde_json::Error::io)?;
    out.flush().map_err(serde_json::Error::io)
}

/// One-line summary of a run.
#[must_use]
pub fn summary(output: &PipelineOutput) -> String {
    let count = |severity| {
        output
            .diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    };
    format!(
        "{} unit(s), {} error(s), {} warning(s)",
        output.units.len(),
        count(Severity::Error),
        count(Severity::Warning)
    )
}
