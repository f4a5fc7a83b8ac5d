//! Diagnostics reported by the generator and the collector that orders them.

mod collector;
mod descriptor;
mod diagnostic;

pub use collector::DiagnosticCollector;
pub use descriptor::{DiagnosticCode, DiagnosticDescriptor, Severity};
pub use diagnostic::Diagnostic;
