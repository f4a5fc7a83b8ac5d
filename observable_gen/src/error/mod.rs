//! Error types for host-contract violations and session setup failures.
//!
//! Expected validation outcomes never surface here; they travel as
//! [`Diagnostic`](crate::Diagnostic) values inside an
//! [`Outcome`](crate::Outcome).

mod aggregate;
mod constructors;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::GeneratorError;
