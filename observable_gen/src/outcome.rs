//! Value-or-diagnostics results that flow through the pipeline.
//!
//! Unlike [`std::result::Result`], an [`Outcome`] may carry a value *and*
//! diagnostics at the same time: advisory findings ride along with metadata
//! that is still usable. A missing value is always explained by at least one
//! diagnostic.

use crate::diagnostics::Diagnostic;

/// A value plus the diagnostics produced while computing it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Outcome<T> {
    value: Option<T>,
    diagnostics: Vec<Diagnostic>,
}

impl<T> Outcome<T> {
    /// A clean success.
    pub const fn success(value: T) -> Self {
        Self {
            value: Some(value),
            diagnostics: Vec::new(),
        }
    }

    /// A success accompanied by advisory diagnostics.
    pub const fn with_diagnostics(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            value: Some(value),
            diagnostics,
        }
    }

    /// A failure explained by `reason`.
    pub fn failure(reason: Diagnostic) -> Self {
        Self {
            value: None,
            diagnostics: vec![reason],
        }
    }

    /// The value, if one was produced.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Diagnostics in the order they were raised.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether a value was produced.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.value.is_some()
    }

    /// Splits the outcome into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Vec<Diagnostic>) {
        (self.value, self.diagnostics)
    }

    /// Maps the value, keeping the diagnostics.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        Outcome {
            value: self.value.map(f),
            diagnostics: self.diagnostics,
        }
    }
}
