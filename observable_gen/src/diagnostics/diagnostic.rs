//! Individual diagnostics.

use std::fmt;

use super::descriptor::{DiagnosticCode, Severity, render};
use crate::model::{FieldDecl, SourceLocation};

/// A coded report about one validation outcome.
///
/// Diagnostics are immutable once built; collectors only ever append them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    code: DiagnosticCode,
    args: Vec<String>,
    location: Option<SourceLocation>,
}

impl Diagnostic {
    /// Creates a diagnostic with the message arguments bound.
    #[must_use]
    pub fn new<I, S>(code: DiagnosticCode, location: Option<SourceLocation>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            code,
            args: args.into_iter().map(Into::into).collect(),
            location,
        }
    }

    /// Creates a diagnostic located at `field`, with the container id and
    /// field name as the first two arguments followed by `extra`.
    #[must_use]
    pub fn for_field<I, S>(code: DiagnosticCode, field: &FieldDecl, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args = [field.container.clone(), field.name.clone()]
            .into_iter()
            .chain(extra.into_iter().map(Into::into));
        Self::new(code, Some(field.location.clone()), args)
    }

    /// The diagnostic code.
    #[must_use]
    pub const fn code(&self) -> DiagnosticCode {
        self.code
    }

    /// Stable identifier, e.g. `OBSGEN0001`.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.code.id()
    }

    /// Severity taken from the code's descriptor.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.code.descriptor().severity
    }

    /// Bound message arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Source location, absent for build-wide diagnostics.
    #[must_use]
    pub const fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    /// Message with arguments substituted into the template.
    #[must_use]
    pub fn message(&self) -> String {
        render(self.code.descriptor().message_format, &self.args)
    }

    /// Whether the diagnostic has error severity.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location}: ")?;
        }
        write!(f, "{} {}: {}", self.severity(), self.id(), self.message())
    }
}
