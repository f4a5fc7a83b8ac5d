//! Static catalogue of diagnostic codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How seriously the host should treat a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational only.
    Info,
    /// Generation proceeded but the input is suspicious.
    Warning,
    /// The input is invalid.
    Error,
}

impl Severity {
    /// Lowercase label used in rendered output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable diagnostic codes reported by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiagnosticCode {
    /// The field's container cannot raise change notifications.
    InvalidContainingType,
    /// The generated property would have the same name as the field.
    NameCollision,
    /// The generated property would clash with notification infrastructure.
    InvalidGeneratedProperty,
    /// Dependent annotations used without the primary annotation.
    OrphanedDependentAttribute,
    /// Validation annotations on a container without the validator base.
    MissingValidatorBase,
    /// Validation notifications requested without validation annotations.
    MissingValidationAttributes,
    /// The build's feature level is below the supported minimum.
    UnsupportedFeatureLevel,
}

/// Everything known about a code ahead of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticDescriptor {
    /// Stable identifier suitable for suppression lists.
    pub id: &'static str,
    /// One-line title.
    pub title: &'static str,
    /// Message template with `{0}`, `{1}`, ... placeholders.
    pub message_format: &'static str,
    /// Default severity.
    pub severity: Severity,
}

const INVALID_CONTAINING_TYPE: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "OBSGEN0001",
    title: "Invalid containing type for an observable property field",
    message_format: "The field {0}.{1} cannot be used to generate an observable property, as its containing type does not inherit from ObservableObject and is not annotated with [ObservableObject] or [INotifyPropertyChanged]",
    severity: Severity::Error,
};

const NAME_COLLISION: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "OBSGEN0002",
    title: "Name collision for generated property",
    message_format: "The field {0}.{1} cannot be used to generate an observable property, as its name would collide with the field name (instance fields should use the \"lowerCamel\", \"_lowerCamel\" pattern)",
    severity: Severity::Error,
};

const INVALID_GENERATED_PROPERTY: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "OBSGEN0003",
    title: "Invalid generated property declaration",
    message_format: "The field {0}.{1} cannot be used to generate an observable property, as its name or type would cause conflicts with other generated members",
    severity: Severity::Error,
};

const ORPHANED_DEPENDENT_ATTRIBUTE: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "OBSGEN0004",
    title: "Invalid use of attributes dependent on [ObservableProperty]",
    message_format: "The field {0}.{1} needs to be annotated with [ObservableProperty] in order to enable using [NotifyPropertyChangedFor], [NotifyCanExecuteChangedFor], [NotifyPropertyChangedRecipients] and [NotifyDataErrorInfo]",
    severity: Severity::Error,
};

const MISSING_VALIDATOR_BASE: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "OBSGEN0005",
    title: "Missing ObservableValidator inheritance",
    message_format: "The field {0}.{1} cannot be used to generate an observable property, as it has {2} validation attribute(s) but is declared in a type that doesn't inherit from ObservableValidator",
    severity: Severity::Error,
};

const MISSING_VALIDATION_ATTRIBUTES: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "OBSGEN0006",
    title: "Missing validation attributes",
    message_format: "The observable property {0}.{1} cannot be validated, as it enables [NotifyDataErrorInfo] but has no validation attributes",
    severity: Severity::Warning,
};

const UNSUPPORTED_FEATURE_LEVEL: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "OBSGEN0007",
    title: "Unsupported language feature level",
    message_format: "Observable property generation requires the consuming project to use language feature level {0} or above, but it uses {1}",
    severity: Severity::Error,
};

impl DiagnosticCode {
    /// Every code, in id order.
    pub const ALL: [Self; 7] = [
        Self::InvalidContainingType,
        Self::NameCollision,
        Self::InvalidGeneratedProperty,
        Self::OrphanedDependentAttribute,
        Self::MissingValidatorBase,
        Self::MissingValidationAttributes,
        Self::UnsupportedFeatureLevel,
    ];

    /// The static descriptor for this code.
    #[must_use]
    pub const fn descriptor(self) -> &'static DiagnosticDescriptor {
        match self {
            Self::InvalidContainingType => &INVALID_CONTAINING_TYPE,
            Self::NameCollision => &NAME_COLLISION,
            Self::InvalidGeneratedProperty => &INVALID_GENERATED_PROPERTY,
            Self::OrphanedDependentAttribute => &ORPHANED_DEPENDENT_ATTRIBUTE,
            Self::MissingValidatorBase => &MISSING_VALIDATOR_BASE,
            Self::MissingValidationAttributes => &MISSING_VALIDATION_ATTRIBUTES,
            Self::UnsupportedFeatureLevel => &UNSUPPORTED_FEATURE_LEVEL,
        }
    }

    /// Stable identifier, e.g. `OBSGEN0002`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        self.descriptor().id
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Substitutes `{n}` placeholders in `template` with `args[n]`.
///
/// Placeholders without a matching argument are kept verbatim.
pub(crate) fn render(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let (before, tail) = rest.split_at(open);
        out.push_str(before);
        let placeholder = tail
            .find('}')
            .map(|close| tail.split_at(close + 1))
            .and_then(|(token, after)| {
                let index = token.trim_start_matches('{').trim_end_matches('}');
                let arg = index.parse::<usize>().ok().and_then(|i| args.get(i))?;
                Some((arg, after))
            });
        match placeholder {
            Some((arg, after)) => {
                out.push_str(arg);
                rest = after;
            }
            None => {
                out.push('{');
                rest = tail.get(1..).unwrap_or_default();
            }
        }
    }
    out.push_str(rest);
    out
}
