//! Dependent annotations used without the primary annotation.

use crate::config::KnownNames;
use crate::diagnostics::{Diagnostic, DiagnosticCode};
use crate::matcher::{has_annotation, has_any_annotation};
use crate::model::FieldDecl;

/// Whether `field` carries a notify annotation but not the primary one.
#[must_use]
pub fn is_orphaned(field: &FieldDecl, names: &KnownNames) -> bool {
    !has_annotation(&field.annotations, &names.observable_property)
        && has_any_annotation(&field.annotations, &names.dependent_annotations())
}

/// The diagnostic reported for an orphaned field.
#[must_use]
pub fn orphaned_diagnostic(field: &FieldDecl) -> Diagnostic {
    Diagnostic::for_field(
        DiagnosticCode::OrphanedDependentAttribute,
        field,
        std::iter::empty::<String>(),
    )
}
