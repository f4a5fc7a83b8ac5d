//! The validation rule engine.
//!
//! [`evaluate`] turns a resolved [`Candidate`] into either property metadata
//! or the diagnostic explaining why none can be generated. Checks run in a
//! fixed order and the first failure wins:
//!
//! 1. the container must be able to raise change notifications;
//! 2. the derived property name must differ from the field name;
//! 3. the derived name and field type must not clash with notification
//!    infrastructure.
//!
//! Only then is metadata assembled. Validation mismatches found during
//! assembly are reported alongside the metadata rather than replacing it.

mod attributes;
mod candidate;
mod containing_type;
mod property;
mod settings;

use std::iter;

pub use candidate::Candidate;
pub use containing_type::TargetSupport;
pub use property::PropertyInfo;
pub use settings::{NotificationSetting, SettingSource};

use self::attributes::AnnotationScan;
use crate::config::GeneratorOptions;
use crate::diagnostics::{Diagnostic, DiagnosticCode};
use crate::matcher::{Lineage, has_or_inherits_from, inherits_from};
use crate::naming::derive_property_name;
use crate::outcome::Outcome;

/// Evaluates one candidate.
///
/// Pure: the result depends only on `candidate` and `options`.
#[must_use]
pub fn evaluate(candidate: &Candidate, options: &GeneratorOptions) -> Outcome<PropertyInfo> {
    let names = &options.names;
    let field = &candidate.field;

    let support = TargetSupport::of(&candidate.container, names);
    if !support.is_supported() {
        return reject(DiagnosticCode::InvalidContainingType, candidate);
    }

    let property_name = derive_property_name(&field.name);
    if property_name == field.name {
        return reject(DiagnosticCode::NameCollision, candidate);
    }

    if options.reserved.is_reserved_name(&property_name)
        && options
            .reserved
            .types
            .iter()
            .any(|ty| has_or_inherits_from(&candidate.field_type, ty))
    {
        return reject(DiagnosticCode::InvalidGeneratedProperty, candidate);
    }

    let mut scan = AnnotationScan::new(&property_name, &candidate.container, names);
    let unresolved = Lineage::default();
    for (index, annotation) in field.annotations.iter().enumerate() {
        let class = candidate.annotation_types.get(index).unwrap_or(&unresolved);
        scan.visit(annotation, class, names);
    }

    let mut diagnostics = Vec::new();
    if scan.has_validation && !inherits_from(&candidate.container, &names.observable_validator) {
        diagnostics.push(Diagnostic::for_field(
            DiagnosticCode::MissingValidatorBase,
            field,
            [scan.forwarded_attributes.len().to_string()],
        ));
    }
    if scan.validation.enabled && !scan.has_validation {
        diagnostics.push(Diagnostic::for_field(
            DiagnosticCode::MissingValidationAttributes,
            field,
            iter::empty::<String>(),
        ));
    }

    let property_changing_names = if support.raises_changing() {
        vec![property_name.clone()]
    } else {
        Vec::new()
    };

    Outcome::with_diagnostics(
        PropertyInfo {
            type_name: field.ty.name_with_nullability(),
            field_name: field.name.clone(),
            property_name,
            property_changing_names,
            property_changed_names: scan.property_changed_names,
            notified_command_names: scan.notified_command_names,
            notify_recipients: scan.recipients.enabled,
            notify_data_error_info: scan.validation.enabled,
            forwarded_attributes: scan.forwarded_attributes,
        },
        diagnostics,
    )
}

fn reject(code: DiagnosticCode, candidate: &Candidate) -> Outcome<PropertyInfo> {
    tracing::trace!(field = %candidate.field.name, code = %code, "candidate rejected");
    Outcome::failure(Diagnostic::for_field(
        code,
        &candidate.field,
        iter::empty::<String>(),
    ))
}

#[cfg(test)]
mod tests;
