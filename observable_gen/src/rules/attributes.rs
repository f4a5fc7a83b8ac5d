//! Single pass over a candidate's own annotations.

use crate::config::KnownNames;
use crate::matcher::{Lineage, has_or_inherits_from, inherits_from};
use crate::model::Annotation;

use super::settings::NotificationSetting;

/// State accumulated while walking the field annotations in order.
#[derive(Debug)]
pub(super) struct AnnotationScan {
    pub property_changed_names: Vec<String>,
    pub notified_command_names: Vec<String>,
    pub recipients: NotificationSetting,
    pub validation: NotificationSetting,
    pub forwarded_attributes: Vec<Annotation>,
    pub has_validation: bool,
    recipient_capable: bool,
    validator_capable: bool,
}

impl AnnotationScan {
    pub(super) fn new(property_name: &str, container: &Lineage, names: &KnownNames) -> Self {
        let recipient_capable = inherits_from(container, &names.observable_recipient);
        let validator_capable = inherits_from(container, &names.observable_validator);
        Self {
            property_changed_names: vec![property_name.to_owned()],
            notified_command_names: Vec::new(),
            recipients: NotificationSetting::from_class(
                container,
                &names.notify_property_changed_recipients,
                recipient_capable,
            ),
            validation: NotificationSetting::from_class(
                container,
                &names.notify_data_error_info,
                validator_capable,
            ),
            forwarded_attributes: Vec::new(),
            has_validation: false,
            recipient_capable,
            validator_capable,
        }
    }

    /// Applies one field annotation. `class` is the lineage of the
    /// annotation's own class.
    pub(super) fn visit(&mut self, annotation: &Annotation, class: &Lineage, names: &KnownNames) {
        if annotation.is(&names.notify_property_changed_for) {
            push_names(&mut self.property_changed_names, annotation);
        } else if annotation.is(&names.notify_can_execute_changed_for) {
            push_names(&mut self.notified_command_names, annotation);
        } else if annotation.is(&names.notify_property_changed_recipients) {
            self.recipients.override_with(annotation, self.recipient_capable);
        } else if annotation.is(&names.notify_data_error_info) {
            self.validation.override_with(annotation, self.validator_capable);
        } else if inherits_from(class, &names.validation_attribute) {
            self.has_validation = true;
            self.forwarded_attributes.push(annotation.clone());
        } else if is_forwardable(annotation, class, names) {
            self.forwarded_attributes.push(annotation.clone());
        }
    }
}

fn is_forwardable(annotation: &Annotation, class: &Lineage, names: &KnownNames) -> bool {
    names
        .forward_inherited
        .iter()
        .any(|name| has_or_inherits_from(class, name))
        || names.forward_exact.iter().any(|name| annotation.is(name))
}

// Empty and repeated names add nothing to the generated notifications.
fn push_names(target: &mut Vec<String>, annotation: &Annotation) {
    for name in annotation.string_args().into_iter().flatten() {
        if name.is_empty() || target.iter().any(|existing| existing == name) {
            continue;
        }
        target.push(name.to_owned());
    }
}
