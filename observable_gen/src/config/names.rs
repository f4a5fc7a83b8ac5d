//! Fully qualified names the rule engine matches against.

use serde::{Deserialize, Serialize};

const COMPONENT_MODEL: &str = "CommunityToolkit.Mvvm.ComponentModel";
const DATA_ANNOTATIONS: &str = "System.ComponentModel.DataAnnotations";

fn component_model(name: &str) -> String {
    format!("{COMPONENT_MODEL}.{name}")
}

fn data_annotations(name: &str) -> String {
    format!("{DATA_ANNOTATIONS}.{name}")
}

/// Annotation classes and base types recognised by the rules.
///
/// Every entry is a fully qualified name compared for exact equality against
/// annotation names and type ids in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct KnownNames {
    /// The primary field annotation.
    pub observable_property: String,
    /// Base class providing change and pre-change notifications.
    pub observable_object: String,
    /// Base class providing validation support.
    pub observable_validator: String,
    /// Base class providing messenger broadcasts.
    pub observable_recipient: String,
    /// Class marker equivalent to deriving from the observable base.
    pub observable_object_attribute: String,
    /// Class marker providing change notifications only.
    pub notify_property_changed_attribute: String,
    /// Field annotation naming further properties to notify.
    pub notify_property_changed_for: String,
    /// Field annotation naming commands whose state should be refreshed.
    pub notify_can_execute_changed_for: String,
    /// Class or field annotation enabling recipient broadcasts.
    pub notify_property_changed_recipients: String,
    /// Class or field annotation enabling validation on assignment.
    pub notify_data_error_info: String,
    /// Base class of validation annotations.
    pub validation_attribute: String,
    /// Forwarded when the annotation class is, or derives from, one of these.
    pub forward_inherited: Vec<String>,
    /// Forwarded when the annotation class is exactly one of these.
    pub forward_exact: Vec<String>,
}

impl Default for KnownNames {
    fn default() -> Self {
        Self {
            observable_property: component_model("ObservablePropertyAttribute"),
            observable_object: component_model("ObservableObject"),
            observable_validator: component_model("ObservableValidator"),
            observable_recipient: component_model("ObservableRecipient"),
            observable_object_attribute: component_model("ObservableObjectAttribute"),
            notify_property_changed_attribute: component_model("INotifyPropertyChangedAttribute"),
            notify_property_changed_for: component_model("NotifyPropertyChangedForAttribute"),
            notify_can_execute_changed_for: component_model("NotifyCanExecuteChangedForAttribute"),
            notify_property_changed_recipients: component_model(
                "NotifyPropertyChangedRecipientsAttribute",
            ),
            notify_data_error_info: component_model("NotifyDataErrorInfoAttribute"),
            validation_attribute: data_annotations("ValidationAttribute"),
            forward_inherited: vec![
                data_annotations("UIHintAttribute"),
                data_annotations("ScaffoldColumnAttribute"),
            ],
            forward_exact: vec![
                data_annotations("DisplayAttribute"),
                data_annotations("EditableAttribute"),
                data_annotations("KeyAttribute"),
            ],
        }
    }
}

impl KnownNames {
    /// Annotations that are only meaningful next to the primary annotation.
    #[must_use]
    pub fn dependent_annotations(&self) -> [&str; 4] {
        [
            &self.notify_property_changed_for,
            &self.notify_can_execute_changed_for,
            &self.notify_property_changed_recipients,
            &self.notify_data_error_info,
        ]
    }
}

/// Generated shapes that would clash with notification infrastructure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservedNames {
    /// Property names that are rejected for the reserved types.
    pub property_names: Vec<String>,
    /// Field types that may not back a reserved property name. A field type
    /// matches when it is, or derives from, one of these.
    pub types: Vec<String>,
}

impl Default for ReservedNames {
    fn default() -> Self {
        Self {
            property_names: vec!["Property".to_owned()],
            types: vec![
                "System.Object".to_owned(),
                "System.ComponentModel.PropertyChangedEventArgs".to_owned(),
                "System.ComponentModel.PropertyChangingEventArgs".to_owned(),
            ],
        }
    }
}

impl ReservedNames {
    /// Whether `property_name` is reserved for some field types.
    #[must_use]
    pub fn is_reserved_name(&self, property_name: &str) -> bool {
        self.property_names.iter().any(|name| name == property_name)
    }
}
