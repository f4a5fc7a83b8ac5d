//! Metadata for a generated property.

use serde::Serialize;

use crate::model::Annotation;

/// Everything an emitter needs to write one generated property.
///
/// Name lists keep annotation declaration order, which is visible in the
/// generated code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PropertyInfo {
    /// Field type, with a trailing `?` when nullable.
    pub type_name: String,
    /// Name of the backing field.
    pub field_name: String,
    /// Name of the generated property.
    pub property_name: String,
    /// Properties announced before the value changes.
    pub property_changing_names: Vec<String>,
    /// Properties announced after the value changes. Always starts with the
    /// property itself.
    pub property_changed_names: Vec<String>,
    /// Commands whose executable state is refreshed after a change.
    pub notified_command_names: Vec<String>,
    /// Broadcast changes to recipients.
    pub notify_recipients: bool,
    /// Validate the new value on assignment.
    pub notify_data_error_info: bool,
    /// Field annotations copied onto the generated property.
    pub forwarded_attributes: Vec<Annotation>,
}
