//! Tri-state notification settings declared on classes and fields.

use serde::Serialize;

use crate::matcher::{Lineage, find_inherited_annotation};
use crate::model::Annotation;

/// Where a resolved setting came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingSource {
    /// Nothing declared it.
    #[default]
    Default,
    /// The container or one of its bases declared it.
    Class,
    /// The field declared it.
    Field,
}

/// A resolved on/off setting.
///
/// A declaration only turns the setting on when the container has the
/// matching capability, e.g. recipient broadcasts need the recipient base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct NotificationSetting {
    /// Effective value.
    pub enabled: bool,
    /// Declaration that produced the value.
    pub source: SettingSource,
}

impl NotificationSetting {
    /// Resolves the class-level value of `annotation` for `container`.
    ///
    /// The container is checked first, then each base nearest first; the
    /// first declaration found wins.
    #[must_use]
    pub fn from_class(container: &Lineage, annotation: &str, capable: bool) -> Self {
        find_inherited_annotation(container, annotation).map_or_else(Self::default, |found| {
            Self {
                enabled: declared_value(found) && capable,
                source: SettingSource::Class,
            }
        })
    }

    /// Replaces the class-level value with a field-level declaration.
    pub fn override_with(&mut self, annotation: &Annotation, capable: bool) {
        if self.source == SettingSource::Class {
            tracing::trace!(annotation = %annotation.name, "field setting overrides class setting");
        }
        *self = Self {
            enabled: declared_value(annotation) && capable,
            source: SettingSource::Field,
        };
    }
}

// A bare annotation means "on".
fn declared_value(annotation: &Annotation) -> bool {
    annotation.leading_bool().unwrap_or(true)
}
