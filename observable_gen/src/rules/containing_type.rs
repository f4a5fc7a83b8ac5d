//! Container eligibility.

use serde::Serialize;

use crate::config::KnownNames;
use crate::matcher::{Lineage, has_or_inherits_annotation, inherits_from};

/// Which notifications a container can raise for generated properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSupport {
    /// The container cannot host generated properties.
    Unsupported,
    /// Only post-change notifications are available.
    NotifyOnly,
    /// Both pre-change and post-change notifications are available.
    ChangingAndChanged,
}

impl TargetSupport {
    /// Classifies `container`.
    ///
    /// Deriving from the observable base or carrying its class marker gives
    /// full support. The notify-only marker gives change notifications alone.
    #[must_use]
    pub fn of(container: &Lineage, names: &KnownNames) -> Self {
        if inherits_from(container, &names.observable_object)
            || has_or_inherits_annotation(container, &names.observable_object_attribute)
        {
            Self::ChangingAndChanged
        } else if has_or_inherits_annotation(container, &names.notify_property_changed_attribute) {
            Self::NotifyOnly
        } else {
            Self::Unsupported
        }
    }

    /// Whether generated properties may be emitted at all.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    /// Whether generated properties also raise pre-change notifications.
    #[must_use]
    pub const fn raises_changing(self) -> bool {
        matches!(self, Self::ChangingAndChanged)
    }
}
