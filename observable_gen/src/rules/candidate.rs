//! Candidates: a field bundled with everything the rules look up.

use crate::error::GeneratorError;
use crate::hierarchy::HierarchyInfo;
use crate::matcher::Lineage;
use crate::model::{FieldDecl, TypeGraph};

/// A field under consideration, together with the lineages of every type the
/// rules inspect.
///
/// Resolving once up front turns the rule engine into a pure function of this
/// value, so two candidates compare equal exactly when evaluating them would
/// give the same result. The incremental graph keys its caches on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// The field itself.
    pub field: FieldDecl,
    /// Nesting chain of the container.
    pub hierarchy: HierarchyInfo,
    /// The container followed by its bases.
    pub container: Lineage,
    /// The field type followed by its bases.
    pub field_type: Lineage,
    /// One lineage per field annotation class, in annotation order.
    pub annotation_types: Vec<Lineage>,
}

impl Candidate {
    /// Resolves `field` against `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::MissingContainer`] when the field's container
    /// is not declared in `graph`.
    pub fn resolve(graph: &TypeGraph, field: &FieldDecl) -> Result<Self, GeneratorError> {
        let hierarchy = HierarchyInfo::from_container(graph, &field.container, &field.name)?;
        let annotation_types = field
            .annotations
            .iter()
            .map(|annotation| Lineage::resolve(graph, &annotation.name))
            .collect();
        Ok(Self {
            field: field.clone(),
            hierarchy,
            container: Lineage::resolve(graph, &field.container),
            field_type: Lineage::resolve(graph, &field.ty.name),
            annotation_types,
        })
    }
}
