//! Annotation and inheritance lookups over resolved type lineages.
//!
//! A [`Lineage`] is the base-type chain of a type flattened into data: the
//! type itself followed by each declared base, nearest first. The walk is
//! iterative and stops at the first repeated id, so malformed host graphs
//! with inheritance cycles terminate.

use std::collections::HashSet;

use crate::model::{Annotation, TypeGraph};

/// One link of a base-type chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ancestor {
    /// Fully qualified type name.
    pub id: String,
    /// Annotations declared on that type. Empty when the type is referenced
    /// but not declared in the snapshot.
    pub annotations: Vec<Annotation>,
}

/// A type followed by its bases, nearest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Lineage(Vec<Ancestor>);

impl Lineage {
    /// Walks the base chain of `id` through `graph`.
    ///
    /// Ids missing from the graph still appear in the lineage (so name-based
    /// inheritance checks work for external bases) but end the walk, since
    /// their own base is unknown.
    #[must_use]
    pub fn resolve(graph: &TypeGraph, id: &str) -> Self {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut next = Some(id.to_owned());
        while let Some(current) = next.take() {
            if !seen.insert(current.clone()) {
                tracing::warn!(ty = %id, repeated = %current, "inheritance cycle in type graph");
                break;
            }
            match graph.get(&current) {
                Some(decl) => {
                    next.clone_from(&decl.base);
                    chain.push(Ancestor {
                        id: current,
                        annotations: decl.annotations.clone(),
                    });
                }
                None => chain.push(Ancestor {
                    id: current,
                    annotations: Vec::new(),
                }),
            }
        }
        Self(chain)
    }

    /// The type the lineage was resolved for.
    #[must_use]
    pub fn this(&self) -> Option<&Ancestor> {
        self.0.first()
    }

    /// Id of the type the lineage was resolved for.
    #[must_use]
    pub fn id(&self) -> &str {
        self.this().map_or("", |ancestor| ancestor.id.as_str())
    }

    /// Declared bases, nearest first, excluding the type itself.
    pub fn bases(&self) -> impl Iterator<Item = &Ancestor> {
        self.0.iter().skip(1)
    }

    /// The type followed by its bases.
    pub fn iter(&self) -> impl Iterator<Item = &Ancestor> {
        self.0.iter()
    }
}

impl FromIterator<Ancestor> for Lineage {
    fn from_iter<I: IntoIterator<Item = Ancestor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Whether `annotations` contains one named exactly `name`.
#[must_use]
pub fn has_annotation(annotations: &[Annotation], name: &str) -> bool {
    annotations.iter().any(|annotation| annotation.is(name))
}

/// Whether `annotations` contains one with any of `names`.
#[must_use]
pub fn has_any_annotation<S: AsRef<str>>(annotations: &[Annotation], names: &[S]) -> bool {
    names
        .iter()
        .any(|name| has_annotation(annotations, name.as_ref()))
}

/// Whether the type or any of its bases carries the annotation `name`.
#[must_use]
pub fn has_or_inherits_annotation(lineage: &Lineage, name: &str) -> bool {
    lineage
        .iter()
        .any(|ancestor| has_annotation(&ancestor.annotations, name))
}

/// First annotation named `name` on the type or its bases, nearest first.
#[must_use]
pub fn find_inherited_annotation<'a>(lineage: &'a Lineage, name: &str) -> Option<&'a Annotation> {
    lineage
        .iter()
        .find_map(|ancestor| ancestor.annotations.iter().find(|a| a.is(name)))
}

/// Whether any base of the type (not the type itself) is named `name`.
#[must_use]
pub fn inherits_from(lineage: &Lineage, name: &str) -> bool {
    lineage.bases().any(|ancestor| ancestor.id == name)
}

/// Whether the type is named `name` or inherits from it.
#[must_use]
pub fn has_or_inherits_from(lineage: &Lineage, name: &str) -> bool {
    lineage.iter().any(|ancestor| ancestor.id == name)
}
