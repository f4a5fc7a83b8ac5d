//! Nesting chain descriptions used to regenerate partial declarations.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::GeneratorError;
use crate::model::{TypeGraph, TypeKind};

/// One type of a nesting chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeInfo {
    /// Simple name of the type.
    pub name: String,
    /// Declaration kind, which decides the keyword of the partial declaration.
    pub kind: TypeKind,
    /// Generic arity.
    pub arity: u32,
}

impl TypeInfo {
    /// Whether the type is a record.
    #[must_use]
    pub fn is_record(&self) -> bool {
        self.kind == TypeKind::Record
    }

    fn metadata_name(&self) -> String {
        if self.arity == 0 {
            self.name.clone()
        } else {
            format!("{}`{}", self.name, self.arity)
        }
    }
}

/// Where a container type sits: its namespace and enclosing types.
///
/// Built from the same container it always compares equal, which the
/// incremental graph relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HierarchyInfo {
    /// Namespace of the outermost type, if any.
    pub namespace: Option<String>,
    /// Outermost enclosing type first, the container itself last.
    pub types: Vec<TypeInfo>,
    /// Full metadata name made safe for use as a file name.
    pub file_name_hint: String,
}

impl HierarchyInfo {
    /// Describes the container `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::MissingContainer`] when `id` is not declared
    /// in `graph`. Missing enclosing types end the chain instead.
    pub fn from_container(graph: &TypeGraph, id: &str, field: &str) -> Result<Self, GeneratorError> {
        let container = graph
            .get(id)
            .ok_or_else(|| GeneratorError::missing_container(id, field))?;

        let mut chain = vec![container];
        let mut seen = HashSet::from([container.id.as_str()]);
        let mut enclosing = container.enclosing.as_deref();
        while let Some(outer_id) = enclosing {
            if !seen.insert(outer_id) {
                tracing::warn!(container = %id, repeated = %outer_id, "nesting cycle in type graph");
                break;
            }
            let Some(outer) = graph.get(outer_id) else {
                tracing::debug!(container = %id, missing = %outer_id, "enclosing type not in snapshot");
                break;
            };
            chain.push(outer);
            enclosing = outer.enclosing.as_deref();
        }
        chain.reverse();

        let namespace = chain.first().and_then(|outermost| outermost.namespace.clone());
        let types: Vec<TypeInfo> = chain
            .into_iter()
            .map(|decl| TypeInfo {
                name: decl.name.clone(),
                kind: decl.kind,
                arity: decl.arity,
            })
            .collect();
        let file_name_hint = file_name_hint(namespace.as_deref(), &types);

        Ok(Self {
            namespace,
            types,
            file_name_hint,
        })
    }

    /// The container type itself.
    #[must_use]
    pub fn container(&self) -> Option<&TypeInfo> {
        self.types.last()
    }

    /// Full metadata name, e.g. ``App.Outer+Inner`1``.
    #[must_use]
    pub fn metadata_name(&self) -> String {
        metadata_name(self.namespace.as_deref(), &self.types)
    }
}

fn metadata_name(namespace: Option<&str>, types: &[TypeInfo]) -> String {
    let nested = types
        .iter()
        .map(TypeInfo::metadata_name)
        .collect::<Vec<_>>()
        .join("+");
    match namespace {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}.{nested}"),
        _ => nested,
    }
}

// Backticks and `+` are not accepted in generated file names.
fn file_name_hint(namespace: Option<&str>, types: &[TypeInfo]) -> String {
    metadata_name(namespace, types)
        .replace('`', "-")
        .replace('+', ".")
}
