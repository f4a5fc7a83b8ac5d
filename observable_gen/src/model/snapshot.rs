//! One compilation snapshot as seen by the pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{FeatureLevel, FieldDecl, TypeDecl};

/// Type declarations of a snapshot, indexed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<TypeDecl>", into = "Vec<TypeDecl>")]
pub struct TypeGraph {
    types: BTreeMap<String, TypeDecl>,
}

impl TypeGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a declaration.
    pub fn insert(&mut self, decl: TypeDecl) -> Option<TypeDecl> {
        self.types.insert(decl.id.clone(), decl)
    }

    /// Looks up a declaration by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TypeDecl> {
        self.types.get(id)
    }

    /// Whether `id` is declared in this graph.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.types.contains_key(id)
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the graph holds no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates declarations ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.values()
    }
}

impl From<Vec<TypeDecl>> for TypeGraph {
    fn from(decls: Vec<TypeDecl>) -> Self {
        decls.into_iter().collect()
    }
}

impl From<TypeGraph> for Vec<TypeDecl> {
    fn from(graph: TypeGraph) -> Self {
        graph.types.into_values().collect()
    }
}

impl FromIterator<TypeDecl> for TypeGraph {
    fn from_iter<I: IntoIterator<Item = TypeDecl>>(iter: I) -> Self {
        let mut graph = Self::new();
        for decl in iter {
            graph.insert(decl);
        }
        graph
    }
}

/// Declarations of one compilation snapshot.
///
/// Fields keep the order in which the host produced them; that order fixes
/// the order of generated units and diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Effective language feature level of the build.
    #[serde(default)]
    pub feature_level: FeatureLevel,
    /// Every type the fields and rules may refer to.
    #[serde(default)]
    pub types: TypeGraph,
    /// Field declarations in source order.
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

impl Snapshot {
    /// Creates an empty snapshot at the given feature level.
    #[must_use]
    pub fn new(feature_level: FeatureLevel) -> Self {
        Self {
            feature_level,
            ..Self::default()
        }
    }

    /// Adds a type declaration.
    #[must_use]
    pub fn with_type(mut self, decl: TypeDecl) -> Self {
        self.types.insert(decl);
        self
    }

    /// Appends a field declaration.
    #[must_use]
    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }
}
