//! Type and field declarations handed over by the host.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Annotation;

/// Position of a declaration in its source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Path of the source file as reported by the host.
    pub file: String,
    /// One-based line number.
    pub line: u32,
    /// One-based column number.
    pub column: u32,
}

impl SourceLocation {
    /// Creates a location.
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Kind of a declared type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Reference type.
    #[default]
    Class,
    /// Record (value-equality reference type).
    Record,
    /// Value type.
    Struct,
    /// Interface.
    Interface,
}

/// Type of a field, including its nullability annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Fully qualified type name.
    pub name: String,
    /// Whether the field type is annotated as nullable.
    #[serde(default)]
    pub nullable: bool,
}

impl TypeRef {
    /// A non-nullable type reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: false,
        }
    }

    /// A nullable type reference.
    #[must_use]
    pub fn nullable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: true,
        }
    }

    /// Fully qualified name with a trailing `?` for nullable types.
    #[must_use]
    pub fn name_with_nullability(&self) -> String {
        if self.nullable {
            format!("{}?", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// A declared type: a container of fields, a base type, an annotation class
/// or a field type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Fully qualified name, unique within a snapshot.
    pub id: String,
    /// Simple name without namespace or enclosing types.
    pub name: String,
    /// Declaration kind.
    #[serde(default)]
    pub kind: TypeKind,
    /// Namespace of a top-level type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Id of the enclosing type for nested declarations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosing: Option<String>,
    /// Id of the declared base type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Number of generic type parameters.
    #[serde(default)]
    pub arity: u32,
    /// Annotations applied to the type, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl TypeDecl {
    /// Creates a class declaration named after the last segment of `id`.
    #[must_use]
    pub fn class(id: impl Into<String>) -> Self {
        Self::new(id, TypeKind::Class)
    }

    /// Creates a record declaration named after the last segment of `id`.
    #[must_use]
    pub fn record(id: impl Into<String>) -> Self {
        Self::new(id, TypeKind::Record)
    }

    /// Creates a declaration of the given kind.
    #[must_use]
    pub fn new(type_id: impl Into<String>, kind: TypeKind) -> Self {
        let id: String = type_id.into();
        let name = id
            .rsplit(['.', '+'])
            .next()
            .unwrap_or(id.as_str())
            .to_owned();
        Self {
            id,
            name,
            kind,
            namespace: None,
            enclosing: None,
            base: None,
            arity: 0,
            annotations: Vec::new(),
        }
    }

    /// Sets the namespace.
    #[must_use]
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Nests the type inside `enclosing`.
    #[must_use]
    pub fn nested_in(mut self, enclosing: impl Into<String>) -> Self {
        self.enclosing = Some(enclosing.into());
        self
    }

    /// Sets the base type.
    #[must_use]
    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Sets the generic arity.
    #[must_use]
    pub const fn with_arity(mut self, arity: u32) -> Self {
        self.arity = arity;
        self
    }

    /// Appends an annotation.
    #[must_use]
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A field-like declaration inside a container type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Declared field name.
    pub name: String,
    /// Declared field type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Id of the containing type.
    pub container: String,
    /// Where the field is declared.
    pub location: SourceLocation,
    /// Annotations applied to the field, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl FieldDecl {
    /// Creates a field without annotations.
    #[must_use]
    pub fn new(
        container: impl Into<String>,
        name: impl Into<String>,
        ty: TypeRef,
        location: SourceLocation,
    ) -> Self {
        Self {
            name: name.into(),
            ty,
            container: container.into(),
            location,
            annotations: Vec::new(),
        }
    }

    /// Appends an annotation.
    #[must_use]
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("App.ViewModels.MainViewModel", "MainViewModel")]
    #[case("App.Outer+Inner", "Inner")]
    #[case("Standalone", "Standalone")]
    fn simple_name_comes_from_last_segment(#[case] id: &str, #[case] expected: &str) {
        assert_eq!(TypeDecl::class(id).name, expected);
    }

    #[rstest]
    fn nullable_types_render_with_marker() {
        assert_eq!(TypeRef::nullable("System.String").name_with_nullability(), "System.String?");
        assert_eq!(TypeRef::new("System.Int32").name_with_nullability(), "System.Int32");
    }
}
