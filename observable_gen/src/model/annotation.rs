//! Annotations applied to declarations and their argument values.

use serde::{Deserialize, Serialize};

/// Value passed to an annotation constructor or named argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnnotationArg {
    /// Explicit null literal.
    Null,
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// String literal.
    Str(String),
    /// Type reference, stored as a fully qualified name.
    Type(String),
    /// Array literal, including `params`-style trailing arguments.
    Array(Vec<AnnotationArg>),
}

impl AnnotationArg {
    /// Returns the string payload when the argument is a string literal.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the boolean payload when the argument is a boolean literal.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    fn push_strings<'a>(&'a self, out: &mut Vec<Option<&'a str>>) {
        match self {
            Self::Array(items) => items.iter().for_each(|item| item.push_strings(out)),
            Self::Str(value) => out.push(Some(value)),
            _ => out.push(None),
        }
    }
}

/// Named argument (`Name = value`) attached to an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedArg {
    /// Argument name.
    pub name: String,
    /// Argument value.
    pub value: AnnotationArg,
}

/// An annotation applied to a type or field.
///
/// Annotations are identified by the fully qualified name of their class;
/// arguments keep declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    /// Fully qualified name of the annotation class.
    pub name: String,
    /// Constructor arguments in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<AnnotationArg>,
    /// Named arguments in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub named_args: Vec<NamedArg>,
}

impl Annotation {
    /// Creates an annotation without arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            named_args: Vec::new(),
        }
    }

    /// Appends a constructor argument.
    #[must_use]
    pub fn with_arg(mut self, arg: AnnotationArg) -> Self {
        self.args.push(arg);
        self
    }

    /// Appends a string constructor argument.
    #[must_use]
    pub fn with_str(self, value: impl Into<String>) -> Self {
        self.with_arg(AnnotationArg::Str(value.into()))
    }

    /// Appends a named argument.
    #[must_use]
    pub fn with_named_arg(mut self, name: impl Into<String>, value: AnnotationArg) -> Self {
        self.named_args.push(NamedArg {
            name: name.into(),
            value,
        });
        self
    }

    /// Whether this annotation's class has exactly the given name.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Flattens the constructor arguments into their string payloads.
    ///
    /// Arrays are expanded in place so `params`-style arguments read the same
    /// as individual ones. Non-string values appear as `None`.
    #[must_use]
    pub fn string_args(&self) -> Vec<Option<&str>> {
        let mut out = Vec::with_capacity(self.args.len());
        self.args.iter().for_each(|arg| arg.push_strings(&mut out));
        out
    }

    /// The first constructor argument, if it is a boolean.
    #[must_use]
    pub fn leading_bool(&self) -> Option<bool> {
        self.args.first().and_then(AnnotationArg::as_bool)
    }
}
