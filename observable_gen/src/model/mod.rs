//! Declarations supplied by the host toolchain.
//!
//! Everything here is plain data: value-comparable, hashable and
//! serialisable, so two snapshots that describe the same declarations compare
//! equal and the incremental graph can reuse earlier results.

mod annotation;
mod decl;
mod feature;
mod snapshot;

pub use annotation::{Annotation, AnnotationArg, NamedArg};
pub use decl::{FieldDecl, SourceLocation, TypeDecl, TypeKind, TypeRef};
pub use feature::{FeatureLevel, ParseFeatureLevelError};
pub use snapshot::{Snapshot, TypeGraph};
