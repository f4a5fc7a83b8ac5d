//! Incremental analysis for observable-property annotations.
//!
//! The host supplies a [`Snapshot`] of declared types and fields. An
//! [`ObservablePropertyPipeline`] finds fields carrying the observable
//! property annotation, validates them, and derives the [`PropertyInfo`]
//! an emitter needs to write the generated property. Problems travel as
//! [`Diagnostic`] values; only host-contract violations become a
//! [`GeneratorError`].
//!
//! ```
//! use observable_gen::model::{
//!     Annotation, FeatureLevel, FieldDecl, Snapshot, SourceLocation, TypeDecl, TypeRef,
//! };
//! use observable_gen::{GeneratorOptions, ObservablePropertyPipeline};
//!
//! let options = GeneratorOptions::default();
//! let snapshot = Snapshot::new(FeatureLevel::new(11, 0))
//!     .with_type(TypeDecl::class("App.Vm").extends(&options.names.observable_object))
//!     .with_field(
//!         FieldDecl::new("App.Vm", "_count", TypeRef::new("System.Int32"), SourceLocation::new("Vm.cs", 7, 17))
//!             .annotated(Annotation::new(&options.names.observable_property)),
//!     );
//!
//! let mut pipeline = ObservablePropertyPipeline::new(options);
//! let output = pipeline.run(&snapshot)?;
//! assert_eq!(output.units.len(), 1);
//! assert_eq!(output.units[0].property.property_name, "Count");
//! # Ok::<(), observable_gen::GeneratorError>(())
//! ```

mod config;
mod diagnostics;
mod emit;
mod error;
pub mod graph;
mod hierarchy;
pub mod matcher;
pub mod model;
mod naming;
mod orphaned;
mod outcome;
pub mod pipeline;
pub mod rules;

pub use config::{GeneratorOptions, KnownNames, ReservedNames};
pub use diagnostics::{
    Diagnostic, DiagnosticCode, DiagnosticCollector, DiagnosticDescriptor, Severity,
};
pub use emit::{CodeEmitter, EmitReport, GeneratedUnit, MemoryEmitter, UnitLedger};
pub use error::{AggregatedErrors, GeneratorError};
pub use hierarchy::{HierarchyInfo, TypeInfo};
pub use naming::derive_property_name;
pub use orphaned::{is_orphaned, orphaned_diagnostic};
pub use outcome::Outcome;
pub use pipeline::{ObservablePropertyPipeline, PipelineOutput};
pub use rules::{Candidate, PropertyInfo, evaluate};
