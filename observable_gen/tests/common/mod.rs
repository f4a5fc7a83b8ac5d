//! Shared snapshot fixtures for integration tests.
//!
//! The fixture world models a small application: an observable base, a
//! validator and a recipient base from the toolkit, and a handful of view
//! models deriving from them.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use observable_gen::model::{
    Annotation, FeatureLevel, FieldDecl, Snapshot, SourceLocation, TypeDecl, TypeRef,
};
use observable_gen::{GeneratorOptions, KnownNames};

/// Validation annotation deriving from the toolkit's validation base.
pub const REQUIRED: &str = "System.ComponentModel.DataAnnotations.RequiredAttribute";

/// Known names used by the default options.
#[must_use]
pub fn names() -> KnownNames {
    KnownNames::default()
}

/// Toolkit base types and the application's view models.
#[must_use]
pub fn base_snapshot(level: FeatureLevel) -> Snapshot {
    let names = names();
    Snapshot::new(level)
        .with_type(TypeDecl::class(&names.observable_object))
        .with_type(TypeDecl::class(&names.observable_validator).extends(&names.observable_object))
        .with_type(TypeDecl::class(&names.observable_recipient).extends(&names.observable_object))
        .with_type(TypeDecl::class(REQUIRED).extends(&names.validation_attribute))
        .with_type(
            TypeDecl::class("App.ViewModels.MainViewModel")
                .in_namespace("App.ViewModels")
                .extends(&names.observable_object),
        )
        .with_type(
            TypeDecl::class("App.ViewModels.FormViewModel")
                .in_namespace("App.ViewModels")
                .extends(&names.observable_validator)
                .annotated(Annotation::new(&names.notify_data_error_info)),
        )
        .with_type(
            TypeDecl::class("App.ViewModels.Shell")
                .in_namespace("App.ViewModels"),
        )
        .with_type(
            TypeDecl::record("App.ViewModels.Shell+Page")
                .nested_in("App.ViewModels.Shell")
                .with_arity(1)
                .annotated(Annotation::new(&names.notify_property_changed_attribute)),
        )
        .with_type(TypeDecl::class("App.Models.Plain").in_namespace("App.Models"))
}

/// A field annotated with `annotations`, located by `line`.
#[must_use]
pub fn field(container: &str, name: &str, ty: &str, line: u32, annotations: &[Annotation]) -> FieldDecl {
    annotations.iter().cloned().fold(
        FieldDecl::new(
            container,
            name,
            TypeRef::new(ty),
            SourceLocation::new(format!("{}.cs", short_name(container)), line, 9),
        ),
        FieldDecl::annotated,
    )
}

/// The primary annotation.
#[must_use]
pub fn observable() -> Annotation {
    Annotation::new(names().observable_property)
}

/// The options every scenario starts from.
#[must_use]
pub fn options() -> GeneratorOptions {
    GeneratorOptions::default()
}

fn short_name(container: &str) -> &str {
    container.rsplit(['.', '+']).next().unwrap_or(container)
}

/// A snapshot exercising every rule: valid fields, each rejection, advisory
/// diagnostics and an orphaned field.
#[must_use]
pub fn sample_snapshot(level: FeatureLevel) -> Snapshot {
    let names = names();
    let main = "App.ViewModels.MainViewModel";
    base_snapshot(level)
        .with_field(field(main, "_count", "System.Int32", 10, &[observable()]))
        .with_field(field(
            main,
            "_firstName",
            "System.String",
            12,
            &[
                observable(),
                Annotation::new(&names.notify_property_changed_for).with_str("FullName"),
                Annotation::new(&names.notify_can_execute_changed_for).with_str("SaveCommand"),
            ],
        ))
        .with_field(field(main, "Title", "System.String", 14, &[observable()]))
        .with_field(field(
            main,
            "_draft",
            "System.String",
            16,
            &[Annotation::new(&names.notify_can_execute_changed_for).with_str("SaveCommand")],
        ))
        .with_field(field(
            "App.ViewModels.FormViewModel",
            "_email",
            "System.String",
            20,
            &[observable(), Annotation::new(REQUIRED)],
        ))
        .with_field(field(
            "App.ViewModels.FormViewModel",
            "_nickname",
            "System.String",
            22,
            &[observable()],
        ))
        .with_field(field(
            "App.ViewModels.Shell+Page",
            "_heading",
            "System.String",
            30,
            &[observable()],
        ))
        .with_field(field("App.Models.Plain", "_value", "System.Int32", 40, &[observable()]))
}
