//! Snapshot files for CLI tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use observable_gen::KnownNames;
use observable_gen::model::{
    Annotation, FeatureLevel, FieldDecl, Snapshot, SourceLocation, TypeDecl, TypeRef,
};
use observable_gen_cli::Args;

/// A view model with one valid field, a colliding field and, when
/// `with_title` is false, without the second valid field.
#[must_use]
pub fn snapshot(with_title: bool) -> Snapshot {
    let names = KnownNames::default();
    let container = "App.MainViewModel";
    let observable = Annotation::new(&names.observable_property);
    let field = |name: &str, line| {
        FieldDecl::new(
            container,
            name,
            TypeRef::new("System.String"),
            SourceLocation::new("MainViewModel.cs", line, 9),
        )
        .annotated(observable.clone())
    };
    let base = Snapshot::new(FeatureLevel::new(11, 0))
        .with_type(TypeDecl::class(&names.observable_object))
        .with_type(
            TypeDecl::class(container)
                .in_namespace("App")
                .extends(&names.observable_object),
        )
        .with_field(field("_name", 3));
    if with_title {
        base.with_field(field("_title", 4))
    } else {
        base
    }
}

/// A snapshot whose only field collides with its own property name.
#[must_use]
pub fn colliding_snapshot() -> Snapshot {
    let names = KnownNames::default();
    snapshot(false).with_field(
        FieldDecl::new(
            "App.MainViewModel",
            "Name",
            TypeRef::new("System.String"),
            SourceLocation::new("MainViewModel.cs", 5, 9),
        )
        .annotated(Annotation::new(&names.observable_property)),
    )
}

/// UTF-8 view of a temporary directory.
///
/// # Errors
///
/// Fails when the path is not valid UTF-8.
pub fn utf8(path: &Path) -> Result<&Utf8Path> {
    Utf8Path::from_path(path).ok_or_else(|| anyhow!("non UTF-8 path {}", path.display()))
}

/// Serialises `snapshot` into `dir/snapshot.json`.
///
/// # Errors
///
/// Fails when serialisation or the write fails.
pub fn write_snapshot(dir: &Path, snapshot: &Snapshot) -> Result<Utf8PathBuf> {
    let path = utf8(dir)?.join("snapshot.json");
    let text = serde_json::to_string_pretty(snapshot).context("serialise snapshot")?;
    fs::write(&path, text).context("write snapshot")?;
    Ok(path)
}

/// Arguments for `snapshot` with every optional flag unset.
#[must_use]
pub fn args(snapshot: Utf8PathBuf) -> Args {
    Args {
        snapshot,
        config: None,
        out: None,
        emit_dir: None,
        repeat: 1,
        verbose: false,
    }
}
