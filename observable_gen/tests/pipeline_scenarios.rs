//! End-to-end pipeline runs over the sample snapshot.

mod common;

use anyhow::{Context, Result, ensure};
use observable_gen::model::{FeatureLevel, Snapshot};
use observable_gen::{DiagnosticCode, GeneratorError, ObservablePropertyPipeline, Severity};
use rstest::{fixture, rstest};

use common::{field, observable, options, sample_snapshot};

#[fixture]
fn pipeline() -> ObservablePropertyPipeline {
    ObservablePropertyPipeline::new(options())
}

fn codes(diagnostics: &[observable_gen::Diagnostic]) -> Vec<(DiagnosticCode, String)> {
    diagnostics
        .iter()
        .map(|d| (d.code(), d.args().get(1).cloned().unwrap_or_default()))
        .collect()
}

#[rstest]
fn sample_snapshot_yields_units_and_ordered_diagnostics(
    mut pipeline: ObservablePropertyPipeline,
) -> Result<()> {
    let output = pipeline.run(&sample_snapshot(FeatureLevel::new(11, 0)))?;

    let unit_names: Vec<_> = output.units.iter().map(|u| u.name.as_str()).collect();
    ensure!(
        unit_names
            == [
                "App.ViewModels.MainViewModel.Count",
                "App.ViewModels.MainViewModel.FirstName",
                "App.ViewModels.FormViewModel.Email",
                "App.ViewModels.FormViewModel.Nickname",
                "App.ViewModels.Shell.Page-1.Heading",
            ],
        "units {unit_names:?}"
    );

    let expected = vec![
        (DiagnosticCode::OrphanedDependentAttribute, "_draft".to_owned()),
        (DiagnosticCode::NameCollision, "Title".to_owned()),
        (DiagnosticCode::MissingValidationAttributes, "_nickname".to_owned()),
        (DiagnosticCode::InvalidContainingType, "_value".to_owned()),
    ];
    ensure!(codes(&output.diagnostics) == expected, "diagnostics {:?}", output.diagnostics);
    ensure!(output.has_errors(), "collision and container errors are errors");
    Ok(())
}

#[rstest]
fn count_scenario_metadata(mut pipeline: ObservablePropertyPipeline) -> Result<()> {
    let output = pipeline.run(&sample_snapshot(FeatureLevel::new(11, 0)))?;
    let count = output
        .units
        .iter()
        .find(|u| u.property.field_name == "_count")
        .context("unit for _count")?;
    let info = &count.property;
    ensure!(info.property_name == "Count", "name {}", info.property_name);
    ensure!(info.type_name == "System.Int32", "type {}", info.type_name);
    ensure!(info.property_changed_names == ["Count"], "changed names");
    ensure!(info.property_changing_names == ["Count"], "changing names");
    ensure!(!info.notify_recipients && !info.notify_data_error_info, "flags");
    ensure!(info.forwarded_attributes.is_empty(), "forwarded");
    Ok(())
}

#[rstest]
fn nested_record_containers_describe_their_chain(
    mut pipeline: ObservablePropertyPipeline,
) -> Result<()> {
    let output = pipeline.run(&sample_snapshot(FeatureLevel::new(11, 0)))?;
    let heading = output
        .units
        .iter()
        .find(|u| u.property.field_name == "_heading")
        .context("unit for _heading")?;
    let kinds: Vec<_> = heading
        .hierarchy
        .types
        .iter()
        .map(|t| (t.name.as_str(), t.is_record()))
        .collect();
    ensure!(kinds == [("Shell", false), ("Page", true)], "chain {kinds:?}");
    ensure!(
        heading.property.property_changing_names.is_empty(),
        "notify-only containers raise no pre-change notifications"
    );
    Ok(())
}

#[rstest]
fn unsupported_feature_level_is_reported_once(
    mut pipeline: ObservablePropertyPipeline,
) -> Result<()> {
    let output = pipeline.run(&sample_snapshot(FeatureLevel::new(7, 3)))?;
    ensure!(output.units.is_empty(), "nothing is generated below the minimum level");

    let gate: Vec<_> = output
        .diagnostics
        .iter()
        .filter(|d| d.code() == DiagnosticCode::UnsupportedFeatureLevel)
        .collect();
    let [report] = gate.as_slice() else {
        anyhow::bail!("expected one feature level diagnostic, got {gate:?}");
    };
    ensure!(report.location().is_none(), "the report is build-wide");
    ensure!(report.args() == ["8.0", "7.3"], "args {:?}", report.args());

    let orphaned = output
        .diagnostics
        .iter()
        .filter(|d| d.code() == DiagnosticCode::OrphanedDependentAttribute)
        .count();
    ensure!(orphaned == 1, "orphaned fields are reported regardless of level");
    ensure!(output.diagnostics.len() == 2, "candidates are dropped, not failed");
    Ok(())
}

#[rstest]
fn no_feature_report_without_candidates(mut pipeline: ObservablePropertyPipeline) -> Result<()> {
    let snapshot = common::base_snapshot(FeatureLevel::new(6, 0));
    let output = pipeline.run(&snapshot)?;
    ensure!(output.diagnostics.is_empty(), "got {:?}", output.diagnostics);
    Ok(())
}

#[rstest]
fn advisories_keep_their_severity(mut pipeline: ObservablePropertyPipeline) -> Result<()> {
    let snapshot = common::base_snapshot(FeatureLevel::new(11, 0)).with_field(field(
        "App.ViewModels.MainViewModel",
        "_email",
        "System.String",
        3,
        &[observable(), observable_gen::model::Annotation::new(common::REQUIRED)],
    ));
    let output = pipeline.run(&snapshot)?;
    ensure!(output.units.len() == 1, "metadata survives the advisory");
    let [advisory] = output.diagnostics.as_slice() else {
        anyhow::bail!("expected one advisory, got {:?}", output.diagnostics);
    };
    ensure!(advisory.code() == DiagnosticCode::MissingValidatorBase, "got {advisory}");
    ensure!(advisory.severity() == Severity::Error, "validator base is an error");
    ensure!(
        advisory.to_string()
            == "MainViewModel.cs:3:9: error OBSGEN0005: The field App.ViewModels.MainViewModel._email cannot be used to generate an observable property, as it has 1 validation attribute(s) but is declared in a type that doesn't inherit from ObservableValidator",
        "rendered {advisory}"
    );
    Ok(())
}

#[rstest]
fn missing_containers_abort_the_run(mut pipeline: ObservablePropertyPipeline) {
    let snapshot = Snapshot::new(FeatureLevel::new(11, 0))
        .with_field(field("App.Gone", "_a", "System.Int32", 1, &[observable()]))
        .with_field(field("App.AlsoGone", "_b", "System.Int32", 2, &[observable()]));
    let err = pipeline.run(&snapshot);
    match err {
        Err(GeneratorError::Aggregate(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("expected aggregated missing containers, got {other:?}"),
    }
}
