//! Rule engine behaviour for individual candidates.

use anyhow::{Context, Result, ensure};
use rstest::{fixture, rstest};

use super::*;
use crate::config::KnownNames;
use crate::model::{
    Annotation, AnnotationArg, FieldDecl, SourceLocation, TypeDecl, TypeGraph, TypeRef,
};

const VALIDATION: &str = "System.ComponentModel.DataAnnotations.ValidationAttribute";
const REQUIRED: &str = "System.ComponentModel.DataAnnotations.RequiredAttribute";
const DISPLAY: &str = "System.ComponentModel.DataAnnotations.DisplayAttribute";
const UI_HINT: &str = "System.ComponentModel.DataAnnotations.UIHintAttribute";
const FANCY_HINT: &str = "App.FancyHintAttribute";
const OBSOLETE: &str = "System.ObsoleteAttribute";

struct World {
    graph: TypeGraph,
    options: GeneratorOptions,
}

impl World {
    fn names(&self) -> &KnownNames {
        &self.options.names
    }

    fn primary(&self) -> Annotation {
        Annotation::new(&self.names().observable_property)
    }

    fn field(&self, container: &str, name: &str, ty: &str) -> FieldDecl {
        FieldDecl::new(container, name, TypeRef::new(ty), SourceLocation::new("Vm.cs", 12, 9))
            .annotated(self.primary())
    }

    fn eval(&self, field: &FieldDecl) -> Result<Outcome<PropertyInfo>> {
        let candidate = Candidate::resolve(&self.graph, field).context("resolve candidate")?;
        Ok(evaluate(&candidate, &self.options))
    }
}

#[fixture]
fn world() -> World {
    let options = GeneratorOptions::default();
    let names = options.names.clone();
    let graph = [
        TypeDecl::class(&names.observable_object),
        TypeDecl::class(&names.observable_validator).extends(&names.observable_object),
        TypeDecl::class(&names.observable_recipient).extends(&names.observable_object),
        TypeDecl::class(REQUIRED).extends(VALIDATION),
        TypeDecl::class(FANCY_HINT).extends(UI_HINT),
        TypeDecl::class("App.Vm").in_namespace("App").extends(&names.observable_object),
        TypeDecl::class("App.FormVm")
            .in_namespace("App")
            .extends(&names.observable_validator),
        TypeDecl::class("App.ChatVm")
            .in_namespace("App")
            .extends(&names.observable_recipient),
        TypeDecl::class("App.Plain").in_namespace("App"),
        TypeDecl::class("App.Marked")
            .in_namespace("App")
            .annotated(Annotation::new(&names.observable_object_attribute)),
        TypeDecl::class("App.NotifyOnly")
            .in_namespace("App")
            .annotated(Annotation::new(&names.notify_property_changed_attribute)),
        TypeDecl::class("App.DerivedNotifyOnly")
            .in_namespace("App")
            .extends("App.NotifyOnly"),
        TypeDecl::class("App.ValidatingForm")
            .in_namespace("App")
            .extends(&names.observable_validator)
            .annotated(Annotation::new(&names.notify_data_error_info)),
        TypeDecl::class("App.QuietForm")
            .in_namespace("App")
            .extends("App.ValidatingForm")
            .annotated(
                Annotation::new(&names.notify_data_error_info)
                    .with_arg(AnnotationArg::Bool(false)),
            ),
        TypeDecl::class("App.BroadcastingVm")
            .in_namespace("App")
            .extends(&names.observable_object)
            .annotated(Annotation::new(&names.notify_property_changed_recipients)),
    ]
    .into_iter()
    .collect();
    World { graph, options }
}

#[rstest]
fn plain_field_on_observable_base(world: World) -> Result<()> {
    let outcome = world.eval(&world.field("App.Vm", "_count", "System.Int32"))?;
    ensure!(outcome.diagnostics().is_empty(), "unexpected {:?}", outcome.diagnostics());
    let info = outcome.value().context("metadata expected")?;
    ensure!(info.property_name == "Count", "got {}", info.property_name);
    ensure!(info.field_name == "_count", "field name lost");
    ensure!(info.property_changed_names == ["Count"], "changed {:?}", info.property_changed_names);
    ensure!(info.property_changing_names == ["Count"], "changing {:?}", info.property_changing_names);
    ensure!(!info.notify_recipients && !info.notify_data_error_info, "flags should be off");
    ensure!(info.forwarded_attributes.is_empty(), "nothing to forward");
    Ok(())
}

#[rstest]
#[case("App.Vm", true)]
#[case("App.Marked", true)]
#[case("App.NotifyOnly", false)]
#[case("App.DerivedNotifyOnly", false)]
fn pre_change_names_follow_container_support(
    world: World,
    #[case] container: &str,
    #[case] raises_changing: bool,
) -> Result<()> {
    let outcome = world.eval(&world.field(container, "title", "System.String"))?;
    let info = outcome.value().context("metadata expected")?;
    ensure!(info.property_changed_names == ["Title"], "changed {:?}", info.property_changed_names);
    ensure!(
        info.property_changing_names.is_empty() != raises_changing,
        "changing {:?}",
        info.property_changing_names
    );
    Ok(())
}

#[rstest]
fn container_without_support_is_rejected(world: World) -> Result<()> {
    let outcome = world.eval(&world.field("App.Plain", "_count", "System.Int32"))?;
    ensure!(!outcome.is_success(), "no metadata expected");
    let codes: Vec<_> = outcome.diagnostics().iter().map(Diagnostic::code).collect();
    ensure!(codes == [DiagnosticCode::InvalidContainingType], "got {codes:?}");
    Ok(())
}

#[rstest]
#[case("Title")]
#[case("_Title")]
#[case("__value")]
fn unchanged_names_collide(world: World, #[case] name: &str) -> Result<()> {
    let outcome = world.eval(&world.field("App.Vm", name, "System.String"))?;
    ensure!(outcome.value().is_none(), "no metadata expected");
    let codes: Vec<_> = outcome.diagnostics().iter().map(Diagnostic::code).collect();
    ensure!(codes == [DiagnosticCode::NameCollision], "got {codes:?}");
    Ok(())
}

#[rstest]
fn containing_type_is_checked_before_names(world: World) -> Result<()> {
    let outcome = world.eval(&world.field("App.Plain", "Title", "System.String"))?;
    let codes: Vec<_> = outcome.diagnostics().iter().map(Diagnostic::code).collect();
    ensure!(codes == [DiagnosticCode::InvalidContainingType], "got {codes:?}");
    Ok(())
}

#[rstest]
#[case("System.Object", false)]
#[case("System.ComponentModel.PropertyChangedEventArgs", false)]
#[case("System.ComponentModel.PropertyChangingEventArgs", false)]
#[case("System.String", true)]
fn reserved_property_shapes(world: World, #[case] ty: &str, #[case] allowed: bool) -> Result<()> {
    let outcome = world.eval(&world.field("App.Vm", "_property", ty))?;
    ensure!(outcome.is_success() == allowed, "unexpected outcome for {ty}");
    if !allowed {
        let codes: Vec<_> = outcome.diagnostics().iter().map(Diagnostic::code).collect();
        ensure!(codes == [DiagnosticCode::InvalidGeneratedProperty], "got {codes:?}");
    }
    Ok(())
}

#[rstest]
fn reserved_types_match_through_inheritance(mut world: World) -> Result<()> {
    world.graph.insert(
        TypeDecl::class("App.CustomArgs").extends("System.ComponentModel.PropertyChangedEventArgs"),
    );
    let outcome = world.eval(&world.field("App.Vm", "property", "App.CustomArgs"))?;
    let codes: Vec<_> = outcome.diagnostics().iter().map(Diagnostic::code).collect();
    ensure!(codes == [DiagnosticCode::InvalidGeneratedProperty], "got {codes:?}");
    Ok(())
}

#[rstest]
fn notify_lists_keep_declaration_order(world: World) -> Result<()> {
    let names = world.names().clone();
    let field = world
        .field("App.Vm", "_firstName", "System.String")
        .annotated(Annotation::new(&names.notify_property_changed_for).with_str("FullName"))
        .annotated(Annotation::new(&names.notify_can_execute_changed_for).with_str("SaveCommand"))
        .annotated(
            Annotation::new(&names.notify_property_changed_for)
                .with_str("Initials")
                .with_arg(AnnotationArg::Array(vec![
                    AnnotationArg::Str("FullName".into()),
                    AnnotationArg::Str(String::new()),
                    AnnotationArg::Str("Greeting".into()),
                ])),
        );
    let outcome = world.eval(&field)?;
    let info = outcome.value().context("metadata expected")?;
    ensure!(
        info.property_changed_names == ["FirstName", "FullName", "Initials", "Greeting"],
        "changed {:?}",
        info.property_changed_names
    );
    ensure!(info.notified_command_names == ["SaveCommand"], "commands {:?}", info.notified_command_names);
    ensure!(info.forwarded_attributes.is_empty(), "notify annotations are not forwarded");
    Ok(())
}

#[rstest]
fn validation_attributes_are_forwarded(world: World) -> Result<()> {
    let field = world
        .field("App.FormVm", "_email", "System.String")
        .annotated(Annotation::new(REQUIRED))
        .annotated(Annotation::new(DISPLAY).with_named_arg("Name", AnnotationArg::Str("E-mail".into())))
        .annotated(Annotation::new(FANCY_HINT))
        .annotated(Annotation::new(OBSOLETE));
    let outcome = world.eval(&field)?;
    ensure!(outcome.diagnostics().is_empty(), "unexpected {:?}", outcome.diagnostics());
    let info = outcome.value().context("metadata expected")?;
    let forwarded: Vec<_> = info.forwarded_attributes.iter().map(|a| a.name.as_str()).collect();
    ensure!(forwarded == [REQUIRED, DISPLAY, FANCY_HINT], "forwarded {forwarded:?}");
    Ok(())
}

#[rstest]
fn validation_without_validator_base_is_advisory(world: World) -> Result<()> {
    let field = world
        .field("App.Vm", "_email", "System.String")
        .annotated(Annotation::new(REQUIRED))
        .annotated(Annotation::new(DISPLAY));
    let outcome = world.eval(&field)?;
    ensure!(outcome.is_success(), "metadata is still produced");
    let [diagnostic] = outcome.diagnostics() else {
        anyhow::bail!("expected one diagnostic, got {:?}", outcome.diagnostics());
    };
    ensure!(diagnostic.code() == DiagnosticCode::MissingValidatorBase, "got {diagnostic}");
    ensure!(diagnostic.args() == ["App.Vm", "_email", "2"], "args {:?}", diagnostic.args());
    Ok(())
}

#[rstest]
fn class_level_validation_without_attributes(world: World) -> Result<()> {
    let outcome = world.eval(&world.field("App.ValidatingForm", "_name", "System.String"))?;
    let info = outcome.value().context("metadata expected")?;
    ensure!(info.notify_data_error_info, "class setting should apply");
    let codes: Vec<_> = outcome.diagnostics().iter().map(Diagnostic::code).collect();
    ensure!(codes == [DiagnosticCode::MissingValidationAttributes], "got {codes:?}");
    Ok(())
}

#[rstest]
fn nearest_class_declaration_wins(world: World) -> Result<()> {
    let outcome = world.eval(&world.field("App.QuietForm", "_name", "System.String"))?;
    let info = outcome.value().context("metadata expected")?;
    ensure!(!info.notify_data_error_info, "derived class turned validation off");
    ensure!(outcome.diagnostics().is_empty(), "unexpected {:?}", outcome.diagnostics());
    Ok(())
}

#[rstest]
fn field_setting_overrides_class_setting(world: World) -> Result<()> {
    let names = world.names().clone();
    let off = world
        .field("App.ValidatingForm", "_name", "System.String")
        .annotated(Annotation::new(&names.notify_data_error_info).with_arg(AnnotationArg::Bool(false)));
    let outcome = world.eval(&off)?;
    let info = outcome.value().context("metadata expected")?;
    ensure!(!info.notify_data_error_info, "field turned validation off");
    ensure!(outcome.diagnostics().is_empty(), "unexpected {:?}", outcome.diagnostics());
    ensure!(info.forwarded_attributes.is_empty(), "setting annotations are consumed");
    Ok(())
}

#[rstest]
#[case("App.BroadcastingVm", false)]
#[case("App.ChatVm", true)]
fn recipients_need_the_recipient_base(
    world: World,
    #[case] container: &str,
    #[case] expected: bool,
) -> Result<()> {
    let names = world.names().clone();
    let field = world
        .field(container, "_message", "System.String")
        .annotated(Annotation::new(&names.notify_property_changed_recipients));
    let outcome = world.eval(&field)?;
    let info = outcome.value().context("metadata expected")?;
    ensure!(info.notify_recipients == expected, "recipients for {container}");
    Ok(())
}

#[rstest]
fn nullable_types_keep_their_marker(world: World) -> Result<()> {
    let field = FieldDecl::new(
        "App.Vm",
        "_nickname",
        TypeRef::nullable("System.String"),
        SourceLocation::new("Vm.cs", 3, 5),
    )
    .annotated(world.primary());
    let outcome = world.eval(&field)?;
    let info = outcome.value().context("metadata expected")?;
    ensure!(info.type_name == "System.String?", "got {}", info.type_name);
    Ok(())
}

#[rstest]
fn evaluation_is_deterministic(world: World) -> Result<()> {
    let field = world.field("App.FormVm", "_age", "System.Int32").annotated(Annotation::new(REQUIRED));
    let first = world.eval(&field)?;
    let second = world.eval(&field)?;
    ensure!(first == second, "evaluation should be pure");
    Ok(())
}
