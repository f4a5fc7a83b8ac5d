//! The observable-property pipeline.
//!
//! One [`ObservablePropertyPipeline`] lives for a build session and owns the
//! stage cache. Each [`run`](ObservablePropertyPipeline::run) takes the next
//! snapshot of declarations through these stages:
//!
//! ```text
//! fields ─┬─ observable ── resolve ─┬─ gate ─┬─ rejected ── report
//!         │                         │        └─ passed ── evaluate
//!         │                feature level
//!         └─ orphaned ── orphaned report
//! ```
//!
//! Diagnostics are reported as orphaned fields first, then the feature-level
//! report, then per-candidate diagnostics in field order.

use crate::config::GeneratorOptions;
use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticCollector};
use crate::emit::{CodeEmitter, EmitReport, GeneratedUnit, UnitLedger};
use crate::error::GeneratorError;
use crate::graph::{GraphRun, RunStats, StageCache};
use crate::matcher::has_annotation;
use crate::model::{FeatureLevel, FieldDecl, Snapshot};
use crate::orphaned::{is_orphaned, orphaned_diagnostic};
use crate::rules::{Candidate, evaluate};

/// Stage ids, in pipeline order.
pub mod stages {
    use crate::graph::StageId;

    /// Fields carrying the primary annotation.
    pub const OBSERVABLE: StageId = StageId::new("observable");
    /// Fields carrying only dependent annotations.
    pub const ORPHANED: StageId = StageId::new("orphaned");
    /// One diagnostic per orphaned field.
    pub const ORPHANED_REPORT: StageId = StageId::new("orphaned_report");
    /// Whether the build's feature level is supported.
    pub const FEATURE_GATE: StageId = StageId::new("feature_gate");
    /// Candidates paired with the gate.
    pub const GATED: StageId = StageId::new("gated");
    /// Candidates dropped by the gate.
    pub const REJECTED: StageId = StageId::new("rejected");
    /// Dropped candidates gathered for the report.
    pub const REJECTED_LIST: StageId = StageId::new("rejected_list");
    /// The single feature-level diagnostic.
    pub const GATE_REPORT: StageId = StageId::new("gate_report");
    /// Candidates that passed the gate.
    pub const PASSED: StageId = StageId::new("passed");
    /// Rule evaluation.
    pub const EVALUATE: StageId = StageId::new("evaluate");
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    /// Units for every candidate with metadata, in field order.
    pub units: Vec<GeneratedUnit>,
    /// Diagnostics in report order.
    pub diagnostics: Vec<Diagnostic>,
    /// Stage counters.
    pub stats: RunStats,
}

impl PipelineOutput {
    /// Whether any diagnostic has error severity.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Incremental generator for one build session.
#[derive(Debug)]
pub struct ObservablePropertyPipeline {
    options: GeneratorOptions,
    cache: StageCache,
    ledger: UnitLedger,
}

impl ObservablePropertyPipeline {
    /// Starts a session with a cold cache.
    #[must_use]
    pub fn new(options: GeneratorOptions) -> Self {
        Self {
            options,
            cache: StageCache::new(),
            ledger: UnitLedger::new(),
        }
    }

    /// Options the session was started with.
    #[must_use]
    pub const fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Runs the pipeline over `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::MissingContainer`] (or an aggregate of them)
    /// when annotated fields name containers absent from the snapshot. The
    /// run is abandoned; the cache keeps the stages that completed.
    pub fn run(&mut self, snapshot: &Snapshot) -> Result<PipelineOutput, GeneratorError> {
        let options = &self.options;
        let names = &options.names;
        let mut graph = GraphRun::new(&mut self.cache).parallel(options.parallel);

        let observable = graph.filter(stages::OBSERVABLE, &snapshot.fields, |field| {
            has_annotation(&field.annotations, &names.observable_property)
        });
        let orphaned = graph.filter(stages::ORPHANED, &snapshot.fields, |field| {
            is_orphaned(field, names)
        });
        let orphaned_reports = graph.map(stages::ORPHANED_REPORT, &orphaned, orphaned_diagnostic);

        let candidates = resolve_candidates(snapshot, &observable)?;

        let gate = graph.select(
            stages::FEATURE_GATE,
            (snapshot.feature_level, options.min_feature_level),
            |(level, minimum)| level.satisfies(*minimum),
        );
        let gated = graph.combine(stages::GATED, &candidates, &gate);
        let dropped = graph.filter(stages::REJECTED, &gated, |(_, open)| !open);
        let rejected = graph.collect(stages::REJECTED_LIST, dropped);
        let gate_report = graph.select(
            stages::GATE_REPORT,
            (!rejected.is_empty(), snapshot.feature_level, options.min_feature_level),
            |&(any_dropped, level, minimum)| {
                any_dropped.then(|| feature_level_diagnostic(level, minimum))
            },
        );

        let passed: Vec<Candidate> = graph
            .filter(stages::PASSED, &gated, |(_, open)| *open)
            .into_iter()
            .map(|(candidate, _)| candidate)
            .collect();
        let outcomes = graph.map(stages::EVALUATE, &passed, |candidate| {
            evaluate(candidate, options)
        });

        let mut collector = DiagnosticCollector::new();
        collector.extend(orphaned_reports);
        collector.extend(gate_report);
        let mut units = Vec::with_capacity(passed.len());
        for (candidate, outcome) in passed.into_iter().zip(outcomes) {
            let (value, diagnostics) = outcome.into_parts();
            collector.extend(diagnostics);
            if let Some(property) = value {
                units.push(GeneratedUnit::new(candidate.hierarchy, property));
            }
        }

        let stats = graph.finish();
        tracing::debug!(
            fields = snapshot.fields.len(),
            units = units.len(),
            diagnostics = collector.len(),
            "pipeline run complete"
        );
        Ok(PipelineOutput {
            units,
            diagnostics: collector.into_vec(),
            stats,
        })
    }

    /// Runs the pipeline and hands changed units to `emitter`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`run`](Self::run) and
    /// [`GeneratorError::Emit`] when the emitter rejects a unit.
    pub fn run_and_emit<E: CodeEmitter>(
        &mut self,
        snapshot: &Snapshot,
        emitter: &mut E,
    ) -> Result<(PipelineOutput, EmitReport), GeneratorError> {
        let output = self.run(snapshot)?;
        let report = self.ledger.apply(&output.units, emitter)?;
        Ok((output, report))
    }
}

// Containers are looked up outside the graph since they depend on the whole
// type graph rather than on the field alone. Every missing container is
// reported before the run is abandoned.
fn resolve_candidates(
    snapshot: &Snapshot,
    fields: &[FieldDecl],
) -> Result<Vec<Candidate>, GeneratorError> {
    let mut candidates = Vec::with_capacity(fields.len());
    let mut errors = Vec::new();
    for field in fields {
        match Candidate::resolve(&snapshot.types, field) {
            Ok(candidate) => candidates.push(candidate),
            Err(err) => errors.push(err),
        }
    }
    GeneratorError::try_aggregate(errors).map_or(Ok(candidates), Err)
}

fn feature_level_diagnostic(level: FeatureLevel, minimum: FeatureLevel) -> Diagnostic {
    Diagnostic::new(
        DiagnosticCode::UnsupportedFeatureLevel,
        None,
        [minimum.to_string(), level.to_string()],
    )
}
