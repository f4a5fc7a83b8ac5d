//! Generated units and the boundary to code emitters.
//!
//! Rendering source text is left to a [`CodeEmitter`] supplied by the host.
//! The [`UnitLedger`] remembers what was handed over last time so emitters
//! only see units whose metadata changed, plus the names of units that no
//! longer exist.

use std::collections::BTreeMap;
use std::convert::Infallible;

use serde::Serialize;

use crate::error::GeneratorError;
use crate::hierarchy::HierarchyInfo;
use crate::rules::PropertyInfo;

/// Metadata for one generated property, keyed by container and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GeneratedUnit {
    /// Stable unit name, `{file_name_hint}.{property_name}`.
    pub name: String,
    /// Where the partial declaration goes.
    pub hierarchy: HierarchyInfo,
    /// What to generate.
    pub property: PropertyInfo,
}

impl GeneratedUnit {
    /// Names the unit after its container and property.
    #[must_use]
    pub fn new(hierarchy: HierarchyInfo, property: PropertyInfo) -> Self {
        let name = format!("{}.{}", hierarchy.file_name_hint, property.property_name);
        Self {
            name,
            hierarchy,
            property,
        }
    }
}

/// Receives generated units.
pub trait CodeEmitter {
    /// Error reported when a unit cannot be written.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Writes or rewrites `unit`.
    ///
    /// # Errors
    ///
    /// Implementations report I/O or rendering failures.
    fn emit(&mut self, unit: &GeneratedUnit) -> Result<(), Self::Error>;

    /// Removes a unit emitted by an earlier run.
    ///
    /// # Errors
    ///
    /// Implementations report I/O failures.
    fn retire(&mut self, _unit_name: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// What a ledger update handed to the emitter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmitReport {
    /// Units written in this update, in name order.
    pub emitted: Vec<String>,
    /// Units identical to the previous update.
    pub unchanged: usize,
    /// Units removed in this update, in name order.
    pub retired: Vec<String>,
}

/// Units handed to the emitter by previous updates.
#[derive(Debug, Clone, Default)]
pub struct UnitLedger {
    current: BTreeMap<String, GeneratedUnit>,
}

impl UnitLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: BTreeMap::new(),
        }
    }

    /// Names of the units currently emitted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.current.keys().map(String::as_str)
    }

    /// Brings `emitter` in line with `units`.
    ///
    /// When two units share a name the later one wins. The ledger records
    /// each unit as soon as the emitter accepts it, so after a failure it
    /// still reflects what the emitter holds.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Emit`] for the first unit the emitter
    /// rejects.
    pub fn apply<E: CodeEmitter>(
        &mut self,
        units: &[GeneratedUnit],
        emitter: &mut E,
    ) -> Result<EmitReport, GeneratorError> {
        let next: BTreeMap<&str, &GeneratedUnit> =
            units.iter().map(|unit| (unit.name.as_str(), unit)).collect();
        let mut report = EmitReport::default();

        let stale: Vec<String> = self
            .current
            .keys()
            .filter(|name| !next.contains_key(name.as_str()))
            .cloned()
            .collect();
        for name in stale {
            emitter
                .retire(&name)
                .map_err(|err| GeneratorError::emit(name.as_str(), err))?;
            self.current.remove(&name);
            report.retired.push(name);
        }

        for (name, unit) in next {
            if self.current.get(name) == Some(unit) {
                report.unchanged += 1;
                continue;
            }
            emitter
                .emit(unit)
                .map_err(|err| GeneratorError::emit(name, err))?;
            self.current.insert(name.to_owned(), unit.clone());
            report.emitted.push(name.to_owned());
        }

        tracing::debug!(
            emitted = report.emitted.len(),
            unchanged = report.unchanged,
            retired = report.retired.len(),
            "applied generated units"
        );
        Ok(report)
    }
}

/// Emitter that keeps units in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryEmitter {
    units: BTreeMap<String, GeneratedUnit>,
    writes: usize,
}

impl MemoryEmitter {
    /// Creates an empty emitter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The unit called `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GeneratedUnit> {
        self.units.get(name)
    }

    /// Units held, in name order.
    pub fn units(&self) -> impl Iterator<Item = &GeneratedUnit> {
        self.units.values()
    }

    /// Number of `emit` calls received.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl CodeEmitter for MemoryEmitter {
    type Error = Infallible;

    fn emit(&mut self, unit: &GeneratedUnit) -> Result<(), Self::Error> {
        self.writes += 1;
        self.units.insert(unit.name.clone(), unit.clone());
        Ok(())
    }

    fn retire(&mut self, unit_name: &str) -> Result<(), Self::Error> {
        self.units.remove(unit_name);
        Ok(())
    }
}
