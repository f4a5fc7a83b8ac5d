//! Per-run evaluation counters.

use std::collections::BTreeMap;

use serde::Serialize;

use super::cache::StageId;

/// How a stage served its inputs during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageStats {
    /// Inputs that had to be computed.
    pub evaluated: usize,
    /// Inputs answered from the previous run.
    pub reused: usize,
}

/// Counters for every stage that ran, keyed by stage name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    stages: BTreeMap<&'static str, StageStats>,
}

impl RunStats {
    /// Counters of the stage called `name`, if it ran.
    #[must_use]
    pub fn stage(&self, name: &str) -> Option<StageStats> {
        self.stages.get(name).copied()
    }

    /// Stages in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, StageStats)> + '_ {
        self.stages.iter().map(|(name, stats)| (*name, *stats))
    }

    /// Inputs computed across all stages.
    #[must_use]
    pub fn total_evaluated(&self) -> usize {
        self.stages.values().map(|stats| stats.evaluated).sum()
    }

    /// Inputs reused across all stages.
    #[must_use]
    pub fn total_reused(&self) -> usize {
        self.stages.values().map(|stats| stats.reused).sum()
    }

    pub(super) fn record(&mut self, id: StageId, evaluated: usize, reused: usize) {
        let stats = self.stages.entry(id.name()).or_default();
        stats.evaluated += evaluated;
        stats.reused += reused;
    }
}
