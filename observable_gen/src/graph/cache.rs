//! Session-scoped storage for stage memos.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Identity of a stage within a pipeline.
///
/// Ids are static names, so every run of the same pipeline addresses the
/// same cache slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StageId(&'static str);

impl StageId {
    /// Creates a stage id.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The stage name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Memo tables of every stage, owned by one pipeline for one session.
///
/// Entries are type-erased; each stage knows the concrete type it stored.
/// Nothing here is persisted and dropping the cache forgets every memo.
#[derive(Default)]
pub struct StageCache {
    entries: HashMap<StageId, Box<dyn Any + Send + Sync>>,
}

impl StageCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stages with a memo.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no stage has a memo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets every memo.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Removes and returns the memo of `id`.
    ///
    /// A memo of another type means the id was reused for a different stage;
    /// it is discarded and the stage starts cold.
    pub(crate) fn take<T: Any + Send + Sync>(&mut self, id: StageId) -> Option<T> {
        let entry = self.entries.remove(&id)?;
        match entry.downcast::<T>() {
            Ok(memo) => Some(*memo),
            Err(_) => {
                tracing::warn!(stage = %id, "stage memo has an unexpected type; discarding");
                None
            }
        }
    }

    /// Stores the memo of `id`, replacing any previous one.
    pub(crate) fn store<T: Any + Send + Sync>(&mut self, id: StageId, memo: T) {
        self.entries.insert(id, Box::new(memo));
    }
}

impl fmt::Debug for StageCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stages: Vec<_> = self.entries.keys().map(|id| id.name()).collect();
        stages.sort_unstable();
        f.debug_struct("StageCache").field("stages", &stages).finish()
    }
}
