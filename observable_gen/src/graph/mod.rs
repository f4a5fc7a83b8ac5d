//! Pull-based incremental evaluation.
//!
//! A [`GraphRun`] executes stages against a [`StageCache`] owned by the
//! caller. Every stage compares its inputs by value with the memo left by
//! the previous run and only computes what changed:
//!
//! - [`GraphRun::select`] memoises one input/output pair;
//! - [`GraphRun::map`] memoises an output per distinct input item;
//! - [`GraphRun::filter`] is a map to `bool` followed by selection;
//! - [`GraphRun::combine`] pairs every item with a scalar;
//! - [`GraphRun::collect`] gathers items into one shared slice.
//!
//! Item memos are rebuilt from the current inputs on every run, so entries
//! for items that disappeared are evicted.

mod cache;
mod stats;

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;

pub use cache::{StageCache, StageId};
pub use stats::{RunStats, StageStats};

struct ScalarMemo<I, O> {
    input: I,
    output: O,
}

/// One evaluation pass over a [`StageCache`].
#[derive(Debug)]
pub struct GraphRun<'c> {
    cache: &'c mut StageCache,
    stats: RunStats,
    parallel: bool,
}

impl<'c> GraphRun<'c> {
    /// Starts a run backed by `cache`.
    #[must_use]
    pub fn new(cache: &'c mut StageCache) -> Self {
        Self {
            cache,
            stats: RunStats::default(),
            parallel: false,
        }
    }

    /// Evaluates cache misses of item stages on the rayon pool. Ignored
    /// unless the crate is built with the `parallel` feature.
    #[must_use]
    pub const fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Computes `f(input)` unless the previous run saw an equal input.
    pub fn select<I, O, F>(&mut self, id: StageId, input: I, f: F) -> O
    where
        I: PartialEq + Send + Sync + 'static,
        O: Clone + Send + Sync + 'static,
        F: FnOnce(&I) -> O,
    {
        let previous = self.cache.take::<ScalarMemo<I, O>>(id);
        let output = match previous {
            Some(memo) if memo.input == input => {
                tracing::trace!(stage = %id, "reusing scalar");
                self.stats.record(id, 0, 1);
                memo.output
            }
            _ => {
                self.stats.record(id, 1, 0);
                f(&input)
            }
        };
        self.cache.store(
            id,
            ScalarMemo {
                input,
                output: output.clone(),
            },
        );
        output
    }

    /// Applies `f` to every item, reusing outputs for items seen last run.
    ///
    /// Outputs are returned in input order whether or not misses were
    /// computed in parallel.
    pub fn map<I, O, F>(&mut self, id: StageId, inputs: &[I], f: F) -> Vec<O>
    where
        I: Eq + Hash + Clone + Send + Sync + 'static,
        O: Clone + Send + Sync + 'static,
        F: Fn(&I) -> O + Sync,
    {
        let previous: HashMap<I, O> = self.cache.take(id).unwrap_or_default();
        let cached: Vec<Option<O>> = inputs.iter().map(|item| previous.get(item).cloned()).collect();

        let misses: Vec<&I> = inputs
            .iter()
            .zip(&cached)
            .filter(|(_, hit)| hit.is_none())
            .map(|(item, _)| item)
            .collect();
        let evaluated = misses.len();
        let mut fresh = evaluate_items(&misses, &f, self.parallel).into_iter();

        let mut memo = HashMap::with_capacity(inputs.len());
        let outputs: Vec<O> = inputs
            .iter()
            .zip(cached)
            .filter_map(|(item, hit)| {
                let output = hit.or_else(|| fresh.next())?;
                memo.insert(item.clone(), output.clone());
                Some(output)
            })
            .collect();

        self.stats.record(id, evaluated, inputs.len() - evaluated);
        tracing::trace!(stage = %id, evaluated, total = inputs.len(), "mapped items");
        self.cache.store(id, memo);
        outputs
    }

    /// Keeps the items for which `predicate` holds, in input order.
    pub fn filter<I, F>(&mut self, id: StageId, inputs: &[I], predicate: F) -> Vec<I>
    where
        I: Eq + Hash + Clone + Send + Sync + 'static,
        F: Fn(&I) -> bool + Sync,
    {
        let keep = self.map(id, inputs, predicate);
        inputs
            .iter()
            .zip(keep)
            .filter(|(_, kept)| *kept)
            .map(|(item, _)| item.clone())
            .collect()
    }

    /// Pairs every item with `scalar`.
    ///
    /// A pair counts as reused when the previous run produced an equal one,
    /// so a changed scalar invalidates every downstream item.
    pub fn combine<I, S>(&mut self, id: StageId, inputs: &[I], scalar: &S) -> Vec<(I, S)>
    where
        I: Eq + Hash + Clone + Send + Sync + 'static,
        S: Eq + Hash + Clone + Send + Sync + 'static,
    {
        let previous: HashSet<(I, S)> = self.cache.take(id).unwrap_or_default();
        let pairs: Vec<(I, S)> = inputs
            .iter()
            .map(|item| (item.clone(), scalar.clone()))
            .collect();
        let reused = pairs.iter().filter(|pair| previous.contains(*pair)).count();
        self.stats.record(id, pairs.len() - reused, reused);
        self.cache.store(id, pairs.iter().cloned().collect::<HashSet<_>>());
        pairs
    }

    /// Gathers `items` into one shared slice.
    ///
    /// An unchanged list hands back the slice from the previous run.
    pub fn collect<I>(&mut self, id: StageId, items: Vec<I>) -> Arc<[I]>
    where
        I: PartialEq + Clone + Send + Sync + 'static,
    {
        self.select(id, items, |list| Arc::from(list.as_slice()))
    }

    /// Ends the run and returns its counters.
    #[must_use]
    pub fn finish(self) -> RunStats {
        tracing::debug!(
            evaluated = self.stats.total_evaluated(),
            reused = self.stats.total_reused(),
            parallel = self.parallel,
            "graph run finished"
        );
        self.stats
    }
}

#[cfg_attr(
    not(feature = "parallel"),
    expect(unused_variables, reason = "only consulted when rayon is available")
)]
fn evaluate_items<I, O, F>(items: &[&I], f: &F, parallel: bool) -> Vec<O>
where
    I: Sync,
    O: Send,
    F: Fn(&I) -> O + Sync,
{
    #[cfg(feature = "parallel")]
    if parallel && items.len() > 1 {
        use rayon::prelude::*;
        return items.par_iter().map(|item| f(item)).collect();
    }
    items.iter().map(|item| f(item)).collect()
}
