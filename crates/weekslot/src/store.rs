//! In-memory collection of selected intervals, kept in insertion order.

use tracing::info;

use crate::interval::{Interval, IntervalId};
use crate::merge::MergeOutcome;

/// Ordered set of pairwise non-overlapping intervals.
///
/// The order is insertion order. It has no meaning beyond deciding which
/// interval the merge visits first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalStore {
    intervals: Vec<Interval>,
}

impl IntervalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    /// Remove the interval with `id`. Absent ids are ignored.
    pub fn remove_by_id(&mut self, id: IntervalId) -> Option<Interval> {
        let pos = self.intervals.iter().position(|iv| iv.id == id)?;
        Some(self.intervals.remove(pos))
    }

    pub fn list(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn get(&self, id: IntervalId) -> Option<&Interval> {
        self.intervals.iter().find(|iv| iv.id == id)
    }

    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Apply a merge: drop every absorbed interval, then append the merged one
    /// under `id`. Returns a copy of the inserted interval.
    pub fn commit(&mut self, outcome: MergeOutcome, id: IntervalId) -> Interval {
        if !outcome.absorbed.is_empty() {
            self.intervals
                .retain(|iv| !outcome.absorbed.contains(&iv.id));
        }
        let merged = Interval::new(id, outcome.start, outcome.end);
        info!(
            id,
            start = %merged.start,
            end = %merged.end,
            absorbed = outcome.absorbed.len(),
            "interval committed"
        );
        self.intervals.push(merged.clone());
        merged
    }
}
