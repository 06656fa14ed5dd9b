//! Coalesce a newly drawn interval with the ones already selected.
//!
//! The merge is pure: it reads the stored intervals and returns the final
//! bounds of the interval to insert plus the ids it absorbs. Applying the
//! outcome is [`IntervalStore::commit`](crate::store::IntervalStore::commit).
//!
//! Stored intervals are visited most recent first. For each one the rules below
//! are tried in order, and every rule reads the candidate bounds as widened by
//! earlier visits, so a single pass merges chains of overlapping intervals:
//!
//! 1. the stored interval contains the candidate: the candidate takes both of
//!    its bounds;
//! 2. the candidate contains the stored interval: bounds unchanged;
//! 3. the candidate ends strictly inside the stored interval: the candidate end
//!    moves out to the stored end;
//! 4. the stored interval ends strictly inside the candidate: the candidate
//!    start moves back to the stored start.
//!
//! A stored interval matching a rule is absorbed. Intervals that only touch the
//! candidate (`end == stored.start` or `start == stored.end`) match none of the
//! rules and are kept alongside it.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::interval::{Interval, IntervalId};

/// Result of merging one candidate into the stored set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Ids of stored intervals swallowed by the merge, in visit order.
    pub absorbed: Vec<IntervalId>,
}

/// Which rule absorbed a stored interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Absorption {
    ContainsCandidate,
    InsideCandidate,
    CandidateEndsInside,
    EndsInsideCandidate,
}

fn classify(old: &Interval, start: NaiveDateTime, end: NaiveDateTime) -> Option<Absorption> {
    if old.start <= start && old.end >= end {
        Some(Absorption::ContainsCandidate)
    } else if start <= old.start && end >= old.end {
        Some(Absorption::InsideCandidate)
    } else if old.start < end && end < old.end {
        Some(Absorption::CandidateEndsInside)
    } else if start < old.end && old.end < end {
        Some(Absorption::EndsInsideCandidate)
    } else {
        None
    }
}

/// Merge the candidate `(start, end)` into `existing`.
///
/// `existing` is in insertion order; it is walked from the back.
pub fn merge_candidate(
    existing: &[Interval],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> MergeOutcome {
    let mut start = start;
    let mut end = end;
    let mut absorbed = Vec::new();

    for old in existing.iter().rev() {
        let Some(rule) = classify(old, start, end) else {
            continue;
        };
        match rule {
            Absorption::ContainsCandidate => {
                start = old.start;
                end = old.end;
            }
            Absorption::InsideCandidate => {}
            Absorption::CandidateEndsInside => end = old.end,
            Absorption::EndsInsideCandidate => start = old.start,
        }
        debug!(id = old.id, ?rule, "candidate absorbs stored interval");
        absorbed.push(old.id);
    }

    MergeOutcome {
        start,
        end,
        absorbed,
    }
}
