//! Selected availability blocks and the ids that key them.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::instant::prompt_label;

/// Uniqueness key of a stored interval: milliseconds since the Unix epoch at
/// creation time.
pub type IntervalId = i64;

/// One selected availability block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub id: IntervalId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn new(id: IntervalId, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { id, start, end }
    }

    /// Strict overlap; intervals that only touch at a boundary do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// `Monday, 9:00 AM - Monday, 10:00 AM`
    pub fn label(&self) -> String {
        format!("{} - {}", prompt_label(&self.start), prompt_label(&self.end))
    }
}

/// Source of fresh interval ids.
pub trait IdSource {
    fn next_id(&mut self) -> IntervalId;
}

impl<S: IdSource + ?Sized> IdSource for Box<S> {
    fn next_id(&mut self) -> IntervalId {
        (**self).next_id()
    }
}

/// Ids taken from the wall clock in milliseconds.
///
/// Two ids requested within the same millisecond would collide, so each id is
/// at least one greater than the previous one.
#[derive(Debug, Default)]
pub struct ClockIds {
    last: Option<IntervalId>,
}

impl IdSource for ClockIds {
    fn next_id(&mut self) -> IntervalId {
        let now = Utc::now().timestamp_millis();
        let id = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(id);
        id
    }
}

/// Deterministic ids counting up from a starting value. Used by tests and
/// replayed gesture scripts.
#[derive(Debug)]
pub struct SequentialIds {
    next: IntervalId,
}

impl SequentialIds {
    pub fn starting_at(first: IntervalId) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> IntervalId {
        let id = self.next;
        self.next += 1;
        id
    }
}
