//! Gesture handling on top of the store and the merge engine.
//!
//! [`SlotPicker`] owns the selected intervals and the submission flag. The
//! calendar widget calls [`SlotPicker::on_slot_selected`] when the user drags
//! out a slot and [`SlotPicker::on_event_clicked`] when a rendered interval is
//! clicked; dialogs go through the injected [`Prompter`].

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::error::Result;
use crate::instant::{is_start_of_day, is_weekend, prompt_label};
use crate::interval::{ClockIds, IdSource, Interval, IntervalId};
use crate::merge::merge_candidate;
use crate::prompt::Prompter;
use crate::store::IntervalStore;
use crate::submit::{SubmissionPayload, Transport};

pub const WEEKEND_ALERT: &str = "Events cannot be scheduled on Sundays or Saturdays.";

/// What happened to a selected slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SlotOutcome {
    /// An endpoint fell on a Saturday or Sunday; the user was alerted.
    RejectedWeekend,
    /// The slot started exactly at midnight and was dropped without a prompt.
    RejectedMidnight,
    /// The user declined the confirmation.
    Declined,
    Committed {
        interval: Interval,
        absorbed: Vec<IntervalId>,
    },
}

pub struct SlotPicker<P, I = ClockIds> {
    store: IntervalStore,
    prompter: P,
    ids: I,
    submitting: bool,
}

impl<P: Prompter> SlotPicker<P, ClockIds> {
    pub fn new(prompter: P) -> Self {
        Self::with_ids(prompter, ClockIds::default())
    }
}

impl<P: Prompter, I: IdSource> SlotPicker<P, I> {
    pub fn with_ids(prompter: P, ids: I) -> Self {
        Self {
            store: IntervalStore::new(),
            prompter,
            ids,
            submitting: false,
        }
    }

    pub fn store(&self) -> &IntervalStore {
        &self.store
    }

    /// Intervals to render, in insertion order.
    pub fn intervals(&self) -> &[Interval] {
        self.store.list()
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    /// Handle a slot the user dragged out on the calendar.
    pub fn on_slot_selected(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> SlotOutcome {
        if is_weekend(&start) || is_weekend(&end) {
            self.prompter.alert(WEEKEND_ALERT);
            return SlotOutcome::RejectedWeekend;
        }
        if is_start_of_day(&start) {
            debug!(%start, "ignoring slot starting at midnight");
            return SlotOutcome::RejectedMidnight;
        }

        let question = format!(
            "Are you sure of this time?\n\nStart: {}\nEnd: {}",
            prompt_label(&start),
            prompt_label(&end)
        );
        if !self.prompter.confirm(&question) {
            return SlotOutcome::Declined;
        }

        let outcome = merge_candidate(self.store.list(), start, end);
        let absorbed = outcome.absorbed.clone();
        let id = self.ids.next_id();
        let interval = self.store.commit(outcome, id);
        SlotOutcome::Committed { interval, absorbed }
    }

    /// Handle a click on a rendered interval. Returns `true` if it was deleted.
    pub fn on_event_clicked(&mut self, id: IntervalId) -> bool {
        let Some(label) = self.store.get(id).map(Interval::label) else {
            return false;
        };
        if !self
            .prompter
            .confirm(&format!("Do you want to delete the event: {}?", label))
        {
            return false;
        }
        let removed = self.store.remove_by_id(id).is_some();
        if removed {
            info!(id, "interval deleted");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Whether a submission is in flight (drives the loading indicator).
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Snapshot the store as a wire payload and mark a submission in flight.
    ///
    /// Nothing stops a second submission from starting before the first
    /// finishes; whichever finishes first clears the flag.
    pub fn begin_submission(&mut self) -> SubmissionPayload {
        self.submitting = true;
        let payload = SubmissionPayload::from_intervals(self.store.list());
        debug!(?payload, "formatted events payload");
        payload
    }

    /// Record the transport result and clear the in-flight flag.
    ///
    /// Failures are logged only; the store is left as it is.
    pub fn finish_submission(&mut self, result: Result<String>) -> bool {
        self.submitting = false;
        match result {
            Ok(body) => {
                info!(response = %body, "events sent to backend");
                true
            }
            Err(e) => {
                error!(error = %e, "error sending events to backend");
                false
            }
        }
    }

    /// Send the current intervals through `transport`. Returns `true` on
    /// delivery.
    pub async fn submit<T: Transport>(&mut self, transport: &T) -> bool {
        let payload = self.begin_submission();
        let result = transport.post_events(&payload).await;
        self.finish_submission(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WeekSlotError;
    use crate::instant::weekly_instant;
    use crate::interval::SequentialIds;
    use crate::prompt::{AutoConfirm, ScriptedPrompter};
    use chrono::Weekday;

    fn at(day: Weekday, h: u32, m: u32) -> NaiveDateTime {
        weekly_instant(day, h, m).unwrap()
    }

    fn scripted(answers: &[bool]) -> SlotPicker<ScriptedPrompter, SequentialIds> {
        SlotPicker::with_ids(
            ScriptedPrompter::new(answers.iter().copied()),
            SequentialIds::default(),
        )
    }

    #[test]
    fn confirmation_text_names_both_endpoints() {
        let mut picker = scripted(&[false]);
        let out = picker.on_slot_selected(at(Weekday::Mon, 9, 30), at(Weekday::Mon, 11, 0));
        assert_eq!(out, SlotOutcome::Declined);
        assert_eq!(
            picker.prompter().confirmations,
            vec!["Are you sure of this time?\n\nStart: Monday, 9:30 AM\nEnd: Monday, 11:00 AM"]
        );
        assert!(picker.intervals().is_empty());
    }

    #[test]
    fn weekend_end_is_rejected_too() {
        let mut picker = scripted(&[true]);
        let out = picker.on_slot_selected(at(Weekday::Fri, 22, 0), at(Weekday::Sat, 1, 0));
        assert_eq!(out, SlotOutcome::RejectedWeekend);
        assert_eq!(picker.prompter().alerts, vec![WEEKEND_ALERT]);
        assert!(picker.prompter().confirmations.is_empty());
    }

    #[test]
    fn midnight_start_is_dropped_silently() {
        let mut picker = scripted(&[true]);
        let out = picker.on_slot_selected(at(Weekday::Tue, 0, 0), at(Weekday::Wed, 0, 0));
        assert_eq!(out, SlotOutcome::RejectedMidnight);
        assert!(picker.prompter().alerts.is_empty());
        assert!(picker.prompter().confirmations.is_empty());
    }

    #[test]
    fn declined_deletion_keeps_interval() {
        let mut picker = scripted(&[true, false, true]);
        picker.on_slot_selected(at(Weekday::Mon, 9, 0), at(Weekday::Mon, 10, 0));
        assert!(!picker.on_event_clicked(1));
        assert_eq!(picker.intervals().len(), 1);
        assert_eq!(
            picker.prompter().confirmations[1],
            "Do you want to delete the event: Monday, 9:00 AM - Monday, 10:00 AM?"
        );
        assert!(picker.on_event_clicked(1));
        assert!(picker.intervals().is_empty());
    }

    #[test]
    fn clicking_unknown_id_does_not_prompt() {
        let mut picker = scripted(&[true]);
        assert!(!picker.on_event_clicked(99));
        assert!(picker.prompter().confirmations.is_empty());
    }

    #[test]
    fn flag_cleared_on_failure() {
        let mut picker = SlotPicker::with_ids(AutoConfirm(true), SequentialIds::default());
        picker.on_slot_selected(at(Weekday::Mon, 9, 0), at(Weekday::Mon, 10, 0));
        let payload = picker.begin_submission();
        assert!(picker.is_submitting());
        assert_eq!(payload.events.len(), 1);
        let delivered =
            picker.finish_submission(Err(WeekSlotError::Transport("refused".to_string())));
        assert!(!delivered);
        assert!(!picker.is_submitting());
        assert_eq!(picker.intervals().len(), 1, "no rollback");
    }

    #[test]
    fn overlapping_submissions_share_one_flag() {
        let mut picker = SlotPicker::with_ids(AutoConfirm(true), SequentialIds::default());
        picker.begin_submission();
        picker.begin_submission();
        picker.finish_submission(Ok(String::new()));
        assert!(!picker.is_submitting());
    }
}
