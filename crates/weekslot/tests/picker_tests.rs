//! Tests for the slot picker: gesture validation, confirmation, deletion.

use chrono::{NaiveDateTime, Weekday};
use weekslot::picker::WEEKEND_ALERT;
use weekslot::{
    weekly_instant, AutoConfirm, Interval, ScriptedPrompter, SequentialIds, SlotOutcome,
    SlotPicker,
};

fn at(day: Weekday, hour: u32, minute: u32) -> NaiveDateTime {
    weekly_instant(day, hour, minute).unwrap()
}

fn picker_answering(answers: &[bool]) -> SlotPicker<ScriptedPrompter, SequentialIds> {
    SlotPicker::with_ids(
        ScriptedPrompter::new(answers.iter().copied()),
        SequentialIds::default(),
    )
}

#[test]
fn saturday_slot_is_rejected_with_alert() {
    let mut picker = picker_answering(&[true]);

    let out = picker.on_slot_selected(at(Weekday::Sat, 10, 0), at(Weekday::Sat, 11, 0));

    assert_eq!(out, SlotOutcome::RejectedWeekend);
    assert!(picker.intervals().is_empty());
    assert_eq!(picker.prompter().alerts, vec![WEEKEND_ALERT]);
}

#[test]
fn sunday_slot_is_rejected_with_alert() {
    let mut picker = picker_answering(&[true]);

    let out = picker.on_slot_selected(at(Weekday::Sun, 10, 0), at(Weekday::Sun, 11, 0));

    assert_eq!(out, SlotOutcome::RejectedWeekend);
    assert!(picker.intervals().is_empty());
}

#[test]
fn confirmed_slot_merges_with_existing() {
    let mut picker = picker_answering(&[true, true]);

    picker.on_slot_selected(at(Weekday::Mon, 9, 0), at(Weekday::Mon, 10, 0));
    let out = picker.on_slot_selected(at(Weekday::Mon, 9, 30), at(Weekday::Mon, 11, 0));

    assert_eq!(
        out,
        SlotOutcome::Committed {
            interval: Interval::new(2, at(Weekday::Mon, 9, 0), at(Weekday::Mon, 11, 0)),
            absorbed: vec![1],
        }
    );
    assert_eq!(picker.intervals().len(), 1);
}

#[test]
fn declined_slot_changes_nothing() {
    let mut picker = picker_answering(&[true, false]);

    picker.on_slot_selected(at(Weekday::Wed, 13, 0), at(Weekday::Wed, 14, 0));
    let before = picker.store().clone();
    let out = picker.on_slot_selected(at(Weekday::Wed, 13, 30), at(Weekday::Wed, 15, 0));

    assert_eq!(out, SlotOutcome::Declined);
    assert_eq!(picker.store(), &before);
}

#[test]
fn delete_then_delete_again_is_noop() {
    let mut picker = SlotPicker::with_ids(AutoConfirm(true), SequentialIds::starting_at(100));

    picker.on_slot_selected(at(Weekday::Thu, 9, 0), at(Weekday::Thu, 12, 0));
    assert!(picker.on_event_clicked(100));
    assert!(!picker.on_event_clicked(100));
    assert!(picker.intervals().is_empty());
}

#[test]
fn clock_ids_stay_unique_across_fast_gestures() {
    let mut picker = SlotPicker::new(AutoConfirm(true));
    for day in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri] {
        picker.on_slot_selected(at(day, 9, 0), at(day, 10, 0));
    }
    let mut ids: Vec<_> = picker.intervals().iter().map(|iv| iv.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
fn outcome_serializes_with_status_tag() {
    let mut picker = picker_answering(&[true]);
    let out = picker.on_slot_selected(at(Weekday::Fri, 16, 0), at(Weekday::Fri, 17, 0));

    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["status"], "committed");
    assert_eq!(json["interval"]["start"], "2023-01-06T16:00:00");
    assert_eq!(json["absorbed"], serde_json::json!([]));

    let json = serde_json::to_value(SlotOutcome::RejectedMidnight).unwrap();
    assert_eq!(json, serde_json::json!({"status": "rejected_midnight"}));
}
