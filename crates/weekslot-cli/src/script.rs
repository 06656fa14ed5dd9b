//! Recorded gesture scripts and the terminal prompter.
//!
//! A script is a JSON array of gestures:
//!
//! ```json
//! [
//!   {"select": {"start": "2023-01-02T09:00:00", "end": "2023-01-02T10:00:00"}},
//!   {"click": 0}
//! ]
//! ```
//!
//! `click` takes the position of an interval in the current list, since ids
//! are not known until the script runs.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;
use weekslot::{parse_instant, IdSource, Prompter, SlotOutcome, SlotPicker};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    Select { start: String, end: String },
    Click(usize),
}

pub fn parse_script(json: &str) -> Result<Vec<Gesture>> {
    serde_json::from_str(json).context("Failed to parse gesture script")
}

/// Tally of what a replay did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub committed: usize,
    pub rejected: usize,
    pub declined: usize,
    pub deleted: usize,
}

/// Drive every gesture through `picker` in order.
pub fn replay<P: Prompter, I: IdSource>(
    picker: &mut SlotPicker<P, I>,
    gestures: &[Gesture],
) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    for (step, gesture) in gestures.iter().enumerate() {
        match gesture {
            Gesture::Select { start, end } => {
                let start = parse_instant(start)
                    .with_context(|| format!("gesture {}: bad start", step))?;
                let end =
                    parse_instant(end).with_context(|| format!("gesture {}: bad end", step))?;
                match picker.on_slot_selected(start, end) {
                    SlotOutcome::Committed { .. } => summary.committed += 1,
                    SlotOutcome::Declined => summary.declined += 1,
                    SlotOutcome::RejectedWeekend | SlotOutcome::RejectedMidnight => {
                        summary.rejected += 1
                    }
                }
            }
            Gesture::Click(index) => {
                let Some(id) = picker.intervals().get(*index).map(|iv| iv.id) else {
                    warn!(step, index, "click on a position with no interval");
                    continue;
                };
                if picker.on_event_clicked(id) {
                    summary.deleted += 1;
                }
            }
        }
    }
    Ok(summary)
}

/// Asks on stderr and reads `y`/`yes` from stdin; anything else is a no.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        let mut stderr = io::stderr();
        let _ = write!(stderr, "{}\n[y/N] ", message);
        let _ = stderr.flush();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}
