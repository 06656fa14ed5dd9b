//! Yes/no confirmation and notification, supplied by the host.

use std::collections::VecDeque;

/// User-facing dialogs the picker needs.
pub trait Prompter {
    /// Ask a yes/no question. `true` means the user agreed.
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a message the user has to acknowledge.
    fn alert(&mut self, message: &str);
}

/// Answers every question the same way and drops alerts.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Prompter for AutoConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }

    fn alert(&mut self, _message: &str) {}
}

/// Replays pre-recorded answers and records every message it is shown.
///
/// Once the answers run out every further question is declined.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<bool>,
    pub confirmations: Vec<String>,
    pub alerts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn alert(&mut self, message: &str) {
        (**self).alert(message)
    }
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn alert(&mut self, message: &str) {
        (**self).alert(message)
    }
}
