//! Blocking user dialogs (yes/no confirmation, acknowledgement notices) behind
//! a capability trait so transitions can be driven by scripted answers.

use std::collections::VecDeque;

use tracing::debug;

pub trait UserPrompt {
    /// Asks a yes/no question. `true` means the user agreed.
    fn confirm(&mut self, message: &str) -> bool;
    /// Shows a notice the user has to acknowledge.
    fn notify(&mut self, message: &str);
}

impl<P: UserPrompt + ?Sized> UserPrompt for Box<P> {
    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn notify(&mut self, message: &str) {
        (**self).notify(message)
    }
}

/// Plays back queued answers and records every dialog shown.
///
/// Once the queue is exhausted every confirmation is declined.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<bool>,
    questions: Vec<String>,
    notices: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.questions.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Non-interactive prompt: answers every confirmation the same way and
/// prints notices to stdout.
#[derive(Debug, Clone, Copy)]
pub struct AutoPrompt {
    answer: bool,
}

impl AutoPrompt {
    pub fn new(answer: bool) -> Self {
        Self { answer }
    }
}

impl UserPrompt for AutoPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        debug!(question = message, answer = self.answer, "auto-answered confirmation");
        println!("{} [{}]", message, if self.answer { "yes" } else { "no" });
        self.answer
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_prompt_replays_answers_in_order() {
        let mut prompt = ScriptedPrompt::with_answers([true, false]);
        assert!(prompt.confirm("first?"));
        assert!(!prompt.confirm("second?"));
        assert_eq!(prompt.questions(), ["first?", "second?"]);
    }

    #[test]
    fn scripted_prompt_declines_when_exhausted() {
        let mut prompt = ScriptedPrompt::new();
        assert!(!prompt.confirm("anything?"));
    }

    #[test]
    fn notices_are_recorded() {
        let mut prompt = ScriptedPrompt::new();
        prompt.notify("done");
        assert_eq!(prompt.notices(), ["done"]);
    }
}
