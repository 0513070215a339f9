use crate::commands::CmdMessage;
use crate::error::{QuizError, Result};
use crate::prompt::Prompter;
use std::collections::VecDeque;

/// A [`Prompter`] that answers from a fixed script and records everything the
/// flow said and asked. Running out of answers reports closed input.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub defaults: Vec<String>,
    pub said: Vec<CmdMessage>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }

    /// Contents of everything said, in order.
    pub fn said_lines(&self) -> Vec<&str> {
        self.said.iter().map(|m| m.content.as_str()).collect()
    }
}

impl Prompter for ScriptedPrompter {
    fn say(&mut self, message: CmdMessage) {
        self.said.push(message);
    }

    fn read_line(&mut self, prompt: &str, initial: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.defaults.push(initial.to_string());
        self.answers.pop_front().ok_or(QuizError::InputClosed)
    }
}
