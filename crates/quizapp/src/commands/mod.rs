//! # Command Layer
//!
//! This module contains the **session engine**: one submodule per user command,
//! each a plain function over a [`QuizRepository`](crate::store::QuizRepository)
//! and, where input is needed, a [`Prompter`](crate::prompt::Prompter).
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Validate raw ids ([`crate::validate::validate_id`]) and look quizzes up
//! - Drive the prompter for interactive flows (add, edit, test, play)
//! - Return structured [`CmdResult`] values with affected quizzes and messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: No stdout, stderr or colors. Messages carry a level; the UI
//!   decides how that looks.
//! - **Error reporting**: Validation and lookup errors are returned, not printed.
//!   The dispatcher reports them and moves on to the next command.
//! - **Retries**: A failed step ends the flow.
//!
//! ## Command Modules
//!
//! - [`list`]: All quizzes with their ids
//! - [`show`]: One quiz, question and answer
//! - [`add`]: Ask for a question and answer, append
//! - [`delete`]: Remove by id (later ids shift)
//! - [`edit`]: Ask again with the current values as defaults, replace
//! - [`test`]: Ask one quiz, report correct/incorrect
//! - [`play`]: Ask every quiz in random order until the first miss
//! - [`helpers`]: Shared lookup

use crate::model::{IndexedQuiz, Quiz};
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod play;
pub mod show;
pub mod test;

pub use play::{PlayOutcome, PlaySummary};
pub use test::Verdict;

/// Prompt used whenever a flow asks for an answer.
pub const ANSWER_PROMPT: &str = "Enter the answer: ";
/// Prompt used whenever a flow asks for a question.
pub const QUESTION_PROMPT: &str = "Enter a question: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
    /// Rendered large and emphasized (verdicts, final scores).
    pub big: bool,
}

impl CmdMessage {
    fn with_level(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
            big: false,
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::with_level(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::with_level(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::with_level(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::with_level(MessageLevel::Error, content)
    }

    pub fn big(mut self) -> Self {
        self.big = true;
        self
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Quizzes to display (list, show)
    pub listed_quizzes: Vec<IndexedQuiz>,
    /// Quizzes created, changed or removed by the command
    pub affected_quizzes: Vec<IndexedQuiz>,
    /// Outcome of a single-quiz test
    pub verdict: Option<Verdict>,
    /// Outcome of a play session
    pub play: Option<PlaySummary>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_quizzes(mut self, quizzes: Vec<IndexedQuiz>) -> Self {
        self.listed_quizzes = quizzes;
        self
    }

    pub fn with_affected_quiz(mut self, id: usize, quiz: Quiz) -> Self {
        self.affected_quizzes.push(IndexedQuiz::new(id, quiz));
        self
    }
}
