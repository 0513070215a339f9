//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for quiz operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the store**: the quiz sequence is reachable only through it
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or formatting
//! - **Error recovery**: Validation errors come back as `Err`; the UI reports them
//!
//! ## Raw Ids
//!
//! Methods that target one quiz take the id exactly as the user typed it, as an
//! `Option<&str>`. A missing id is not a parse error at this layer: it reaches
//! the validator and comes back as `MissingParameter`.
//!
//! ## Generic Over QuizRepository
//!
//! `QuizApi<R: QuizRepository>` is generic over the store:
//! - Production: `QuizApi<FileStore>`
//! - Testing: `QuizApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::prompt::Prompter;
use crate::store::QuizRepository;
use rand::Rng;

/// The main API facade for quiz operations.
pub struct QuizApi<R: QuizRepository> {
    store: R,
}

impl<R: QuizRepository> QuizApi<R> {
    pub fn new(store: R) -> Self {
        Self { store }
    }

    pub fn list_quizzes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn show_quiz(&self, raw_id: Option<&str>) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, raw_id)
    }

    pub fn add_quiz<P: Prompter>(&mut self, prompter: &mut P) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, prompter)
    }

    pub fn delete_quiz(&mut self, raw_id: Option<&str>) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, raw_id)
    }

    pub fn edit_quiz<P: Prompter>(
        &mut self,
        prompter: &mut P,
        raw_id: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, prompter, raw_id)
    }

    pub fn test_quiz<P: Prompter>(
        &self,
        prompter: &mut P,
        raw_id: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::test::run(&self.store, prompter, raw_id)
    }

    /// Plays through every quiz using the thread-local random generator.
    pub fn play<P: Prompter>(&self, prompter: &mut P) -> Result<commands::CmdResult> {
        self.play_with_rng(prompter, rand::thread_rng())
    }

    pub fn play_with_rng<P: Prompter, G: Rng>(
        &self,
        prompter: &mut P,
        rng: G,
    ) -> Result<commands::CmdResult> {
        commands::play::run(&self.store, prompter, rng)
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn store(&self) -> &R {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, PlayOutcome, PlaySummary, Verdict};
