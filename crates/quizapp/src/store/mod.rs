//! # Storage Layer
//!
//! This module owns the quiz sequence and its persistence. The [`QuizRepository`]
//! trait is the only way the rest of the library reads or changes quizzes.
//!
//! ## Store Architecture
//!
//! Storage is split in two:
//! 1. **[`quiz_store::QuizStore`]**: The in-memory, ordered `Vec<Quiz>` and the
//!    repository rules (positional ids, trimming, flush after every mutation).
//! 2. **[`backend::StorageBackend`]**: Raw I/O. Loads and saves the whole sequence.
//!
//! ## Persistence Contract
//!
//! - **Load once**: The backing file is read when the store is opened. A missing file
//!   is seeded with four sample quizzes and written immediately.
//! - **Flush on mutation**: `add`, `update` and `delete_by_index` rewrite the full
//!   file before returning. Writes go to a temporary sibling and are renamed into
//!   place, so a torn file is never the final state.
//! - **Failures are fatal**: Read, parse and write errors surface as persistence
//!   errors ([`crate::error::QuizError::is_fatal`]). Callers do not recover from them.
//!
//! ## Ids
//!
//! A quiz's id is its position in the sequence. Deleting id `k` moves every later
//! quiz down by one. This is observable behaviour, not an accident of the layout.
//!
//! ## Copies
//!
//! Reads return owned clones. Mutating a returned `Quiz` never touches the store.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production store over a JSON file.
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! quizzes.json            # [{"question": "...", "answer": "..."}, ...]
//! ```

use crate::error::Result;
use crate::model::Quiz;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod quiz_store;

/// CRUD access to the quiz sequence.
///
/// Ids are `i64` because they arrive straight from [`crate::validate::validate_id`];
/// anything outside `0..count()` is [`crate::error::QuizError::QuizNotFound`].
pub trait QuizRepository {
    /// All quizzes in insertion order.
    fn get_all(&self) -> Vec<Quiz>;

    /// The quiz at `id`.
    fn get_by_index(&self, id: i64) -> Result<Quiz>;

    /// Append a quiz (fields trimmed) and flush. Returns the stored quiz.
    fn add(&mut self, question: &str, answer: &str) -> Result<Quiz>;

    /// Replace the quiz at `id` (fields trimmed) and flush. Returns the stored quiz.
    fn update(&mut self, id: i64, question: &str, answer: &str) -> Result<Quiz>;

    /// Remove the quiz at `id` and flush. Later ids shift down by one.
    fn delete_by_index(&mut self, id: i64) -> Result<Quiz>;

    fn count(&self) -> usize;
}
