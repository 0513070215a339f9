use super::backend::StorageBackend;
use crate::error::{QuizError, Result};
use crate::model::Quiz;
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since quiz is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    quizzes: RefCell<Option<Vec<Quiz>>>,
    simulate_write_error: Cell<bool>,
    simulate_read_error: Cell<bool>,
    saves: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `quizzes`, as if a backing file existed.
    pub fn with_quizzes(quizzes: Vec<Quiz>) -> Self {
        let backend = Self::new();
        *backend.quizzes.borrow_mut() = Some(quizzes);
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Enable read error simulation for testing error handling.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// What a reload would see.
    pub fn stored(&self) -> Option<Vec<Quiz>> {
        self.quizzes.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn load_quizzes(&self) -> Result<Option<Vec<Quiz>>> {
        if self.simulate_read_error.get() {
            return Err(QuizError::Store("Simulated read error".to_string()));
        }
        Ok(self.quizzes.borrow().clone())
    }

    fn save_quizzes(&self, quizzes: &[Quiz]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(QuizError::Store("Simulated write error".to_string()));
        }
        *self.quizzes.borrow_mut() = Some(quizzes.to_vec());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://quizzes".to_string()
    }
}
