use super::backend::StorageBackend;
use super::QuizRepository;
use crate::error::Result;
use crate::model::{seed_quizzes, Quiz};
use crate::validate::position;
use tracing::{debug, info};

/// The authoritative, ordered quiz sequence plus the backend it is flushed to.
///
/// Every mutation rewrites the whole backend before returning. There is no
/// buffering and no rollback: when the flush fails the in-memory sequence already
/// holds the change, and the error is fatal for the caller.
pub struct QuizStore<B: StorageBackend> {
    backend: B,
    quizzes: Vec<Quiz>,
}

impl<B: StorageBackend> QuizStore<B> {
    /// Wraps `backend` without reading it. Call [`QuizStore::load`] to pull in
    /// stored data, or use [`QuizStore::open`].
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            quizzes: Vec::new(),
        }
    }

    /// Wraps a backend whose contents are already known to be `quizzes`.
    pub(crate) fn from_parts(backend: B, quizzes: Vec<Quiz>) -> Self {
        Self { backend, quizzes }
    }

    /// Wraps `backend` and loads it, seeding it on first use.
    pub fn open(backend: B) -> Result<Self> {
        let mut store = Self::with_backend(backend);
        store.load()?;
        Ok(store)
    }

    /// Replaces the in-memory sequence with what the backend holds. A backend
    /// with no data yet gets the seed set, which is persisted right away.
    pub fn load(&mut self) -> Result<()> {
        match self.backend.load_quizzes()? {
            Some(quizzes) => {
                debug!(
                    location = %self.backend.location(),
                    count = quizzes.len(),
                    "loaded quizzes"
                );
                self.quizzes = quizzes;
            }
            None => {
                info!(location = %self.backend.location(), "no quiz data found, seeding");
                self.quizzes = seed_quizzes();
                self.save()?;
            }
        }
        Ok(())
    }

    /// Flushes the full sequence to the backend.
    pub fn save(&self) -> Result<()> {
        self.backend.save_quizzes(&self.quizzes)?;
        debug!(
            location = %self.backend.location(),
            count = self.quizzes.len(),
            "flushed quizzes"
        );
        Ok(())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: StorageBackend> QuizRepository for QuizStore<B> {
    fn get_all(&self) -> Vec<Quiz> {
        self.quizzes.clone()
    }

    fn get_by_index(&self, id: i64) -> Result<Quiz> {
        let pos = position(id, self.quizzes.len())?;
        Ok(self.quizzes[pos].clone())
    }

    fn add(&mut self, question: &str, answer: &str) -> Result<Quiz> {
        let quiz = Quiz::trimmed(question, answer);
        self.quizzes.push(quiz.clone());
        self.save()?;
        Ok(quiz)
    }

    fn update(&mut self, id: i64, question: &str, answer: &str) -> Result<Quiz> {
        let pos = position(id, self.quizzes.len())?;
        let quiz = Quiz::trimmed(question, answer);
        self.quizzes[pos] = quiz.clone();
        self.save()?;
        Ok(quiz)
    }

    fn delete_by_index(&mut self, id: i64) -> Result<Quiz> {
        let pos = position(id, self.quizzes.len())?;
        let removed = self.quizzes.remove(pos);
        self.save()?;
        Ok(removed)
    }

    fn count(&self) -> usize {
        self.quizzes.len()
    }
}
