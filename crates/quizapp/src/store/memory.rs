use super::mem_backend::MemBackend;
use super::quiz_store::QuizStore;
use crate::model::Quiz;

pub type InMemoryStore = QuizStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// An empty store. Unlike [`QuizStore::open`], nothing is seeded.
    pub fn new() -> Self {
        Self::with_quizzes(Vec::new())
    }

    pub fn with_quizzes(quizzes: Vec<Quiz>) -> Self {
        QuizStore::from_parts(MemBackend::with_quizzes(quizzes.clone()), quizzes)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` quizzes: "Question 1" / "answer 1", ...
        pub fn with_quizzes(mut self, count: usize) -> Self {
            use crate::store::QuizRepository;
            for i in 0..count {
                self.store
                    .add(&format!("Question {}", i + 1), &format!("answer {}", i + 1))
                    .unwrap();
            }
            self
        }

        pub fn with_quiz(mut self, question: &str, answer: &str) -> Self {
            use crate::store::QuizRepository;
            self.store.add(question, answer).unwrap();
            self
        }
    }
}
