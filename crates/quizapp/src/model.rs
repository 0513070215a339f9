//! # Data Model
//!
//! A [`Quiz`] is a question/answer pair and the only record quiz stores. It has no
//! identity of its own: a quiz's id is its zero-based position in the store, so
//! deleting a quiz shifts every later id down by one. [`IndexedQuiz`] pairs a quiz
//! with the id it had when a command looked at it, for display.
//!
//! Trimming is not enforced by the type. The repository trims both fields on
//! `add`/`update`, and answers are compared with [`answers_match`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub question: String,
    pub answer: String,
}

impl Quiz {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Builds a quiz with both fields trimmed.
    pub fn trimmed(question: &str, answer: &str) -> Self {
        Self::new(question.trim(), answer.trim())
    }

    /// Whether `given` is an acceptable answer to this quiz.
    pub fn is_answered_by(&self, given: &str) -> bool {
        answers_match(&self.answer, given)
    }

    pub fn has_empty_field(&self) -> bool {
        self.question.is_empty() || self.answer.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedQuiz {
    pub id: usize,
    pub quiz: Quiz,
}

impl IndexedQuiz {
    pub fn new(id: usize, quiz: Quiz) -> Self {
        Self { id, quiz }
    }
}

/// Case-insensitive comparison with surrounding whitespace ignored on both sides.
pub fn answers_match(expected: &str, given: &str) -> bool {
    expected.trim().to_lowercase() == given.trim().to_lowercase()
}

/// The quizzes written to a fresh backing file.
pub fn seed_quizzes() -> Vec<Quiz> {
    vec![
        Quiz::new("Capital of Italy", "Rome"),
        Quiz::new("Capital of France", "Paris"),
        Quiz::new("Capital of Spain", "Madrid"),
        Quiz::new("Capital of Portugal", "Lisbon"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_ignores_case_and_padding() {
        assert!(answers_match("Roma", "  roma "));
        assert!(answers_match("  Lisbon", "LISBON"));
    }

    #[test]
    fn match_is_not_a_prefix_check() {
        assert!(!answers_match("Roma", "Rom"));
        assert!(!answers_match("Roma", ""));
    }

    #[test]
    fn match_handles_non_ascii_case() {
        assert!(answers_match("París", "parís"));
        assert!(answers_match("ÉTÉ", "été"));
    }

    #[test]
    fn trimmed_strips_both_fields() {
        let quiz = Quiz::trimmed("  Capital of Peru ", "\tLima\n");
        assert_eq!(quiz, Quiz::new("Capital of Peru", "Lima"));
    }

    #[test]
    fn empty_field_detection() {
        assert!(Quiz::new("", "x").has_empty_field());
        assert!(Quiz::new("x", "").has_empty_field());
        assert!(!Quiz::new("x", "y").has_empty_field());
    }

    #[test]
    fn seed_set_has_four_quizzes() {
        let seed = seed_quizzes();
        assert_eq!(seed.len(), 4);
        assert!(seed.iter().all(|q| !q.has_empty_field()));
    }
}
