use crate::error::Result;
use crate::model::Quiz;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while QuizStore handles the "what" (seeding, ordering, flushing).
pub trait StorageBackend {
    /// Read the full quiz sequence.
    /// Returns Ok(None) if nothing has been stored yet (no backing file).
    /// Returns Err on actual I/O or parse errors.
    fn load_quizzes(&self) -> Result<Option<Vec<Quiz>>>;

    /// Overwrite the stored sequence with `quizzes`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_quizzes(&self, quizzes: &[Quiz]) -> Result<()>;

    /// Human readable location of the data, for logs and messages.
    fn location(&self) -> String;
}
