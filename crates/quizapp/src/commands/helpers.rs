use crate::error::Result;
use crate::model::IndexedQuiz;
use crate::store::QuizRepository;
use crate::validate::validate_id;

/// Validates `raw` and fetches the quiz it names.
///
/// Fails with `MissingParameter` / `NotANumber` from validation, or `QuizNotFound`
/// when nothing lives at that id.
pub fn resolve_quiz<R: QuizRepository>(repo: &R, raw: Option<&str>) -> Result<IndexedQuiz> {
    let id = validate_id(raw)?;
    let quiz = repo.get_by_index(id)?;
    // get_by_index only succeeds for ids in 0..count
    Ok(IndexedQuiz::new(id as usize, quiz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuizError;
    use crate::model::Quiz;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn resolves_existing_quiz() {
        let fixture = StoreFixture::new().with_quizzes(3);
        let found = resolve_quiz(&fixture.store, Some("2")).unwrap();
        assert_eq!(found.id, 2);
        assert_eq!(found.quiz, Quiz::new("Question 3", "answer 3"));
    }

    #[test]
    fn propagates_each_error_kind() {
        let fixture = StoreFixture::new().with_quizzes(1);
        assert!(matches!(
            resolve_quiz(&fixture.store, None),
            Err(QuizError::MissingParameter)
        ));
        assert!(matches!(
            resolve_quiz(&fixture.store, Some("one")),
            Err(QuizError::NotANumber(_))
        ));
        assert!(matches!(
            resolve_quiz(&fixture.store, Some("1")),
            Err(QuizError::QuizNotFound(1))
        ));
    }
}
