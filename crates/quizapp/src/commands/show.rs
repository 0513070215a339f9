use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::QuizRepository;

use super::helpers::resolve_quiz;

pub fn run<R: QuizRepository>(repo: &R, raw_id: Option<&str>) -> Result<CmdResult> {
    let found = resolve_quiz(repo, raw_id)?;
    Ok(CmdResult::default().with_listed_quizzes(vec![found]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuizError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn shows_question_and_answer() {
        let fixture = StoreFixture::new().with_quiz("Capital of Italy", "Rome");
        let result = run(&fixture.store, Some("0")).unwrap();
        assert_eq!(result.listed_quizzes.len(), 1);
        assert_eq!(result.listed_quizzes[0].id, 0);
        assert_eq!(result.listed_quizzes[0].quiz.answer, "Rome");
    }

    #[test]
    fn unknown_id_reports_not_found() {
        let fixture = StoreFixture::new().with_quizzes(2);
        let err = run(&fixture.store, Some("5")).unwrap_err();
        assert!(matches!(err, QuizError::QuizNotFound(5)));
        assert_eq!(err.to_string(), "No quiz associated with id=5.");
    }

    #[test]
    fn oversized_id_reports_not_found() {
        let fixture = StoreFixture::new().with_quizzes(2);
        let err = run(&fixture.store, Some("99999999999999999999999")).unwrap_err();
        assert!(matches!(err, QuizError::QuizNotFound(i64::MAX)));
    }

    #[test]
    fn missing_id() {
        let fixture = StoreFixture::new().with_quizzes(2);
        assert!(matches!(
            run(&fixture.store, None),
            Err(QuizError::MissingParameter)
        ));
    }
}
