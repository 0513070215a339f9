use crate::commands::{CmdMessage, CmdResult, ANSWER_PROMPT};
use crate::error::Result;
use crate::model::Quiz;
use crate::prompt::Prompter;
use crate::store::QuizRepository;
use serde::Serialize;

use super::helpers::resolve_quiz;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn judge(quiz: &Quiz, given: &str) -> Self {
        if quiz.is_answered_by(given) {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }
}

/// Asks a single quiz once. There is no retry.
pub fn run<R: QuizRepository, P: Prompter>(
    repo: &R,
    prompter: &mut P,
    raw_id: Option<&str>,
) -> Result<CmdResult> {
    let target = resolve_quiz(repo, raw_id)?;

    prompter.say(CmdMessage::info(format!("{}? ", target.quiz.question)));
    let given = prompter.ask(ANSWER_PROMPT)?;
    let verdict = Verdict::judge(&target.quiz, &given);

    let mut result = CmdResult::default();
    match verdict {
        Verdict::Correct => {
            result.add_message(CmdMessage::info("Your answer is correct."));
            result.add_message(CmdMessage::success("Correct").big());
        }
        Verdict::Incorrect => {
            result.add_message(CmdMessage::info("Your answer is incorrect."));
            result.add_message(CmdMessage::error("Incorrect").big());
        }
    }
    result.verdict = Some(verdict);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuizError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::test_utils::ScriptedPrompter;

    #[test]
    fn correct_ignoring_case_and_whitespace() {
        let fixture = StoreFixture::new().with_quiz("Capital of Italy", "Roma");
        let mut prompter = ScriptedPrompter::new(["  roma "]);

        let result = run(&fixture.store, &mut prompter, Some("0")).unwrap();

        assert_eq!(result.verdict, Some(Verdict::Correct));
        assert_eq!(prompter.said_lines(), vec!["Capital of Italy? "]);
        assert!(result.messages.iter().any(|m| m.big && m.content == "Correct"));
    }

    #[test]
    fn incorrect_answer() {
        let fixture = StoreFixture::new().with_quiz("Capital of Italy", "Roma");
        let mut prompter = ScriptedPrompter::new(["Milan"]);

        let result = run(&fixture.store, &mut prompter, Some("0")).unwrap();

        assert_eq!(result.verdict, Some(Verdict::Incorrect));
        assert_eq!(prompter.prompts.len(), 1);
    }

    #[test]
    fn validation_failure_asks_nothing() {
        let fixture = StoreFixture::new().with_quizzes(1);
        let mut prompter = ScriptedPrompter::new(["x"]);

        let err = run(&fixture.store, &mut prompter, Some("abc")).unwrap_err();

        assert!(matches!(err, QuizError::NotANumber(_)));
        assert!(prompter.said.is_empty());
        assert_eq!(prompter.remaining_answers(), 1);
    }

    #[test]
    fn judge_is_symmetric_on_padding() {
        let quiz = Quiz::new("Capital of France", " Paris ");
        assert_eq!(Verdict::judge(&quiz, "paris"), Verdict::Correct);
        assert_eq!(Verdict::judge(&quiz, "Pari"), Verdict::Incorrect);
    }
}
