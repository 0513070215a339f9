use crate::commands::{CmdMessage, CmdResult, ANSWER_PROMPT, QUESTION_PROMPT};
use crate::error::Result;
use crate::prompt::Prompter;
use crate::store::QuizRepository;
use tracing::debug;

use super::helpers::resolve_quiz;

/// Re-asks question and answer, offering the current values as editable defaults,
/// then replaces the quiz in place. The id does not change.
pub fn run<R: QuizRepository, P: Prompter>(
    repo: &mut R,
    prompter: &mut P,
    raw_id: Option<&str>,
) -> Result<CmdResult> {
    let current = resolve_quiz(repo, raw_id)?;

    let question = prompter.ask_with_default(QUESTION_PROMPT, &current.quiz.question)?;
    let answer = prompter.ask_with_default(ANSWER_PROMPT, &current.quiz.answer)?;

    let quiz = repo.update(current.id as i64, &question, &answer)?;
    debug!(id = current.id, "quiz updated");

    let mut result = CmdResult::default();
    if quiz.has_empty_field() {
        result.add_message(CmdMessage::warning(
            "The quiz has an empty question or answer.",
        ));
    }
    result.add_message(CmdMessage::success(format!(
        "Quiz {} changed to: {} => {}",
        current.id, quiz.question, quiz.answer
    )));
    Ok(result.with_affected_quiz(current.id, quiz))
}
