use crate::commands::{CmdMessage, CmdResult, ANSWER_PROMPT, QUESTION_PROMPT};
use crate::error::Result;
use crate::prompt::Prompter;
use crate::store::QuizRepository;
use tracing::debug;

pub fn run<R: QuizRepository, P: Prompter>(repo: &mut R, prompter: &mut P) -> Result<CmdResult> {
    let question = prompter.ask(QUESTION_PROMPT)?;
    let answer = prompter.ask(ANSWER_PROMPT)?;

    let quiz = repo.add(&question, &answer)?;
    let id = repo.count() - 1;
    debug!(id, "quiz added");

    let mut result = CmdResult::default();
    if quiz.has_empty_field() {
        result.add_message(CmdMessage::warning(
            "The quiz has an empty question or answer.",
        ));
    }
    result.add_message(CmdMessage::success(format!(
        "Added: {} => {}",
        quiz.question, quiz.answer
    )));
    Ok(result.with_affected_quiz(id, quiz))
}
