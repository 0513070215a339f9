use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::IndexedQuiz;
use crate::store::QuizRepository;

pub fn run<R: QuizRepository>(repo: &R) -> Result<CmdResult> {
    let quizzes: Vec<IndexedQuiz> = repo
        .get_all()
        .into_iter()
        .enumerate()
        .map(|(id, quiz)| IndexedQuiz::new(id, quiz))
        .collect();

    let mut result = CmdResult::default();
    if quizzes.is_empty() {
        result.add_message(CmdMessage::info("No quizzes yet. Use `add` to create one."));
    }
    Ok(result.with_listed_quizzes(quizzes))
}
