use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::QuizRepository;
use crate::validate::validate_id;
use tracing::debug;

pub fn run<R: QuizRepository>(repo: &mut R, raw_id: Option<&str>) -> Result<CmdResult> {
    let id = validate_id(raw_id)?;
    let removed = repo.delete_by_index(id)?;
    debug!(id, remaining = repo.count(), "quiz deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted quiz {}: {}",
        id, removed.question
    )));
    // delete_by_index only succeeds for ids in 0..count
    Ok(result.with_affected_quiz(id as usize, removed))
}
