//! # Play
//!
//! A play session asks every quiz once, in random order, and stops at the first
//! wrong answer.
//!
//! ## State Machine
//!
//! ```text
//!              ┌──────────── correct: score += 1 ─────────────┐
//!              ▼                                              │
//!        ┌───────────┐  pick random quiz, remove it   ┌────────────────┐
//! start ─▶ Selecting ├───────────────────────────────▶│ AwaitingAnswer │
//!        └─────┬─────┘                                └───────┬────────┘
//!              │ nothing remaining                            │ wrong
//!              ▼                                              ▼
//!       Finished(Won)                                  Finished(Lost)
//! ```
//!
//! [`PlaySession`] holds that machine with no I/O; [`run`] drives it with a
//! [`Prompter`]. The session snapshots the quizzes when it starts, and a quiz is
//! removed from `remaining` as soon as it is picked, so nothing is asked twice and
//! the session always ends.

use crate::commands::{CmdMessage, CmdResult, Verdict, ANSWER_PROMPT};
use crate::error::{QuizError, Result};
use crate::model::Quiz;
use crate::prompt::Prompter;
use crate::store::QuizRepository;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayOutcome {
    /// Every quiz was answered correctly.
    Won,
    /// A wrong answer ended the session.
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayState {
    Selecting,
    AwaitingAnswer(Quiz),
    Finished(PlayOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaySummary {
    pub outcome: PlayOutcome,
    pub score: usize,
    /// Questions answered, right or wrong.
    pub answered: usize,
}

pub struct PlaySession<G: Rng> {
    remaining: Vec<Quiz>,
    score: usize,
    answered: usize,
    state: PlayState,
    rng: G,
}

impl<G: Rng> PlaySession<G> {
    pub fn new(quizzes: Vec<Quiz>, rng: G) -> Self {
        Self {
            remaining: quizzes,
            score: 0,
            answered: 0,
            state: PlayState::Selecting,
            rng,
        }
    }

    pub fn state(&self) -> &PlayState {
        &self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Picks the next quiz uniformly at random and removes it from the pool.
    ///
    /// Returns `None` once the session is over: either the pool just ran dry
    /// (the session is won) or it had already finished. Calling this while an
    /// answer is pending is an error.
    pub fn select(&mut self) -> Result<Option<Quiz>> {
        match self.state {
            PlayState::Selecting => {}
            PlayState::Finished(_) => return Ok(None),
            PlayState::AwaitingAnswer(_) => {
                return Err(QuizError::Session(
                    "cannot select a new quiz while an answer is pending".to_string(),
                ))
            }
        }

        if self.remaining.is_empty() {
            self.state = PlayState::Finished(PlayOutcome::Won);
            return Ok(None);
        }

        let pick = self.rng.gen_range(0..self.remaining.len());
        let quiz = self.remaining.remove(pick);
        self.state = PlayState::AwaitingAnswer(quiz.clone());
        Ok(Some(quiz))
    }

    /// Judges `given` against the pending quiz.
    pub fn answer(&mut self, given: &str) -> Result<Verdict> {
        let PlayState::AwaitingAnswer(quiz) = &self.state else {
            return Err(QuizError::Session(
                "no question is awaiting an answer".to_string(),
            ));
        };

        let verdict = Verdict::judge(quiz, given);
        self.answered += 1;
        self.state = match verdict {
            Verdict::Correct => {
                self.score += 1;
                PlayState::Selecting
            }
            Verdict::Incorrect => PlayState::Finished(PlayOutcome::Lost),
        };
        Ok(verdict)
    }

    /// The final tally, once the session has finished.
    pub fn summary(&self) -> Option<PlaySummary> {
        match self.state {
            PlayState::Finished(outcome) => Some(PlaySummary {
                outcome,
                score: self.score,
                answered: self.answered,
            }),
            _ => None,
        }
    }
}

pub fn run<R, P, G>(repo: &R, prompter: &mut P, rng: G) -> Result<CmdResult>
where
    R: QuizRepository,
    P: Prompter,
    G: Rng,
{
    let mut session = PlaySession::new(repo.get_all(), rng);
    debug!(quizzes = session.remaining(), "play session started");

    while let Some(quiz) = session.select()? {
        prompter.say(CmdMessage::info(format!("{}? ", quiz.question)));
        let given = prompter.ask(ANSWER_PROMPT)?;
        match session.answer(&given)? {
            Verdict::Correct => prompter.say(CmdMessage::success(format!(
                "CORRECT - {} hits so far.",
                session.score()
            ))),
            Verdict::Incorrect => prompter.say(CmdMessage::error("INCORRECT.")),
        }
    }

    let summary = session.summary().ok_or_else(|| {
        QuizError::Session("play session stopped before finishing".to_string())
    })?;
    debug!(outcome = ?summary.outcome, score = summary.score, "play session finished");

    let mut result = CmdResult::default();
    if summary.outcome == PlayOutcome::Won {
        result.add_message(CmdMessage::info("Nothing left to ask."));
    }
    result.add_message(CmdMessage::info(format!(
        "End of game. Score: {}",
        summary.score
    )));
    result.add_message(CmdMessage::success(summary.score.to_string()).big());
    result.play = Some(summary);
    Ok(result)
}
