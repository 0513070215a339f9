//! # Interactive Question Protocol
//!
//! Some flows need free-text input in the middle of their work: `add` and `edit`
//! ask for a question and then an answer, `test` and `play` ask for answers. They
//! do that through a [`Prompter`], which the UI supplies.
//!
//! ## Contract
//!
//! - [`Prompter::ask`] blocks until the user submits a line and returns it trimmed.
//!   The flow is suspended for exactly that long; nothing else in the library waits.
//! - One question at a time. `ask` takes `&mut self`, so a second question cannot be
//!   issued while the first is outstanding.
//! - No timeout and no cancellation. A flow that reaches a terminal state simply
//!   stops asking.
//! - End of input is reported as [`QuizError::InputClosed`](crate::error::QuizError).
//!
//! [`Prompter::say`] emits a message without waiting, so a flow can show a question
//! or a running score before the next `ask`.

use crate::commands::CmdMessage;
use crate::error::Result;

pub trait Prompter {
    /// Shows a message to the user.
    fn say(&mut self, message: CmdMessage);

    /// Reads one raw line in response to `prompt`. `initial` is an editable default
    /// that a terminal implementation pre-fills; other implementations may ignore it.
    fn read_line(&mut self, prompt: &str, initial: &str) -> Result<String>;

    /// Asks `prompt` and returns the trimmed response.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.ask_with_default(prompt, "")
    }

    /// Like [`Prompter::ask`], with `initial` offered as an editable default.
    fn ask_with_default(&mut self, prompt: &str, initial: &str) -> Result<String> {
        Ok(self.read_line(prompt, initial)?.trim().to_string())
    }
}
