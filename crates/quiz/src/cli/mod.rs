//! # CLI Behavior
//!
//! This is **one possible UI client** for quizapp, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Execution Modes
//!
//! ### One-shot (`quiz <command>`)
//!
//! Runs a single command against the data file and exits. Any error, including
//! a bad id, exits with status 1. Interactive commands (`add`, `edit`, `test`,
//! `play`) still ask their questions, so answers can be piped:
//! `printf 'Madrid\n' | quiz test 2`.
//!
//! ### Interactive (`quiz`)
//!
//! With no command, `quiz` opens a prompt and reads one command per line.
//! Validation and lookup errors are printed and the prompt comes back. Storage
//! errors end the process. `quit` or end of input leaves the prompt.
//!
//! ### Piped vs Terminal Input
//!
//! On a terminal, `edit` pre-fills the current question and answer so they can be
//! changed in place. When stdin is not a terminal, lines are read as they come and
//! no default is offered.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, dispatch, the prompt loop
//! - `prompt`: The terminal `Prompter`
//! - `render`: Output formatting (lists, messages, banners, help)
//! - `setup`: Argument parsing via clap
//! - `styles`: Colors per message level

mod commands;
mod prompt;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
