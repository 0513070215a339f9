//! # Quiz CLI Architecture
//!
//! The `quiz` binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/quizapp/`: Core library: store, id validation, session engine
//! - `crates/quiz/`: This CLI tool, depends on the `quizapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/quiz/src/cli/)                           │
//! │  - clap argument parsing, one-shot and REPL (setup.rs)      │
//! │  - Context wiring + dispatch + prompt loop (commands.rs)    │
//! │  - Terminal prompter (prompt.rs)                            │
//! │  - Colored rendering (render.rs, styles.rs)                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/quizapp/src/api.rs)                      │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/quizapp/src/commands/*)              │
//! │  - Validation, lookup, prompting, play state machine        │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Ways In
//!
//! `quiz <command>` runs one command and exits. Plain `quiz` opens the interactive
//! prompt (`quiz> `) and reads commands until `quit` or end of input. Both accept
//! the same command grammar.
//!
//! ## Testing Approach
//!
//! - **Command layer**: unit tests against the in-memory store with a scripted
//!   prompter.
//! - **CLI layer**: parsing and rendering unit tests here, and end-to-end runs of
//!   the built binary in `tests/` with piped stdin.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
