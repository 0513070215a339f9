//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments (or prompt lines) into `Commands`
//! 2. **Context Setup**: Load configuration, start logging, open the data file
//! 3. **API Dispatch**: Call the matching `QuizApi` method with the terminal prompter
//! 4. **Output Formatting**: Convert `CmdResult` into terminal output
//! 5. **Error Handling**: Report user errors and keep going at the prompt; end the
//!    process on storage errors
//!
//! ## Structure
//!
//! - `run()`: Entry point (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API, prompter and configuration
//! - `run_prompt_loop()`: The interactive mode
//! - `dispatch()` / `handle_*()`: Per-command handlers that call the API and print

use super::prompt::TerminalPrompter;
use super::render::{
    print_error, print_messages, render_credits, render_full_quizzes, render_help,
    render_quiz_list,
};
use super::setup::{parse_prompt_line, Cli, Commands};
use clap::error::ErrorKind;
use clap::Parser;
use quizapp::api::{CmdMessage, QuizApi};
use quizapp::config::QuizConfig;
use quizapp::error::{QuizError, Result};
use quizapp::prompt::Prompter;
use quizapp::store::fs::FileStore;
use std::io::IsTerminal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "quiz> ";

struct AppContext {
    api: QuizApi<FileStore>,
    prompter: TerminalPrompter,
}

/// What the prompt loop does after a command.
enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(command) => dispatch(&mut ctx, command).map(|_| ()),
        None => run_prompt_loop(&mut ctx),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_directives = if verbose {
        "quiz=debug,quizapp=debug"
    } else {
        "quiz=warn,quizapp=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    // Only fails if a subscriber is already set, and then that one stays
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = QuizConfig::load(cli.config.as_deref())?.with_data_file(cli.file.clone());

    if !config.color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    info!(data_file = %config.data_file.display(), "opening quiz data");
    let store = FileStore::open_file(&config.data_file)?;

    Ok(AppContext {
        api: QuizApi::new(store),
        prompter: TerminalPrompter::new(),
    })
}

/// Reads commands until `quit` or end of input. User errors are reported and the
/// loop continues; fatal errors end it.
fn run_prompt_loop(ctx: &mut AppContext) -> Result<()> {
    loop {
        let line = match ctx.prompter.read_line(PROMPT, "") {
            Ok(line) => line,
            Err(QuizError::InputClosed) => break,
            Err(e) => return Err(e),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match parse_prompt_line(line) {
            Ok(command) => command,
            Err(e) => {
                report_parse_error(line, &e);
                continue;
            }
        };
        debug!(?command, "dispatching");

        match dispatch(ctx, command) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            // Input ended in the middle of a flow: nothing more can be read
            Err(QuizError::InputClosed) => break,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => print_error(e),
        }
    }

    print_messages(&[CmdMessage::info("Bye!")]);
    Ok(())
}

fn report_parse_error(line: &str, error: &clap::Error) {
    if error.kind() == ErrorKind::InvalidSubcommand {
        let word = line.split_whitespace().next().unwrap_or(line);
        print_error(format_args!("Unknown command: '{}'", word));
        print_messages(&[CmdMessage::info("Use 'help' to see the available commands.")]);
    } else {
        let message = error.to_string();
        let first_line = message.lines().next().unwrap_or_default();
        print_error(first_line.trim_start_matches("error: "));
    }
}

fn dispatch(ctx: &mut AppContext, command: Commands) -> Result<Flow> {
    match command {
        Commands::Help => handle_help(),
        Commands::List => handle_list(ctx)?,
        Commands::Show { id } => handle_show(ctx, id.as_deref())?,
        Commands::Add => handle_add(ctx)?,
        Commands::Delete { id } => handle_delete(ctx, id.as_deref())?,
        Commands::Edit { id } => handle_edit(ctx, id.as_deref())?,
        Commands::Test { id } => handle_test(ctx, id.as_deref())?,
        Commands::Play => handle_play(ctx)?,
        Commands::Credits => handle_credits(),
        Commands::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn handle_help() {
    print!("{}", render_help());
}

fn handle_credits() {
    print!("{}", render_credits());
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_quizzes()?;
    print!("{}", render_quiz_list(&result.listed_quizzes));
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, id: Option<&str>) -> Result<()> {
    let result = ctx.api.show_quiz(id)?;
    print!("{}", render_full_quizzes(&result.listed_quizzes));
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.add_quiz(&mut ctx.prompter)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: Option<&str>) -> Result<()> {
    let result = ctx.api.delete_quiz(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: Option<&str>) -> Result<()> {
    let result = ctx.api.edit_quiz(&mut ctx.prompter, id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_test(ctx: &mut AppContext, id: Option<&str>) -> Result<()> {
    let result = ctx.api.test_quiz(&mut ctx.prompter, id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_play(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.play(&mut ctx.prompter)?;
    print_messages(&result.messages);
    Ok(())
}
