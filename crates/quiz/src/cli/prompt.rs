use super::render::print_message;
use console::Term;
use quizapp::api::CmdMessage;
use quizapp::error::{QuizError, Result};
use quizapp::prompt::Prompter;
use std::io::{self, BufRead, IsTerminal, Write};

/// Reads answers (and prompt-loop commands) from the terminal.
///
/// On an interactive terminal lines are read through `console`, which lets the
/// user edit a pre-filled default. Otherwise stdin is read line by line and
/// defaults are not shown. Both paths read from the same stdin, so the prompt
/// loop and the flows it runs never lose each other's input.
pub struct TerminalPrompter {
    term: Term,
    interactive: bool,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompter {
    pub fn new() -> Self {
        let term = Term::stdout();
        let interactive = term.is_term() && io::stdin().is_terminal();
        Self { term, interactive }
    }

    fn read_terminal_line(&mut self, prompt: &str, initial: &str) -> Result<String> {
        self.term.write_str(prompt)?;
        let read = self.term.read_line_initial_text(initial);
        let line = terminal_input(read);
        if matches!(line, Err(QuizError::InputClosed)) {
            self.term.write_line("")?;
        }
        line
    }

    fn read_piped_line(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            // Finish the prompt line so whatever is printed next starts clean
            println!();
            return Err(QuizError::InputClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Ctrl-D on a raw terminal arrives as an EOT character or as an EOF error,
/// depending on the platform. Either one ends the input.
fn terminal_input(read: io::Result<String>) -> Result<String> {
    match read {
        Ok(line) if line.contains(EOT) => Err(QuizError::InputClosed),
        Ok(line) => Ok(line),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(QuizError::InputClosed),
        Err(e) => Err(e.into()),
    }
}

const EOT: char = '\u{4}';

impl Prompter for TerminalPrompter {
    fn say(&mut self, message: CmdMessage) {
        print_message(&message);
    }

    fn read_line(&mut self, prompt: &str, initial: &str) -> Result<String> {
        if self.interactive {
            self.read_terminal_line(prompt, initial)
        } else {
            self.read_piped_line(prompt)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_line_passes_through() {
        assert_eq!(terminal_input(Ok("Rome".to_string())).unwrap(), "Rome");
        assert_eq!(terminal_input(Ok(String::new())).unwrap(), "");
    }

    #[test]
    fn test_ctrl_d_closes_terminal_input() {
        assert!(matches!(
            terminal_input(Ok("\u{4}".to_string())),
            Err(QuizError::InputClosed)
        ));
        assert!(matches!(
            terminal_input(Ok("Ro\u{4}".to_string())),
            Err(QuizError::InputClosed)
        ));
        let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "eof");
        assert!(matches!(terminal_input(Err(eof)), Err(QuizError::InputClosed)));
    }

    #[test]
    fn test_other_terminal_errors_stay_io_errors() {
        let broken = io::Error::new(io::ErrorKind::BrokenPipe, "gone");
        assert!(matches!(terminal_input(Err(broken)), Err(QuizError::Io(_))));
    }
}
