//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Every `render_*` function returns a
//! `String` and has an `_internal` twin taking `use_color` explicitly; the public
//! one asks [`styles::colors_enabled`]. Tests use the internal ones with color off.
//!
//! Layout follows the prompt's conventions:
//!
//! ```text
//!  [0]: Capital of Italy
//!  [0]: Capital of Italy => Rome
//! ```

use super::setup::command_summary;
use super::styles::{self, paint};
use quizapp::api::CmdMessage;
use quizapp::model::IndexedQuiz;

pub fn render_quiz_list(quizzes: &[IndexedQuiz]) -> String {
    render_quiz_list_internal(quizzes, styles::colors_enabled())
}

fn render_quiz_list_internal(quizzes: &[IndexedQuiz], use_color: bool) -> String {
    let mut output = String::new();
    for entry in quizzes {
        output.push_str(&format!(
            " [{}]: {}\n",
            paint(&entry.id.to_string(), Some(styles::ID), false, use_color),
            entry.quiz.question
        ));
    }
    output
}

pub fn render_full_quizzes(quizzes: &[IndexedQuiz]) -> String {
    render_full_quizzes_internal(quizzes, styles::colors_enabled())
}

fn render_full_quizzes_internal(quizzes: &[IndexedQuiz], use_color: bool) -> String {
    let mut output = String::new();
    for entry in quizzes {
        output.push_str(&format!(
            " [{}]: {} {} {}\n",
            paint(&entry.id.to_string(), Some(styles::ID), false, use_color),
            entry.quiz.question,
            paint("=>", Some(styles::ARROW), false, use_color),
            entry.quiz.answer
        ));
    }
    output
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        print_message(message);
    }
}

pub fn print_message(message: &CmdMessage) {
    println!("{}", render_message_internal(message, styles::colors_enabled()));
}

fn render_message_internal(message: &CmdMessage, use_color: bool) -> String {
    let color = styles::level_color(message.level);
    if message.big {
        render_banner(&message.content)
            .lines()
            .map(|line| paint(line, color, true, use_color))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        paint(&message.content, color, false, use_color)
    }
}

/// Frames `text` in a box, upper-cased, for verdicts and final scores.
fn render_banner(text: &str) -> String {
    let text = text.to_uppercase();
    let rule = format!("+{}+", "-".repeat(text.chars().count() + 2));
    format!("{rule}\n| {text} |\n{rule}")
}

pub fn render_help() -> String {
    render_help_internal(styles::colors_enabled())
}

fn render_help_internal(use_color: bool) -> String {
    let summary = command_summary();
    let mut output = paint("Commands:", Some(styles::HEADER), true, use_color);
    output.push('\n');
    for (usage, about) in summary {
        output.push_str(&format!("  {} - {}.\n", usage, about));
    }
    output
}

pub fn render_credits() -> String {
    render_credits_internal(styles::colors_enabled())
}

fn render_credits_internal(use_color: bool) -> String {
    let mut output = paint("Authors:", Some(styles::HEADER), true, use_color);
    output.push('\n');
    for author in env!("CARGO_PKG_AUTHORS").split(':') {
        output.push_str(&format!(
            "  {}\n",
            paint(author.trim(), Some(styles::AUTHOR), false, use_color)
        ));
    }
    output
}

pub fn print_error(error: impl std::fmt::Display) {
    eprintln!(
        "{}",
        paint(
            &format!("Error: {}", error),
            styles::level_color(quizapp::api::MessageLevel::Error),
            false,
            styles::colors_enabled()
        )
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizapp::model::Quiz;

    fn entries() -> Vec<IndexedQuiz> {
        vec![
            IndexedQuiz::new(0, Quiz::new("Capital of Italy", "Rome")),
            IndexedQuiz::new(1, Quiz::new("Capital of France", "Paris")),
        ]
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_quiz_list_internal(&[], false), "");
    }

    #[test]
    fn test_render_list_shows_ids_and_questions() {
        let output = render_quiz_list_internal(&entries(), false);
        assert_eq!(output, " [0]: Capital of Italy\n [1]: Capital of France\n");
        assert!(!output.contains("Rome"));
    }

    #[test]
    fn test_render_full_quiz_shows_the_answer() {
        let output = render_full_quizzes_internal(&entries()[1..], false);
        assert_eq!(output, " [1]: Capital of France => Paris\n");
    }

    #[test]
    fn test_render_plain_message() {
        let message = CmdMessage::success("Added: Capital of Peru => Lima");
        assert_eq!(
            render_message_internal(&message, false),
            "Added: Capital of Peru => Lima"
        );
    }

    #[test]
    fn test_render_big_message_as_banner() {
        let message = CmdMessage::success("Correct").big();
        assert_eq!(
            render_message_internal(&message, false),
            "+---------+\n| CORRECT |\n+---------+"
        );
    }

    #[test]
    fn test_render_big_score() {
        let message = CmdMessage::success("12").big();
        let output = render_message_internal(&message, false);
        assert_eq!(output.lines().nth(1), Some("| 12 |"));
    }

    #[test]
    fn test_render_help_lists_commands() {
        let output = render_help_internal(false);
        assert!(output.starts_with("Commands:\n"));
        assert!(output.contains("  show <id> - Show the question and answer of a quiz.\n"));
        assert!(output.contains("  q|quit - Leave the interactive prompt.\n"));
    }

    #[test]
    fn test_render_credits_names_the_authors() {
        let output = render_credits_internal(false);
        assert!(output.starts_with("Authors:\n"));
        assert!(output.contains("  quiz contributors\n"));
    }
}
