//! # Styles
//!
//! Colors used by the renderers. Everything goes through [`paint`], which leaves
//! text untouched when color is off, so renderers can be tested on plain strings.
//!
//! Whether color is on is decided once at startup (config `color`, `NO_COLOR`,
//! stdout being a terminal) and stored in `colored`'s global override.

use colored::{Color, Colorize};
use quizapp::api::MessageLevel;

/// Quiz ids in lists and confirmations.
pub const ID: Color = Color::Magenta;
/// The `=>` between question and answer.
pub const ARROW: Color = Color::Magenta;
/// Section headers in help and credits.
pub const HEADER: Color = Color::Cyan;
/// Author names in credits.
pub const AUTHOR: Color = Color::Green;

pub fn level_color(level: MessageLevel) -> Option<Color> {
    match level {
        MessageLevel::Info => None,
        MessageLevel::Success => Some(Color::Green),
        MessageLevel::Warning => Some(Color::Yellow),
        MessageLevel::Error => Some(Color::Red),
    }
}

pub fn paint(text: &str, color: Option<Color>, bold: bool, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    let mut styled = match color {
        Some(color) => text.color(color),
        None => text.normal(),
    };
    if bold {
        styled = styled.bold();
    }
    styled.to_string()
}

/// True when output should be colored, as decided at startup.
pub fn colors_enabled() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}
