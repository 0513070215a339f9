//! # Quiz Identifiers
//!
//! A quiz id is its zero-based position in the store. Users type ids as text, so
//! every command taking an id runs it through [`validate_id`] before touching the
//! store.
//!
//! ## Leading-Integer Coercion
//!
//! Input is read the way a lenient integer parser reads it: leading whitespace is
//! skipped, an optional `+`/`-` sign is accepted, and then the longest run of
//! digits is taken. A `0x`/`0X` prefix switches to hexadecimal digits. Anything
//! after the digits is ignored, so `"3.9"` and `"3abc"` both resolve to `3`.
//! Input with no digits is rejected. Values too large for an `i64` saturate at
//! `i64::MAX`/`i64::MIN`; they are still numbers, just ones no quiz lives at.
//!
//! The validator does not bounds-check. A negative or too-large id is a perfectly
//! valid *number*; whether a quiz lives there is the repository's call, and it
//! answers with [`QuizError::QuizNotFound`].

use crate::error::{QuizError, Result};

/// Turns a raw, possibly absent, id parameter into an integer id.
pub fn validate_id(raw: Option<&str>) -> Result<i64> {
    let raw = raw.ok_or(QuizError::MissingParameter)?;
    leading_integer(raw).ok_or_else(|| QuizError::NotANumber(raw.to_string()))
}

fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Every char is a digit in `radix`, so only overflow can fail here
    let digits = &digits[..end];
    Some(if negative {
        i64::from_str_radix(&format!("-{}", digits), radix).unwrap_or(i64::MIN)
    } else {
        i64::from_str_radix(digits, radix).unwrap_or(i64::MAX)
    })
}

/// Maps a validated id onto a position in a sequence of `len` items.
pub fn position(id: i64, len: usize) -> Result<usize> {
    usize::try_from(id)
        .ok()
        .filter(|&pos| pos < len)
        .ok_or(QuizError::QuizNotFound(id))
}
