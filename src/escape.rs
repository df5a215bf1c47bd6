//! Escaping of string scalars.
//!
//! Only two characters are ever escaped: the backslash and the configured
//! string delimiter. Control characters such as newlines or NUL pass through
//! verbatim; the output is a readable dump, not a strict interchange format.
//!
//! ```rust
//! use serde_pyrepr::escape::{escape, unescape};
//!
//! let escaped = escape(r"it's a\b", '\'');
//! assert_eq!(escaped, r"it\'s a\\b");
//! assert_eq!(unescape(&escaped, '\'').unwrap(), r"it's a\b");
//! ```

use crate::{Error, Result};
use std::borrow::Cow;

/// Escapes `text` so it can sit between two copies of `delimiter`.
///
/// The result is identical to replacing every `\` with `\\` first and then
/// every `delimiter` with `\delimiter`. The order matters: escaping the
/// delimiter first would double the backslashes it introduces.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
#[must_use]
pub fn escape(text: &str, delimiter: char) -> Cow<'_, str> {
    if !text.chars().any(|ch| ch == '\\' || ch == delimiter) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        if ch == '\\' || ch == delimiter {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    Cow::Owned(escaped)
}

/// Reverses [`escape`].
///
/// Scans left to right: `\\` becomes `\`, `\delimiter` becomes `delimiter`.
///
/// # Errors
///
/// Any other backslash sequence, including a trailing lone backslash, is
/// [`Error::MalformedEscape`] positioned within `text`.
pub fn unescape(text: &str, delimiter: char) -> Result<Cow<'_, str>> {
    unescape_at(text, delimiter, 1, 1)
}

/// [`unescape`] with error positions offset to where `text` starts in a larger input.
pub(crate) fn unescape_at(
    text: &str,
    delimiter: char,
    start_line: usize,
    start_col: usize,
) -> Result<Cow<'_, str>> {
    if !text.contains('\\') {
        return Ok(Cow::Borrowed(text));
    }

    let mut unescaped = String::with_capacity(text.len());
    let mut line = start_line;
    let mut col = start_col;
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some(next) if next == '\\' || next == delimiter => {
                    unescaped.push(next);
                    col += 2;
                }
                Some(other) => {
                    return Err(Error::malformed_escape(line, col, &format!("\\{}", other)));
                }
                None => return Err(Error::malformed_escape(line, col, "\\")),
            }
        } else {
            unescaped.push(ch);
            if ch == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
    }

    Ok(Cow::Owned(unescaped))
}
