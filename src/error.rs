//! Error types for parsing and Serde conversion.
//!
//! Formatting a [`Value`](crate::Value) never fails. Errors only come out of
//! the parser, out of Serde when a type refuses to (de)serialize, and out of
//! the I/O helpers.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: malformed escapes, unterminated strings or containers,
//!   stray tokens and trailing separators, all with line/column information
//! - **Type Mismatches**: the text parsed fine but has the wrong shape for the
//!   requested Rust type (e.g. a mapping read into a `Vec`)
//! - **Configuration Errors**: a [`DelimiterConfig`](crate::DelimiterConfig)
//!   that cannot be parsed back unambiguously
//! - **I/O Errors**: reader/writer failures
//!
//! ## Examples
//!
//! ```rust
//! use serde_pyrepr::{parse, Error};
//!
//! let result = parse("[1, 2");
//! assert!(matches!(result, Err(Error::UnterminatedContainer { .. })));
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing or converting values.
///
/// Positioned variants carry the 1-based line and column where the problem was found.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A backslash followed by something other than `\` or the string delimiter
    #[error("Malformed escape at line {line}, column {col}: {sequence:?} is not a valid escape sequence")]
    MalformedEscape {
        line: usize,
        col: usize,
        sequence: String,
    },

    /// A string scalar with no closing delimiter
    #[error("Unterminated string starting at line {line}, column {col}")]
    UnterminatedString { line: usize, col: usize },

    /// A container whose closing bracket never arrived
    #[error("Unterminated container opened at line {line}, column {col}: expected {expected:?}")]
    UnterminatedContainer {
        line: usize,
        col: usize,
        expected: String,
    },

    /// A token that does not fit the grammar at this position
    #[error("Unexpected token at line {line}, column {col}: expected {expected}, found {found:?}")]
    UnexpectedToken {
        line: usize,
        col: usize,
        expected: String,
        found: String,
    },

    /// A value separator directly followed by a closing bracket
    #[error("Trailing separator at line {line}, column {col}")]
    TrailingSeparator { line: usize, col: usize },

    /// Input ended where a value was required
    #[error("Unexpected end of input at line {line}, column {col}: expected {expected}")]
    UnexpectedEof {
        line: usize,
        col: usize,
        expected: String,
    },

    /// Containers nested deeper than the parser allows
    #[error("Nesting deeper than {limit} levels at line {line}, column {col}")]
    DepthLimitExceeded {
        line: usize,
        col: usize,
        limit: usize,
    },

    /// The parsed value has the wrong shape for the requested type
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// The delimiter configuration cannot be parsed back unambiguously
    #[error("Invalid delimiter configuration: {0}")]
    InvalidConfig(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a malformed escape error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pyrepr::Error;
    ///
    /// let err = Error::malformed_escape(1, 4, "\\n");
    /// assert!(err.to_string().contains("column 4"));
    /// ```
    pub fn malformed_escape(line: usize, col: usize, sequence: &str) -> Self {
        Error::MalformedEscape {
            line,
            col,
            sequence: sequence.to_string(),
        }
    }

    /// Creates an unterminated string error pointing at the opening delimiter.
    pub fn unterminated_string(line: usize, col: usize) -> Self {
        Error::UnterminatedString { line, col }
    }

    /// Creates an unterminated container error pointing at the opening bracket.
    pub fn unterminated_container(line: usize, col: usize, expected: &str) -> Self {
        Error::UnterminatedContainer {
            line,
            col,
            expected: expected.to_string(),
        }
    }

    /// Creates an unexpected token error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pyrepr::Error;
    ///
    /// let err = Error::unexpected_token(2, 7, "value separator", "]");
    /// assert!(err.to_string().contains("expected value separator"));
    /// ```
    pub fn unexpected_token(line: usize, col: usize, expected: &str, found: &str) -> Self {
        Error::UnexpectedToken {
            line,
            col,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a trailing separator error.
    pub fn trailing_separator(line: usize, col: usize) -> Self {
        Error::TrailingSeparator { line, col }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, col: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            line,
            col,
            expected: expected.to_string(),
        }
    }

    /// Creates a nesting depth error.
    pub fn depth_limit_exceeded(line: usize, col: usize, limit: usize) -> Self {
        Error::DepthLimitExceeded { line, col, limit }
    }

    /// Creates a type mismatch error when a value cannot become the requested type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pyrepr::Error;
    ///
    /// let err = Error::type_mismatch("sequence", "mapping");
    /// assert!(err.to_string().contains("expected sequence"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(msg: &str) -> Self {
        Error::InvalidConfig(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the 1-based `(line, column)` of positioned errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pyrepr::Error;
    ///
    /// assert_eq!(Error::trailing_separator(3, 9).position(), Some((3, 9)));
    /// assert_eq!(Error::custom("boom").position(), None);
    /// ```
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::MalformedEscape { line, col, .. }
            | Error::UnterminatedString { line, col }
            | Error::UnterminatedContainer { line, col, .. }
            | Error::UnexpectedToken { line, col, .. }
            | Error::TrailingSeparator { line, col }
            | Error::UnexpectedEof { line, col, .. }
            | Error::DepthLimitExceeded { line, col, .. } => Some((*line, *col)),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positioned_messages() {
        let err = Error::unterminated_container(2, 5, "]");
        assert_eq!(
            err.to_string(),
            "Unterminated container opened at line 2, column 5: expected \"]\""
        );
        assert_eq!(err.position(), Some((2, 5)));
    }

    #[test]
    fn test_unpositioned_errors() {
        assert_eq!(Error::type_mismatch("bool", "tuple").position(), None);
        assert_eq!(Error::invalid_config("x").position(), None);
        assert_eq!(Error::io("disk").to_string(), "IO error: disk");
    }

    #[test]
    fn test_serde_custom() {
        let err = <Error as serde::de::Error>::custom("missing field");
        assert!(matches!(err, Error::Custom(ref m) if m == "missing field"));
    }
}
