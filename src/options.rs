//! Delimiter configuration for rendering and parsing.
//!
//! This module provides the types that control the text shape:
//!
//! - [`DelimiterConfig`]: brackets per container kind, separators and the string delimiter
//! - [`Brackets`]: an open/close pair
//! - [`ContainerKind`]: which bracket pair a container uses
//!
//! The configuration is an immutable value passed to every call; there is no
//! process-wide setting. [`DelimiterConfig::DEFAULT`] is the Python-like layout.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pyrepr::{format_with_config, ContainerKind, DelimiterConfig};
//!
//! let config = DelimiterConfig::new()
//!     .with_string_delimiter('"')
//!     .with_brackets(ContainerKind::Sequence, "<", ">");
//!
//! assert_eq!(format_with_config(&vec!["a", "b"], &config), "<\"a\", \"b\">");
//! ```

use crate::{Error, Result};
use std::borrow::Cow;

/// The four container shapes a [`Value`](crate::Value) can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Sequence,
    Set,
    Mapping,
    Tuple,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 4] = [
        ContainerKind::Sequence,
        ContainerKind::Set,
        ContainerKind::Mapping,
        ContainerKind::Tuple,
    ];

    /// Lower-case name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ContainerKind::Sequence => "sequence",
            ContainerKind::Set => "set",
            ContainerKind::Mapping => "mapping",
            ContainerKind::Tuple => "tuple",
        }
    }
}

/// An open/close bracket pair.
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::Brackets;
///
/// let angle = Brackets::new("<", ">");
/// assert_eq!(angle.open(), "<");
/// assert_eq!(angle.close(), ">");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Brackets {
    open: Cow<'static, str>,
    close: Cow<'static, str>,
}

impl Brackets {
    /// Creates a bracket pair from static strings; usable in `const` context.
    #[must_use]
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Brackets {
            open: Cow::Borrowed(open),
            close: Cow::Borrowed(close),
        }
    }

    /// Creates a bracket pair from owned or borrowed strings.
    #[must_use]
    pub fn from_strings(
        open: impl Into<Cow<'static, str>>,
        close: impl Into<Cow<'static, str>>,
    ) -> Self {
        Brackets {
            open: open.into(),
            close: close.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn open(&self) -> &str {
        &self.open
    }

    #[inline]
    #[must_use]
    pub fn close(&self) -> &str {
        &self.close
    }
}

/// Rendering and parsing configuration.
///
/// Controls the bracket pair of each container kind, the separator between
/// elements, the separator between a mapping key and its value, and the
/// character that delimits string scalars.
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::DelimiterConfig;
///
/// // Python-like defaults
/// let config = DelimiterConfig::new();
/// assert_eq!(config.value_separator(), ", ");
/// assert_eq!(config.key_value_separator(), ": ");
/// assert_eq!(config.string_delimiter(), '\'');
///
/// // Compact JSON-ish variant
/// let compact = DelimiterConfig::new()
///     .with_value_separator(",")
///     .with_key_value_separator(":")
///     .with_string_delimiter('"');
/// assert!(compact.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelimiterConfig {
    sequence: Brackets,
    set: Brackets,
    mapping: Brackets,
    tuple: Brackets,
    value_separator: Cow<'static, str>,
    key_value_separator: Cow<'static, str>,
    string_delimiter: char,
}

impl Default for DelimiterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl DelimiterConfig {
    /// `[a, b]` sequences, `{a, b}` sets, `{k: v}` mappings, `(a, b)` tuples, `'text'` strings.
    pub const DEFAULT: DelimiterConfig = DelimiterConfig {
        sequence: Brackets::new("[", "]"),
        set: Brackets::new("{", "}"),
        mapping: Brackets::new("{", "}"),
        tuple: Brackets::new("(", ")"),
        value_separator: Cow::Borrowed(", "),
        key_value_separator: Cow::Borrowed(": "),
        string_delimiter: '\'',
    };

    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// Returns the bracket pair used for `kind`.
    #[inline]
    #[must_use]
    pub fn brackets(&self, kind: ContainerKind) -> &Brackets {
        match kind {
            ContainerKind::Sequence => &self.sequence,
            ContainerKind::Set => &self.set,
            ContainerKind::Mapping => &self.mapping,
            ContainerKind::Tuple => &self.tuple,
        }
    }

    #[inline]
    #[must_use]
    pub fn value_separator(&self) -> &str {
        &self.value_separator
    }

    #[inline]
    #[must_use]
    pub fn key_value_separator(&self) -> &str {
        &self.key_value_separator
    }

    #[inline]
    #[must_use]
    pub const fn string_delimiter(&self) -> char {
        self.string_delimiter
    }

    /// Replaces the bracket pair of one container kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pyrepr::{ContainerKind, DelimiterConfig};
    ///
    /// let config = DelimiterConfig::new().with_brackets(ContainerKind::Set, "set(", ")");
    /// assert_eq!(config.brackets(ContainerKind::Set).open(), "set(");
    /// ```
    #[must_use]
    pub fn with_brackets(
        mut self,
        kind: ContainerKind,
        open: impl Into<Cow<'static, str>>,
        close: impl Into<Cow<'static, str>>,
    ) -> Self {
        let brackets = Brackets::from_strings(open, close);
        match kind {
            ContainerKind::Sequence => self.sequence = brackets,
            ContainerKind::Set => self.set = brackets,
            ContainerKind::Mapping => self.mapping = brackets,
            ContainerKind::Tuple => self.tuple = brackets,
        }
        self
    }

    /// Sets the separator written between elements.
    #[must_use]
    pub fn with_value_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.value_separator = separator.into();
        self
    }

    /// Sets the separator written between a mapping key and its value.
    #[must_use]
    pub fn with_key_value_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.key_value_separator = separator.into();
        self
    }

    /// Sets the character that delimits string scalars.
    #[must_use]
    pub fn with_string_delimiter(mut self, delimiter: char) -> Self {
        self.string_delimiter = delimiter;
        self
    }

    /// Checks that text rendered with this configuration can be parsed back.
    ///
    /// Rendering never calls this; it is total over any configuration. The
    /// parser refuses to run with a configuration that fails here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when the string delimiter is a
    /// backslash or appears in a bracket or a trimmed separator, a bracket is
    /// empty, a separator is blank, both separators trim to the same text, a
    /// bracket and a trimmed separator are prefixes of one another, or two
    /// container kinds (other than set and mapping) share an open bracket.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pyrepr::DelimiterConfig;
    ///
    /// assert!(DelimiterConfig::new().validate().is_ok());
    /// assert!(DelimiterConfig::new().with_string_delimiter('\\').validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.string_delimiter == '\\' {
            return Err(Error::invalid_config(
                "the string delimiter cannot be a backslash",
            ));
        }

        for kind in ContainerKind::ALL {
            let brackets = self.brackets(kind);
            if brackets.open().is_empty() || brackets.close().is_empty() {
                return Err(Error::invalid_config(&format!(
                    "{} brackets cannot be empty",
                    kind.name()
                )));
            }
        }

        let value_sep = self.value_separator.trim();
        let key_value_sep = self.key_value_separator.trim();
        if value_sep.is_empty() || key_value_sep.is_empty() {
            return Err(Error::invalid_config(
                "separators need at least one non-whitespace character",
            ));
        }
        if value_sep == key_value_sep {
            return Err(Error::invalid_config(
                "the value and key-value separators must differ",
            ));
        }

        let delimiter = self.string_delimiter;
        if value_sep.contains(delimiter) || key_value_sep.contains(delimiter) {
            return Err(Error::invalid_config(&format!(
                "the string delimiter {:?} appears in a separator",
                delimiter
            )));
        }

        for kind in ContainerKind::ALL {
            let brackets = self.brackets(kind);
            for bracket in [brackets.open(), brackets.close()] {
                if bracket.contains(delimiter) {
                    return Err(Error::invalid_config(&format!(
                        "the string delimiter {:?} appears in the {} bracket {:?}",
                        delimiter,
                        kind.name(),
                        bracket
                    )));
                }
                for separator in [value_sep, key_value_sep] {
                    if bracket.starts_with(separator) || separator.starts_with(bracket) {
                        return Err(Error::invalid_config(&format!(
                            "the {} bracket {:?} collides with the separator {:?}",
                            kind.name(),
                            bracket,
                            separator
                        )));
                    }
                }
            }
        }

        for (i, a) in ContainerKind::ALL.iter().enumerate() {
            for b in &ContainerKind::ALL[i + 1..] {
                let shared_braces = matches!(
                    (a, b),
                    (ContainerKind::Set, ContainerKind::Mapping)
                        | (ContainerKind::Mapping, ContainerKind::Set)
                );
                if !shared_braces && self.brackets(*a).open() == self.brackets(*b).open() {
                    return Err(Error::invalid_config(&format!(
                        "{} and {} share the open bracket {:?}",
                        a.name(),
                        b.name(),
                        self.brackets(*a).open()
                    )));
                }
            }
        }

        Ok(())
    }

    /// True when sets and mappings open with the same bracket and the parser
    /// must look at the first element to tell them apart.
    #[inline]
    pub(crate) fn braces_shared(&self) -> bool {
        self.set.open() == self.mapping.open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_const() {
        assert_eq!(DelimiterConfig::default(), DelimiterConfig::DEFAULT);
        assert_eq!(DelimiterConfig::new().brackets(ContainerKind::Tuple).open(), "(");
        assert!(DelimiterConfig::DEFAULT.braces_shared());
    }

    #[test]
    fn test_builder_overrides_single_kind() {
        let config = DelimiterConfig::new().with_brackets(ContainerKind::Mapping, "<", ">");
        assert_eq!(config.brackets(ContainerKind::Mapping).close(), ">");
        assert_eq!(config.brackets(ContainerKind::Set).open(), "{");
        assert!(!config.braces_shared());
    }

    #[test]
    fn test_validate_rejects_ambiguous_configs() {
        let same_separators = DelimiterConfig::new()
            .with_value_separator(";")
            .with_key_value_separator(" ; ");
        assert!(matches!(
            same_separators.validate(),
            Err(Error::InvalidConfig(_))
        ));

        let blank = DelimiterConfig::new().with_value_separator("  ");
        assert!(blank.validate().is_err());

        let empty_bracket = DelimiterConfig::new().with_brackets(ContainerKind::Tuple, "", ")");
        assert!(empty_bracket.validate().is_err());

        let clash = DelimiterConfig::new().with_brackets(ContainerKind::Tuple, "[", "]");
        assert!(clash.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_delimiter_inside_structure() {
        let in_bracket = DelimiterConfig::new().with_string_delimiter('[');
        assert!(matches!(in_bracket.validate(), Err(Error::InvalidConfig(_))));

        let in_long_bracket = DelimiterConfig::new()
            .with_brackets(ContainerKind::Set, "set(", ")")
            .with_string_delimiter('s');
        assert!(in_long_bracket.validate().is_err());

        let in_separator = DelimiterConfig::new().with_string_delimiter(',');
        assert!(in_separator.validate().is_err());

        let in_key_separator = DelimiterConfig::new()
            .with_key_value_separator(" => ")
            .with_string_delimiter('=');
        assert!(in_key_separator.validate().is_err());

        assert!(DelimiterConfig::new().with_string_delimiter('"').validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_separator_colliding_with_bracket() {
        let close_as_separator = DelimiterConfig::new().with_value_separator(") ");
        assert!(matches!(
            close_as_separator.validate(),
            Err(Error::InvalidConfig(_))
        ));

        let separator_prefix = DelimiterConfig::new().with_brackets(ContainerKind::Tuple, ":(", ")");
        assert!(separator_prefix.validate().is_err());

        let arrows = DelimiterConfig::new()
            .with_brackets(ContainerKind::Sequence, "<", ">")
            .with_key_value_separator(" => ");
        assert!(arrows.validate().is_ok());
    }

    #[test]
    fn test_validate_allows_distinct_set_brackets() {
        let config = DelimiterConfig::new().with_brackets(ContainerKind::Set, "{|", "|}");
        assert!(config.validate().is_ok());
    }
}
