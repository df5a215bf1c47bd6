//! The text format
//!
//! This module documents the text produced by the [`Formatter`](crate::Formatter)
//! and read back by the [`Parser`](crate::Parser).
//!
//! # Overview
//!
//! The layout mirrors how Python prints its built-in containers. It is meant
//! for logs, debug output and test expectations: short, unambiguous for the
//! common cases, and configurable when the defaults clash with the data.
//!
//! # Containers
//!
//! | Kind | Default | Example |
//! |------|---------|---------|
//! | Sequence | `[` `]` | `[1, 2, 3]` |
//! | Set | `{` `}` | `{1, 2}` |
//! | Mapping | `{` `}` | `{'a': 1, 'b': 2}` |
//! | Tuple | `(` `)` | `(1, 'foo', true)` |
//! | Unit | `()` | the empty tuple, also used for `None` |
//!
//! **Rules**:
//! - Elements are joined by the value separator (`", "`); there is never a
//!   separator before the first or after the last element
//! - Mapping entries are `key`, key-value separator (`": "`), `value`
//! - Keys are values like any other and may be containers themselves
//! - Elements appear in the order the source container iterates them; sets
//!   and hash maps are not sorted
//! - The same brackets and separators are used at every depth
//! - A one-element tuple is written `(x)`, without a trailing separator
//!
//! # Scalars
//!
//! A scalar is either a **string** or **raw**. The flag is chosen when the
//! [`Value`](crate::Value) is built, usually by the [`Adapt`](crate::Adapt)
//! impl of the source type:
//!
//! | Source | Flavour | Output |
//! |--------|---------|--------|
//! | `&str`, `String`, `char` | string | `'text'` |
//! | integers, floats, `bool` | raw | `42`, `2.5`, `true` |
//! | big integers, dates, durations | raw | `123456789012345678901`, `2024-01-15`, `42ms` |
//!
//! ## Escaping
//!
//! Inside a string only two characters are escaped, in this order:
//!
//! 1. `\` becomes `\\`
//! 2. the string delimiter (`'`) becomes `\'`
//!
//! ```text
//! it's          ->  'it\'s'
//! C:\temp       ->  'C:\\temp'
//! ```
//!
//! Newlines, tabs and other control characters are written as-is. Raw
//! scalars are never escaped.
//!
//! # Reading text back
//!
//! - Whitespace between tokens is ignored; separators are compared after
//!   trimming, so `[1,2]` and `[1 , 2]` are the same sequence
//! - With the default layout sets and mappings share braces: a key-value
//!   separator after the first element makes a mapping, `{}` is an empty
//!   mapping, anything else is a set
//! - A raw scalar extends to the next value separator or close bracket; in
//!   key position it also stops at the key-value separator
//! - `[1, 2, ]` is rejected with a trailing separator error
//! - Backslash sequences other than `\\` and `\'` are malformed escapes
//! - Nesting deeper than [`MAX_DEPTH`](crate::de::MAX_DEPTH) is rejected
//!
//! Text round-trips exactly when raw scalars contain no separators or
//! brackets and sets are not empty (`{}` always reads back as a mapping).
//!
//! # Custom layouts
//!
//! Every token can be replaced through [`DelimiterConfig`](crate::DelimiterConfig):
//!
//! ```text
//! default:                 {'a': [1, 2], 'b': (true)}
//! '"' strings, ";" sep:    {"a": [1;2]; "b": (true)}
//! set brackets "set(" ")": set(1, 2)
//! ```
//!
//! Formatting accepts any configuration. Parsing first calls
//! [`DelimiterConfig::validate`](crate::DelimiterConfig::validate) and refuses
//! configurations that could not be read back unambiguously.
