//! Lightweight timing helpers.
//!
//! [`human_duration`] renders a [`Duration`] at the coarsest unit that still
//! makes sense. [`Block`] times a scope and reports through `log` when it is
//! dropped; [`call`] and [`calls`] time closures.
//!
//! Nesting is explicit: a child block is created from its parent with
//! [`Block::nested`], which indents the child's report one level deeper.
//! There is no global depth counter.
//!
//! ```rust
//! use serde_pyrepr::timed::{calls, human_duration, Block};
//! use std::time::Duration;
//!
//! assert_eq!(human_duration(Duration::from_millis(42)), "42ms");
//!
//! let outer = Block::new("load");
//! {
//!     let _inner = outer.nested("parse");
//! }
//!
//! let info = calls("noop", 3, || ());
//! assert_eq!(info.count, 3);
//! ```

use log::info;
use std::fmt;
use std::time::{Duration, Instant};

/// Spaces per nesting level in [`Block`] reports.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Formats a duration for humans.
///
/// | Range | Output |
/// |-------|--------|
/// | below 1µs | `"{n}ns"` |
/// | below 1ms | `"{n}µs"` |
/// | below 1s | `"{n}ms"` |
/// | below 1min | `"{s}.{ms:03}s"` |
/// | otherwise | `"HH:MM:SS.mmm"`, hours not wrapped at 24 |
///
/// Every unit truncates toward zero.
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::timed::human_duration;
/// use std::time::Duration;
///
/// assert_eq!(human_duration(Duration::from_nanos(999)), "999ns");
/// assert_eq!(human_duration(Duration::from_millis(1_500)), "1.500s");
/// assert_eq!(
///     human_duration(Duration::from_secs(3 * 3600 + 2 * 60 + 1) + Duration::from_millis(1)),
///     "03:02:01.001"
/// );
/// ```
#[must_use]
pub fn human_duration(duration: Duration) -> String {
    if duration < Duration::from_micros(1) {
        format!("{}ns", duration.as_nanos())
    } else if duration < Duration::from_millis(1) {
        format!("{}µs", duration.as_micros())
    } else if duration < Duration::from_secs(1) {
        format!("{}ms", duration.as_millis())
    } else if duration < Duration::from_secs(60) {
        format!("{}.{:03}s", duration.as_secs(), duration.subsec_millis())
    } else {
        let total = duration.as_secs();
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            total / 3600,
            (total / 60) % 60,
            total % 60,
            duration.subsec_millis()
        )
    }
}

/// Measures the time between its construction and its drop.
///
/// On drop it logs `"{indent}{name}: {elapsed}"` at info level, indented by
/// `depth * indent_width` spaces.
#[derive(Debug)]
pub struct Block {
    name: String,
    depth: usize,
    indent_width: usize,
    start: Instant,
}

impl Block {
    /// Starts a top-level block.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_depth(name, 0)
    }

    /// Starts a block at an explicit nesting depth.
    #[must_use]
    pub fn with_depth(name: impl Into<String>, depth: usize) -> Self {
        Block {
            name: name.into(),
            depth,
            indent_width: DEFAULT_INDENT_WIDTH,
            start: Instant::now(),
        }
    }

    /// Sets the number of spaces per nesting level.
    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Starts a child block one level deeper than `self`.
    #[must_use]
    pub fn nested(&self, name: impl Into<String>) -> Block {
        Block {
            name: name.into(),
            depth: self.depth + 1,
            indent_width: self.indent_width,
            start: Instant::now(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Time since the block started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn report(&self, elapsed: Duration) -> String {
        format!(
            "{:indent$}{}: {}",
            "",
            self.name,
            human_duration(elapsed),
            indent = self.depth * self.indent_width
        )
    }
}

impl Drop for Block {
    fn drop(&mut self) {
        info!("{}", self.report(self.elapsed()));
    }
}

/// Times a single call of `f` and returns its result.
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::timed::call;
///
/// let sum = call("sum", || (1..=10).sum::<u32>());
/// assert_eq!(sum, 55);
/// ```
pub fn call<T>(name: &str, f: impl FnOnce() -> T) -> T {
    let _block = Block::new(name);
    f()
}

/// Statistics gathered by [`calls`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallInfo {
    pub name: String,
    pub count: usize,
    pub total: Duration,
    pub avg: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl fmt::Display for CallInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: total: {:>5} avg: {:>5}, min: {:>5}, max: {:>5}",
            self.name,
            human_duration(self.total),
            human_duration(self.avg),
            human_duration(self.min),
            human_duration(self.max)
        )
    }
}

/// Calls `f` `count` times and collects the timings.
///
/// With `count == 0`, `f` is never called and every duration is zero.
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::timed::calls;
/// use std::time::Duration;
///
/// let info = calls("idle", 0, || unreachable!());
/// assert_eq!(info.total, Duration::ZERO);
/// assert!(info.to_string().starts_with("idle: total:"));
/// ```
pub fn calls(name: &str, count: usize, mut f: impl FnMut()) -> CallInfo {
    let mut info = CallInfo {
        name: name.to_string(),
        count,
        ..CallInfo::default()
    };
    if count == 0 {
        return info;
    }

    let mut min = Duration::MAX;
    for _ in 0..count {
        let start = Instant::now();
        f();
        let elapsed = start.elapsed();
        info.total += elapsed;
        min = min.min(elapsed);
        info.max = info.max.max(elapsed);
    }
    info.min = min;
    info.avg = info.total / u32::try_from(count).unwrap_or(u32::MAX);
    info
}
