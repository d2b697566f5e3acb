//! Live value sources and their resolution to display text.
//!
//! A value view reads its text either by polling a callback or by
//! borrowing a string owned by the caller. Nothing is cached: every
//! redraw resolves the value again.

use core::cell::RefCell;
use core::fmt;
use core::fmt::Write as _;

use heapless::String;

use crate::config::VALUE_CAPACITY;

/// Fixed-capacity resolved value.
pub type ValueText = String<VALUE_CAPACITY>;

/// Callback writing the current value. An `Err` blanks the value.
pub type PollFn<'a> = &'a dyn Fn(&mut dyn fmt::Write) -> fmt::Result;

/// Where a value view gets its text from.
#[derive(Clone, Copy)]
pub enum ValueSource<'a> {
    /// Invoked on every redraw.
    Poll(PollFn<'a>),
    /// Caller-owned text, read in place on every redraw.
    External(&'a RefCell<ValueText>),
}

impl<'a> ValueSource<'a> {
    pub fn poll<F>(f: &'a F) -> Self
    where
        F: Fn(&mut dyn fmt::Write) -> fmt::Result,
    {
        ValueSource::Poll(f)
    }

    pub fn external(text: &'a RefCell<ValueText>) -> Self {
        ValueSource::External(text)
    }

    /// Pick a source from optional parts; the callback wins if both are set.
    pub fn pick(
        poll: Option<PollFn<'a>>,
        external: Option<&'a RefCell<ValueText>>,
    ) -> Option<Self> {
        poll.map(ValueSource::Poll)
            .or_else(|| external.map(ValueSource::External))
    }
}

/// Resolve the current text of `source` into `out`.
///
/// Never fails: a missing source, a failing callback, or an external
/// value that is mutably borrowed right now all yield an empty string.
/// Overlong values are truncated to [`VALUE_CAPACITY`].
pub fn resolve_value(source: Option<&ValueSource<'_>>, out: &mut ValueText) {
    out.clear();
    match source {
        Some(ValueSource::Poll(f)) => {
            if f(&mut Truncating(out)).is_err() {
                out.clear();
            }
        }
        Some(ValueSource::External(text)) => {
            if let Ok(text) = text.try_borrow() {
                let _ = Truncating(out).write_str(text.as_str());
            }
        }
        None => {}
    }
}

/// Writer that drops whatever does not fit instead of failing.
struct Truncating<'b>(&'b mut ValueText);

impl fmt::Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}
