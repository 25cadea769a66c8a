//! Pages: bounded units of output.
//!
//! ```text
//! Paginator ──add_line──▶ WrappedPage ──▶ WrappedPage ──▶ PageOfHeight ──▶ Output
//!                          (outermost)                     (innermost)
//! ```
//!
//! The paginator keeps adding lines to the current page until it reports
//! full, then flushes it exactly once and asks the page builder for the next.

mod height;
mod output;
mod wrapped;

use std::any::Any;

use crate::error::PagerError;

pub use height::PageOfHeight;
pub use output::Output;
pub use wrapped::{LineHook, WrappedPage};

/// A single output page.
pub trait Page: Send {
    /// True once the page accepts no more lines. Never flips back to false.
    fn is_full(&self) -> bool;

    /// Add one line, normally including its trailing `'\n'`.
    ///
    /// Callers check [`Page::is_full`] first. Adding to a full page fails
    /// with [`PagerError::PageFull`].
    fn add_line(&mut self, line: &str) -> Result<(), PagerError>;

    /// Called once when the page goes out of service, either because it
    /// filled up or because the input ran out.
    fn flush(&mut self) -> Result<(), PagerError> {
        Ok(())
    }

    /// A fresh page with the same configuration and nothing added to it.
    ///
    /// Pages returning `Some` can be repeated with the `.` command.
    fn repeat(&self) -> Option<Box<dyn Page>> {
        None
    }

    /// The page this one decorates, if any.
    fn inner(&self) -> Option<&dyn Page> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

/// Walks a chain of wrappers down to the concrete page at its core.
pub fn innermost(page: &dyn Page) -> &dyn Page {
    let mut current = page;
    while let Some(inner) = current.inner() {
        current = inner;
    }
    current
}
