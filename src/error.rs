//! Error types for the pagination engine.

use std::io;
use std::str::Utf8Error;

use thiserror::Error;

/// Errors raised while building pages or feeding text through the paginator.
#[derive(Debug, Error)]
pub enum PagerError {
    /// Output was stopped by the user or by a plugin.
    ///
    /// This is not a fault. The paginator's public entry points turn it
    /// into [`Outcome::Stopped`](crate::paginator::Outcome::Stopped).
    #[error("output stopped")]
    Stopped,

    /// Two plugins claim the same trigger key.
    #[error("key {key:?} is claimed by both the '{first}' and '{second}' plugins")]
    DuplicateKey {
        key: char,
        first: &'static str,
        second: &'static str,
    },

    /// A chunk handed to the line collector was not valid text.
    #[error("input chunk is not valid UTF-8: {0}")]
    InvalidInput(#[from] Utf8Error),

    /// A line was added to a page that already reported itself full.
    #[error("line added to a page that is already full")]
    PageFull,

    /// Reading from the input source or writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),

    /// The background paginator thread panicked.
    #[error("paginator worker thread panicked")]
    WorkerPanicked,
}

impl PagerError {
    /// Returns true for the stop signal.
    pub fn is_stop(&self) -> bool {
        matches!(self, Self::Stopped)
    }
}

impl From<io::Error> for PagerError {
    /// An interrupted read is the user pressing Ctrl-C at the prompt.
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::Interrupted {
            Self::Stopped
        } else {
            Self::Io(err)
        }
    }
}
