//! Shared output sink.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

type Sink = Box<dyn Write + Send>;

/// Cloneable handle to the stream pages write into.
///
/// Every page built during a run holds a clone. The sink itself belongs to
/// whoever created the handle; pages only write to it and flush it.
#[derive(Clone)]
pub struct Output {
    sink: Arc<Mutex<Sink>>,
}

impl Output {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn write_str(&self, text: &str) -> io::Result<()> {
        self.sink.lock().write_all(text.as_bytes())
    }

    pub fn flush(&self) -> io::Result<()> {
        self.sink.lock().flush()
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("handles", &Arc::strong_count(&self.sink))
            .finish()
    }
}
