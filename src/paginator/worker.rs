//! Background pagination on a dedicated thread.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::{Condvar, Mutex};

use crate::builder::PageBuilder;
use crate::error::PagerError;
use crate::paginator::{Outcome, Paginator};

#[derive(Default)]
struct Completion {
    finished: Mutex<bool>,
    changed: Condvar,
}

impl Completion {
    fn notify(&self) {
        *self.finished.lock() = true;
        self.changed.notify_all();
    }
}

/// Runs a paginator over `chunks` on a thread named `paginator`.
///
/// Returns at once. Pair with [`crate::paginator::text_queue`] to feed text
/// while the user pages through it. The builder, its output and its plugins
/// move to the worker thread.
pub fn spawn<I, B>(chunks: I, builder: B) -> Result<PaginatorHandle, PagerError>
where
    I: IntoIterator + Send + 'static,
    I::Item: AsRef<str>,
    B: PageBuilder + 'static,
{
    let completion = Arc::new(Completion::default());
    let worker_completion = Arc::clone(&completion);

    let thread = thread::Builder::new()
        .name("paginator".to_string())
        .spawn(move || -> Result<Outcome, PagerError> {
            scopeguard::defer! {
                worker_completion.notify();
            }
            let mut paginator = Paginator::new(builder)?;
            let outcome = paginator.paginate(chunks)?;
            tracing::debug!(?outcome, "Paginator thread finished");
            Ok(outcome)
        })?;

    Ok(PaginatorHandle { thread, completion })
}

/// Handle to a paginator running on its own thread.
pub struct PaginatorHandle {
    thread: JoinHandle<Result<Outcome, PagerError>>,
    completion: Arc<Completion>,
}

impl PaginatorHandle {
    /// Waits until the run ends, by end of input or by a stop.
    pub fn join(self) -> Result<Outcome, PagerError> {
        self.thread.join().map_err(|_| PagerError::WorkerPanicked)?
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Returns true if the run ended within `timeout`.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let mut finished = self.completion.finished.lock();
        self.completion
            .changed
            .wait_while_for(&mut finished, |finished| !*finished, timeout);
        *finished
    }
}
