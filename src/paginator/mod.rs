//! The pagination loop: text in, pages out.

mod collector;
mod engine;
mod queue;
mod worker;

use crate::builder::PageBuilder;
use crate::error::PagerError;

pub use collector::LineCollector;
pub use engine::{Outcome, Paginator, PaginatorState};
pub use queue::{text_queue, Chunk, TextReceiver, TextSender};
pub use worker::{spawn, PaginatorHandle};

/// Paginates `chunks` on the calling thread.
pub fn paginate<I, B>(chunks: I, builder: B) -> Result<Outcome, PagerError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    B: PageBuilder,
{
    Paginator::new(builder)?.paginate(chunks)
}
