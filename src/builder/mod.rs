//! Page builders: decide what the next page is once the current one fills.

mod arguments;
mod dispatcher;
mod more;

use crate::error::PagerError;
use crate::page::Page;

pub use arguments::{Arguments, PageRequest};
pub use dispatcher::{ActionDispatcher, DispatchEnv, KeyReader};
pub use more::{MorePageBuilder, DEFAULT_PROMPT};

/// Builds the pages the paginator fills.
///
/// `build_first_page` is called once, when pagination starts.
/// `build_next_page` is called every time the current page is full and
/// returns [`PagerError::Stopped`] when no further page should be shown.
pub trait PageBuilder: Send {
    fn build_first_page(&mut self) -> Result<Box<dyn Page>, PagerError>;

    fn build_next_page(&mut self) -> Result<Box<dyn Page>, PagerError>;
}
