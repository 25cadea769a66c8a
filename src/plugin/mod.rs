//! Plugins decide what happens at the `--More--` prompt.
//!
//! Each plugin claims one or more trigger keys. When the user presses one,
//! the dispatcher calls the plugin's [`Plugin::build_page`], which either
//! produces the next page or asks for another round at the prompt. Plugins
//! may also decorate every page handed out ([`Plugin::wrap_page`]) and
//! describe themselves for the help screen.
//!
//! The default set, in registration order:
//!
//! | name         | keys          | effect                                       |
//! |--------------|---------------|----------------------------------------------|
//! | `count`      | `0`-`9`       | numeric prefix for the next command          |
//! | `one-page`   | space         | next k lines (default: a screenful)          |
//! | `one-line`   | return        | next k lines (default 1, k sticks)           |
//! | `quit`       | `q` `Q`       | stop output                                  |
//! | `line-count` | `=` `l`       | show line number / toggle numbering          |
//! | `search`     | `/` `n`       | skip to the kth match of a regex             |
//! | `repeat`     | `.`           | repeat the previous command                  |
//! | `help`       | `h` `?`       | print the help screen                        |

mod context;
mod count;
mod help;
mod line_count;
mod one_line;
mod one_page;
mod quit;
mod registry;
mod repeat;
mod search;

use crate::builder::{Arguments, PageRequest};
use crate::error::PagerError;
use crate::page::Page;

pub use context::PluginContext;
pub use count::CountPlugin;
pub use help::{format_help, HelpPlugin};
pub use line_count::LineCountPlugin;
pub use one_line::OneLinePlugin;
pub use one_page::OnePagePlugin;
pub use quit::QuitPlugin;
pub use registry::{PluginRegistry, DEFAULT_PLUGINS};
pub use repeat::RepeatPlugin;
pub use search::{SearchPage, SearchPlugin};

/// What a plugin wants the dispatcher to do after a key press.
pub enum Action {
    /// Hand this page to the paginator.
    Show(Box<dyn Page>),
    /// Prompt again, with the given message and arguments.
    Prompt(PageRequest),
}

impl Action {
    /// Prompt again with the default prompt and no arguments.
    pub fn reprompt() -> Self {
        Self::Prompt(PageRequest::default())
    }

    pub fn reprompt_with(message: impl Into<String>) -> Self {
        Self::Prompt(PageRequest::with_message(message))
    }
}

/// One line of the help screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub command: String,
    pub description: String,
}

impl HelpEntry {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

/// An action available at the prompt.
pub trait Plugin: Send {
    /// Stable name, used for registry lookups and error messages.
    fn name(&self) -> &'static str;

    /// Keys that trigger [`Plugin::build_page`]. Keys must not overlap
    /// between plugins.
    fn keys(&self) -> Vec<char>;

    /// Called when the user pressed one of [`Plugin::keys`].
    ///
    /// `arguments` carries the numeric prefix the user typed, if any.
    /// Return [`PagerError::Stopped`] to end output.
    fn build_page(
        &mut self,
        ctx: &mut PluginContext<'_>,
        key: char,
        arguments: Arguments,
    ) -> Result<Action, PagerError>;

    /// Called for every page the builder hands out, including pages built
    /// by other plugins. Wrapping lets a plugin see or rewrite every line.
    fn wrap_page(&mut self, page: Box<dyn Page>) -> Box<dyn Page> {
        page
    }

    fn help(&self) -> Vec<HelpEntry> {
        Vec::new()
    }
}
