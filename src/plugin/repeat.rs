use crate::builder::Arguments;
use crate::error::PagerError;
use crate::page::Page;
use crate::plugin::{Action, HelpEntry, Plugin, PluginContext};

const NOT_REPEATABLE: &str = "--Previous command can not be repeated--";

/// `.`: run the previous command again.
///
/// Keeps a fresh copy of the last page the builder handed out. Pages that
/// cannot be repeated clear the copy.
#[derive(Default)]
pub struct RepeatPlugin {
    last: Option<Box<dyn Page>>,
}

impl RepeatPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_repeat(&self) -> bool {
        self.last.is_some()
    }
}

impl Plugin for RepeatPlugin {
    fn name(&self) -> &'static str {
        "repeat"
    }

    fn keys(&self) -> Vec<char> {
        vec!['.']
    }

    fn build_page(
        &mut self,
        _ctx: &mut PluginContext<'_>,
        _key: char,
        _arguments: Arguments,
    ) -> Result<Action, PagerError> {
        match self.last.take() {
            Some(page) => Ok(Action::Show(page)),
            None => Ok(Action::reprompt_with(NOT_REPEATABLE)),
        }
    }

    fn wrap_page(&mut self, page: Box<dyn Page>) -> Box<dyn Page> {
        self.last = page.repeat();
        page
    }

    fn help(&self) -> Vec<HelpEntry> {
        vec![HelpEntry::new(".", "Repeat previous command")]
    }
}
