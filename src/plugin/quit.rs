use crate::builder::Arguments;
use crate::error::PagerError;
use crate::plugin::{Action, HelpEntry, Plugin, PluginContext};

#[derive(Debug, Default)]
pub struct QuitPlugin;

impl QuitPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for QuitPlugin {
    fn name(&self) -> &'static str {
        "quit"
    }

    fn keys(&self) -> Vec<char> {
        vec!['q', 'Q']
    }

    fn build_page(
        &mut self,
        _ctx: &mut PluginContext<'_>,
        _key: char,
        _arguments: Arguments,
    ) -> Result<Action, PagerError> {
        Err(PagerError::Stopped)
    }

    fn help(&self) -> Vec<HelpEntry> {
        vec![HelpEntry::new("q or Q or <interrupt>", "Exit from more")]
    }
}
