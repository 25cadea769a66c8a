use crate::builder::Arguments;
use crate::error::PagerError;
use crate::plugin::{Action, HelpEntry, Plugin, PluginContext};

/// `<space>`: the next screenful, or `k` lines.
#[derive(Debug, Default)]
pub struct OnePagePlugin;

impl OnePagePlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for OnePagePlugin {
    fn name(&self) -> &'static str {
        "one-page"
    }

    fn keys(&self) -> Vec<char> {
        vec![' ']
    }

    fn build_page(
        &mut self,
        ctx: &mut PluginContext<'_>,
        _key: char,
        arguments: Arguments,
    ) -> Result<Action, PagerError> {
        let height = arguments.count_or(ctx.page_height());
        Ok(Action::Show(ctx.page_of_height(height)))
    }

    fn help(&self) -> Vec<HelpEntry> {
        vec![HelpEntry::new(
            "<space>",
            "Display next k lines of text [current screen size]",
        )]
    }
}
