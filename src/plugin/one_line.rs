use crate::builder::Arguments;
use crate::error::PagerError;
use crate::plugin::{Action, HelpEntry, Plugin, PluginContext};

/// `<return>`: the next line, or `k` lines. `k` becomes the new default.
#[derive(Debug)]
pub struct OneLinePlugin {
    height: usize,
}

impl OneLinePlugin {
    pub fn new() -> Self {
        Self { height: 1 }
    }

    /// Lines shown by the next `<return>` without a count.
    pub fn height(&self) -> usize {
        self.height
    }
}

impl Default for OneLinePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for OneLinePlugin {
    fn name(&self) -> &'static str {
        "one-line"
    }

    fn keys(&self) -> Vec<char> {
        vec!['\r', '\n']
    }

    fn build_page(
        &mut self,
        ctx: &mut PluginContext<'_>,
        _key: char,
        arguments: Arguments,
    ) -> Result<Action, PagerError> {
        self.height = arguments.count_or(self.height);
        Ok(Action::Show(ctx.page_of_height(self.height)))
    }

    fn help(&self) -> Vec<HelpEntry> {
        vec![HelpEntry::new(
            "<return>",
            format!("Display next k lines of text [{}]*", self.height),
        )]
    }
}
