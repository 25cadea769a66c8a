use crate::builder::KeyReader;
use crate::error::PagerError;
use crate::page::{Output, Page, PageOfHeight};
use crate::plugin::{HelpEntry, Plugin};

/// What a plugin can reach while handling a key press.
///
/// Built by the dispatcher for a single `build_page` call.
pub struct PluginContext<'a> {
    pub(crate) keys: &'a mut KeyReader,
    pub(crate) output: &'a Output,
    pub(crate) page_height: usize,
    pub(crate) prompt: &'a str,
    pub(crate) preceding: &'a [Box<dyn Plugin>],
    pub(crate) following: &'a [Box<dyn Plugin>],
}

impl PluginContext<'_> {
    /// Reads one more key, showing the current prompt.
    pub fn read_key(&mut self) -> Result<char, PagerError> {
        self.keys.read_key(self.prompt)
    }

    /// The next [`PluginContext::read_key`] (here or in a later dispatch
    /// round) returns `key` without prompting.
    pub fn put_back(&mut self, key: char) {
        self.keys.put_back(key);
    }

    pub fn read_line(&mut self, message: &str) -> Result<String, PagerError> {
        self.keys.read_line(message)
    }

    pub fn output(&self) -> &Output {
        self.output
    }

    /// Height of a full page.
    pub fn page_height(&self) -> usize {
        self.page_height
    }

    /// The prompt shown for this dispatch round.
    pub fn prompt(&self) -> &str {
        self.prompt
    }

    pub fn page_of_height(&self, height: usize) -> Box<dyn Page> {
        Box::new(PageOfHeight::new(height, self.output.clone()))
    }

    pub fn full_page(&self) -> Box<dyn Page> {
        self.page_of_height(self.page_height)
    }

    /// Help of every registered plugin, in registration order. `current` is
    /// the plugin being dispatched, which the context cannot see otherwise.
    pub fn help_entries(&self, current: &dyn Plugin) -> Vec<HelpEntry> {
        self.preceding
            .iter()
            .map(|plugin| plugin.help())
            .chain(std::iter::once(current.help()))
            .chain(self.following.iter().map(|plugin| plugin.help()))
            .flatten()
            .collect()
    }
}
