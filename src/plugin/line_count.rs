use std::sync::Arc;

use parking_lot::Mutex;

use crate::builder::Arguments;
use crate::error::PagerError;
use crate::page::{LineHook, Page, WrappedPage};
use crate::plugin::{Action, HelpEntry, Plugin, PluginContext};

#[derive(Debug, Default)]
struct Counter {
    lines: usize,
    numbering: bool,
}

/// `=` shows how many lines went by, `l` toggles `N: ` prefixes.
///
/// Every page is wrapped with a counter sharing this plugin's state, so the
/// count keeps running across pages.
#[derive(Debug, Default)]
pub struct LineCountPlugin {
    counter: Arc<Mutex<Counter>>,
}

impl LineCountPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line_count(&self) -> usize {
        self.counter.lock().lines
    }

    pub fn numbering_enabled(&self) -> bool {
        self.counter.lock().numbering
    }

    fn describe_numbering(&self) -> &'static str {
        if self.numbering_enabled() {
            "enabled"
        } else {
            "disabled"
        }
    }
}

impl Plugin for LineCountPlugin {
    fn name(&self) -> &'static str {
        "line-count"
    }

    fn keys(&self) -> Vec<char> {
        vec!['=', 'l']
    }

    fn build_page(
        &mut self,
        _ctx: &mut PluginContext<'_>,
        key: char,
        _arguments: Arguments,
    ) -> Result<Action, PagerError> {
        if key == 'l' {
            let mut counter = self.counter.lock();
            counter.numbering = !counter.numbering;
            tracing::debug!(enabled = counter.numbering, "Toggled line numbers");
            drop(counter);
            return Ok(Action::reprompt_with(format!(
                "--Line numbers are now {}--",
                self.describe_numbering()
            )));
        }

        Ok(Action::reprompt_with(format!("--{}--", self.line_count())))
    }

    fn wrap_page(&mut self, page: Box<dyn Page>) -> Box<dyn Page> {
        Box::new(WrappedPage::new(
            LineCounter {
                counter: Arc::clone(&self.counter),
            },
            page,
        ))
    }

    fn help(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry::new("=", "Display current line number"),
            HelpEntry::new(
                "l",
                format!(
                    "Toggle printing line number on every line [currently {}]",
                    self.describe_numbering()
                ),
            ),
        ]
    }
}

struct LineCounter {
    counter: Arc<Mutex<Counter>>,
}

impl LineHook for LineCounter {
    fn on_add_line(&mut self, line: String) -> String {
        let mut counter = self.counter.lock();
        counter.lines += 1;
        if counter.numbering {
            format!("{}: {}", counter.lines, line)
        } else {
            line
        }
    }
}
