//! Key-to-plugin dispatch.
//!
//! ```text
//! read key ──▶ bound? ──no──▶ ignore, read again
//!                 │
//!                yes
//!                 ▼
//!         plugin.build_page ──▶ Action::Show(page)  ──▶ return page
//!                 │
//!                 └──────────▶ Action::Prompt(req)  ──▶ loop with req
//! ```
//!
//! Plugins never call back into the dispatcher. A plugin that needs another
//! key (the count prefix, a help screen, a status message) returns
//! `Action::Prompt` and the loop runs again, so re-dispatch depth costs no
//! stack.

use std::collections::{HashMap, VecDeque};

use crate::builder::PageRequest;
use crate::error::PagerError;
use crate::page::{Output, Page};
use crate::plugin::{Action, Plugin, PluginContext};
use crate::terminal::Input;

/// Input with a pushback buffer.
///
/// Keys put back are handed out again before the underlying input is asked,
/// and without showing a prompt.
pub struct KeyReader {
    input: Box<dyn Input>,
    pending: VecDeque<char>,
}

impl KeyReader {
    pub fn new(input: Box<dyn Input>) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    pub fn read_key(&mut self, prompt: &str) -> Result<char, PagerError> {
        if let Some(key) = self.pending.pop_front() {
            return Ok(key);
        }
        Ok(self.input.get_character(prompt)?)
    }

    pub fn put_back(&mut self, key: char) {
        self.pending.push_back(key);
    }

    pub fn read_line(&mut self, message: &str) -> Result<String, PagerError> {
        Ok(self.input.prompt(message)?)
    }
}

/// Per-request environment the builder lends to the dispatcher.
pub struct DispatchEnv<'a> {
    pub output: &'a Output,
    pub page_height: usize,
    pub prompt: &'a str,
}

/// Maps trigger keys to plugins and runs the prompt loop.
pub struct ActionDispatcher {
    keymap: HashMap<char, usize>,
    keys: KeyReader,
}

impl ActionDispatcher {
    /// Builds the key table. Fails if two plugins claim the same key.
    pub fn new(input: Box<dyn Input>, plugins: &[Box<dyn Plugin>]) -> Result<Self, PagerError> {
        let mut keymap: HashMap<char, usize> = HashMap::new();

        for (index, plugin) in plugins.iter().enumerate() {
            for key in plugin.keys() {
                match keymap.get(&key) {
                    Some(&owner) if owner != index => {
                        return Err(PagerError::DuplicateKey {
                            key,
                            first: plugins[owner].name(),
                            second: plugin.name(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        keymap.insert(key, index);
                    }
                }
            }
        }

        tracing::debug!(keys = keymap.len(), plugins = plugins.len(), "Built key table");

        Ok(Self {
            keymap,
            keys: KeyReader::new(input),
        })
    }

    /// Reads keys until a plugin produces a page.
    ///
    /// Unbound keys are dropped silently. The request's arguments survive
    /// ignored keys, so `12x<space>` still shows 12 lines.
    pub fn dispatch(
        &mut self,
        plugins: &mut [Box<dyn Plugin>],
        env: DispatchEnv<'_>,
        mut request: PageRequest,
    ) -> Result<Box<dyn Page>, PagerError> {
        loop {
            let key = {
                let prompt = request.message.as_deref().unwrap_or(env.prompt);
                self.keys.read_key(prompt)?
            };

            let Some(&index) = self.keymap.get(&key) else {
                tracing::trace!(?key, "Ignoring unbound key");
                continue;
            };

            let (preceding, rest) = plugins.split_at_mut(index);
            let Some((plugin, following)) = rest.split_first_mut() else {
                continue;
            };

            let PageRequest { message, arguments } = request;
            tracing::debug!(plugin = plugin.name(), ?key, ?arguments, "Dispatching key");

            let mut ctx = PluginContext {
                keys: &mut self.keys,
                output: env.output,
                page_height: env.page_height,
                prompt: message.as_deref().unwrap_or(env.prompt),
                preceding,
                following,
            };

            match plugin.build_page(&mut ctx, key, arguments)? {
                Action::Show(page) => return Ok(page),
                Action::Prompt(next) => request = next,
            }
        }
    }
}
