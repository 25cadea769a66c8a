//! Plugin registry: the ordered set of plugins a page builder starts with.

use std::fmt;
use std::sync::Arc;

use crate::plugin::{
    CountPlugin, HelpPlugin, LineCountPlugin, OneLinePlugin, OnePagePlugin, Plugin, QuitPlugin,
    RepeatPlugin, SearchPlugin,
};

/// Names of the default plugins, in registration order.
pub const DEFAULT_PLUGINS: &[&str] = &[
    "count",
    "one-page",
    "one-line",
    "quit",
    "line-count",
    "search",
    "repeat",
    "help",
];

type Factory = Arc<dyn Fn() -> Box<dyn Plugin> + Send + Sync>;

/// Ordered, named plugin factories.
///
/// A builder instantiates the registry once when it is created, so every
/// builder gets its own plugin state and later edits to the registry do not
/// reach builders that already exist.
#[derive(Clone, Default)]
pub struct PluginRegistry {
    entries: Vec<(String, Factory)>,
}

impl PluginRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The eight default plugins, see [`DEFAULT_PLUGINS`].
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.add("count", || Box::new(CountPlugin::new()));
        registry.add("one-page", || Box::new(OnePagePlugin::new()));
        registry.add("one-line", || Box::new(OneLinePlugin::new()));
        registry.add("quit", || Box::new(QuitPlugin::new()));
        registry.add("line-count", || Box::new(LineCountPlugin::new()));
        registry.add("search", || Box::new(SearchPlugin::new()));
        registry.add("repeat", || Box::new(RepeatPlugin::new()));
        registry.add("help", || Box::new(HelpPlugin::new()));
        registry
    }

    /// Appends a factory. A factory already registered under `name` is
    /// replaced in place, keeping its position.
    pub fn add<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn Plugin> + Send + Sync + 'static,
    {
        let name = name.into();
        let factory: Factory = Arc::new(factory);
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = factory,
            None => self.entries.push((name, factory)),
        }
        self
    }

    /// Returns false if nothing was registered under `name`.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(existing, _)| existing != name);
        self.entries.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fresh plugin instances, in registration order.
    pub fn instantiate(&self) -> Vec<Box<dyn Plugin>> {
        self.entries.iter().map(|(_, factory)| factory()).collect()
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.names())
            .finish()
    }
}
