//! Configuration: `~/.config/anymore/config.toml`.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, PagerConfig, PluginsConfig};
