use serde::{Deserialize, Serialize};

use crate::builder::DEFAULT_PROMPT;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pager: PagerConfig,
    #[serde(default)]
    pub plugins: PluginsConfig,
}

/// How pages look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Prompt shown between pages (default: `--More--`).
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Fixed number of lines per page. Unset means the terminal height
    /// minus the prompt line.
    #[serde(default)]
    pub page_height: Option<usize>,
}

/// Which of the default plugins are active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginsConfig {
    /// Default plugins to leave out, by name (e.g. `"search"`).
    #[serde(default)]
    pub disabled: Vec<String>,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            page_height: None,
        }
    }
}
