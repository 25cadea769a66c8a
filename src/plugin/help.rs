use crate::builder::Arguments;
use crate::error::PagerError;
use crate::plugin::{Action, HelpEntry, Plugin, PluginContext};

const RULE: &str =
    "-------------------------------------------------------------------------------";

const HEADER: &str = "Most commands can optionally be preceded by an integer argument k.\n\
    The default values are printed in brackets.\n\
    A star (*) indicates the value of k becomes the new default.";

/// `h` or `?`: print what every registered plugin does.
#[derive(Debug, Default)]
pub struct HelpPlugin;

impl HelpPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for HelpPlugin {
    fn name(&self) -> &'static str {
        "help"
    }

    fn keys(&self) -> Vec<char> {
        vec!['h', '?']
    }

    fn build_page(
        &mut self,
        ctx: &mut PluginContext<'_>,
        _key: char,
        _arguments: Arguments,
    ) -> Result<Action, PagerError> {
        let text = format_help(&ctx.help_entries(&*self));
        ctx.output().write_str(&text)?;
        ctx.output().flush()?;
        Ok(Action::reprompt())
    }

    fn help(&self) -> Vec<HelpEntry> {
        vec![HelpEntry::new("h or ?", "Display this help text")]
    }
}

/// Renders the help screen, commands left-aligned to the widest one.
pub fn format_help(entries: &[HelpEntry]) -> String {
    let width = entries
        .iter()
        .map(|entry| entry.command.chars().count())
        .max()
        .unwrap_or(0);

    let commands: Vec<String> = entries
        .iter()
        .map(|entry| format!("{:<width$}  {}", entry.command, entry.description))
        .collect();

    format!("\n{RULE}\n{HEADER}\n{RULE}\n{}\n{RULE}\n", commands.join("\n"))
}
