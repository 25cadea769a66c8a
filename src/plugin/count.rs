use crate::builder::{Arguments, PageRequest};
use crate::error::PagerError;
use crate::plugin::{Action, Plugin, PluginContext};

/// Numeric prefix: `12<space>` shows twelve lines.
///
/// Reads digits until the first non-digit, which is put back so the next
/// dispatch round treats it as the trigger key.
#[derive(Debug, Default)]
pub struct CountPlugin;

impl CountPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for CountPlugin {
    fn name(&self) -> &'static str {
        "count"
    }

    fn keys(&self) -> Vec<char> {
        ('0'..='9').collect()
    }

    fn build_page(
        &mut self,
        ctx: &mut PluginContext<'_>,
        key: char,
        _arguments: Arguments,
    ) -> Result<Action, PagerError> {
        let mut count = 0usize;
        let mut key = key;

        while let Some(digit) = key.to_digit(10) {
            count = count.saturating_mul(10).saturating_add(digit as usize);
            key = ctx.read_key()?;
        }
        ctx.put_back(key);

        tracing::trace!(count, "Read count prefix");
        Ok(Action::Prompt(PageRequest::with_arguments(Arguments::with_count(count))))
    }
}
