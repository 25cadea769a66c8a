use std::any::Any;

use regex::Regex;

use crate::builder::Arguments;
use crate::error::PagerError;
use crate::page::Page;
use crate::plugin::{Action, HelpEntry, Plugin, PluginContext};

const SKIPPING: &str = "...skipping\n";
const NO_PREVIOUS_PATTERN: &str = "--No previous regular expression--";

/// `/pattern` skips ahead to the kth line matching a regular expression,
/// `n` repeats the last search.
///
/// An empty pattern reuses the previous one.
#[derive(Debug, Default)]
pub struct SearchPlugin {
    pattern: Option<Regex>,
}

impl SearchPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last pattern that compiled.
    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }

    fn search_page(&self, ctx: &PluginContext<'_>, pattern: Regex, arguments: Arguments) -> Result<Action, PagerError> {
        ctx.output().write_str(SKIPPING)?;
        let required = arguments.count_or(1);
        tracing::debug!(pattern = pattern.as_str(), required, "Searching");
        Ok(Action::Show(Box::new(SearchPage::new(
            pattern,
            ctx.full_page(),
            required,
        ))))
    }
}

impl Plugin for SearchPlugin {
    fn name(&self) -> &'static str {
        "search"
    }

    fn keys(&self) -> Vec<char> {
        vec!['/', 'n']
    }

    fn build_page(
        &mut self,
        ctx: &mut PluginContext<'_>,
        key: char,
        arguments: Arguments,
    ) -> Result<Action, PagerError> {
        if key == '/' {
            let text = ctx.read_line("/")?;
            if !text.is_empty() {
                match Regex::new(&text) {
                    Ok(pattern) => self.pattern = Some(pattern),
                    Err(err) => {
                        tracing::warn!(pattern = %text, error = %err, "Invalid search pattern");
                        return Ok(Action::reprompt_with(format!(
                            "--Invalid regular expression: {}--",
                            describe_regex_error(&err)
                        )));
                    }
                }
            }
        }

        match self.pattern.clone() {
            Some(pattern) => self.search_page(ctx, pattern, arguments),
            None => Ok(Action::reprompt_with(NO_PREVIOUS_PATTERN)),
        }
    }

    fn help(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry::new(
                "/<regular expression>",
                "Search for kth occurrence of the regular expression [1]",
            ),
            HelpEntry::new(
                "n",
                "Search for kth occurrence of the last regular expression [1]",
            ),
        ]
    }
}

/// One line fits the prompt; syntax errors put the reason on the last line.
fn describe_regex_error(err: &regex::Error) -> String {
    let text = err.to_string();
    let reason = text
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");
    reason.strip_prefix("error: ").unwrap_or(reason).to_string()
}

/// Swallows lines until the kth match, then behaves like `next_page`.
///
/// The matching line itself is the first line shown.
pub struct SearchPage {
    matcher: Regex,
    next_page: Box<dyn Page>,
    required: usize,
    matches: usize,
}

impl SearchPage {
    pub fn new(matcher: Regex, next_page: Box<dyn Page>, required: usize) -> Self {
        Self {
            matcher,
            next_page,
            required,
            matches: 0,
        }
    }

    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }

    pub fn required_matches(&self) -> usize {
        self.required
    }

    pub fn next_page(&self) -> &dyn Page {
        self.next_page.as_ref()
    }

    pub fn has_match(&self) -> bool {
        self.matches >= self.required
    }
}

impl Page for SearchPage {
    fn is_full(&self) -> bool {
        self.has_match() && self.next_page.is_full()
    }

    fn add_line(&mut self, line: &str) -> Result<(), PagerError> {
        if self.is_full() {
            return Err(PagerError::PageFull);
        }
        // `$` must match before the terminator, not only at the very end.
        let text = line.strip_suffix('\n').unwrap_or(line);
        if !self.has_match() && self.matcher.is_match(text) {
            self.matches += 1;
        }
        if self.has_match() {
            self.next_page.add_line(line)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), PagerError> {
        if self.has_match() {
            self.next_page.flush()?;
        }
        Ok(())
    }

    fn repeat(&self) -> Option<Box<dyn Page>> {
        let next_page = self.next_page.repeat()?;
        Some(Box::new(SearchPage::new(
            self.matcher.clone(),
            next_page,
            self.required,
        )))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
