use crate::builder::{ActionDispatcher, DispatchEnv, PageBuilder, PageRequest};
use crate::error::PagerError;
use crate::page::{Output, Page, PageOfHeight};
use crate::plugin::{Plugin, PluginRegistry};
use crate::terminal::{Input, ScreenDimensions, TerminalInput, TerminalScreen};

pub const DEFAULT_PROMPT: &str = "--More--";

/// Lines of the screen kept free for the prompt.
const PROMPT_LINES: usize = 1;

/// A page builder that behaves like `more`.
///
/// Full pages are sized to the screen minus the prompt line. Everything that
/// happens at the prompt is decided by plugins; every page handed out, the
/// first one included, is passed through each plugin's `wrap_page` so that
/// the first registered plugin ends up outermost.
pub struct MorePageBuilder {
    output: Output,
    screen: Box<dyn ScreenDimensions>,
    plugins: Vec<Box<dyn Plugin>>,
    dispatcher: ActionDispatcher,
    prompt: String,
}

impl MorePageBuilder {
    /// Fails with [`PagerError::DuplicateKey`] if two plugins share a key.
    pub fn new<I, S>(
        input: I,
        output: Output,
        screen: S,
        plugins: Vec<Box<dyn Plugin>>,
    ) -> Result<Self, PagerError>
    where
        I: Input + 'static,
        S: ScreenDimensions + 'static,
    {
        let dispatcher = ActionDispatcher::new(Box::new(input), &plugins)?;
        Ok(Self {
            output,
            screen: Box::new(screen),
            plugins,
            dispatcher,
            prompt: DEFAULT_PROMPT.to_string(),
        })
    }

    /// Instantiates the registry's plugins. Later changes to the registry do
    /// not affect the returned builder.
    pub fn from_registry<I, S>(
        registry: &PluginRegistry,
        input: I,
        output: Output,
        screen: S,
    ) -> Result<Self, PagerError>
    where
        I: Input + 'static,
        S: ScreenDimensions + 'static,
    {
        Self::new(input, output, screen, registry.instantiate())
    }

    /// Reads keys from the terminal, writes to stdout and sizes pages to the
    /// terminal window.
    pub fn for_terminal(registry: &PluginRegistry) -> Result<Self, PagerError> {
        Self::from_registry(registry, TerminalInput::new(), Output::stdout(), TerminalScreen::new())
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Height of a full page: the screen minus the prompt line.
    pub fn page_height(&self) -> usize {
        self.screen.height().saturating_sub(PROMPT_LINES)
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn plugins(&self) -> &[Box<dyn Plugin>] {
        &self.plugins
    }

    /// Prompts (with `request.message`, or the default prompt) until a
    /// plugin produces a page, then wraps it.
    pub fn build_next_page_with(&mut self, request: PageRequest) -> Result<Box<dyn Page>, PagerError> {
        let env = DispatchEnv {
            output: &self.output,
            page_height: self.page_height(),
            prompt: &self.prompt,
        };

        let page = match self.dispatcher.dispatch(&mut self.plugins, env, request) {
            Ok(page) => page,
            Err(PagerError::Stopped) => {
                tracing::info!("Output stopped at the prompt");
                return Err(PagerError::Stopped);
            }
            Err(err) => return Err(err),
        };

        Ok(self.wrap(page))
    }

    fn wrap(&mut self, page: Box<dyn Page>) -> Box<dyn Page> {
        self.plugins
            .iter_mut()
            .rev()
            .fold(page, |page, plugin| plugin.wrap_page(page))
    }
}

impl PageBuilder for MorePageBuilder {
    fn build_first_page(&mut self) -> Result<Box<dyn Page>, PagerError> {
        let page = PageOfHeight::new(self.page_height(), self.output.clone());
        tracing::trace!(height = page.height(), "Built first page");
        Ok(self.wrap(Box::new(page)))
    }

    fn build_next_page(&mut self) -> Result<Box<dyn Page>, PagerError> {
        self.build_next_page_with(PageRequest::default())
    }
}
