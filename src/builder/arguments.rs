/// Options the user typed before a trigger key.
///
/// Created fresh for every next-page request. A plugin that re-dispatches
/// hands the bag on explicitly through [`PageRequest::with_arguments`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Arguments {
    /// Numeric prefix, e.g. `12` for `12<space>`. `None` when no digits were typed.
    pub count: Option<usize>,
}

impl Arguments {
    pub fn with_count(count: usize) -> Self {
        Self { count: Some(count) }
    }

    pub fn count_or(&self, default: usize) -> usize {
        self.count.unwrap_or(default)
    }
}

/// What the dispatcher should do on its next round: which prompt to show
/// and which arguments to hand to the next triggered plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Replaces the default prompt (e.g. `--No previous regular expression--`).
    pub message: Option<String>,
    pub arguments: Arguments,
}

impl PageRequest {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            arguments: Arguments::default(),
        }
    }

    pub fn with_arguments(arguments: Arguments) -> Self {
        Self {
            message: None,
            arguments,
        }
    }
}
