//! Collaborators the page builder talks to: where keys come from and how big
//! the screen is. Nothing outside this module touches the terminal directly.

mod input;
mod screen;

use std::io;

pub use input::TerminalInput;
pub use screen::{FixedSizeScreen, ScreenDimensions, TerminalScreen};

/// Source of user decisions at the prompt.
///
/// Returning an [`io::ErrorKind::Interrupted`] error from either method means
/// the user cancelled (Ctrl-C); the page builder treats it as a stop.
pub trait Input: Send {
    /// Show `prompt` and read a single key.
    fn get_character(&mut self, prompt: &str) -> io::Result<char>;

    /// Show `message` and read a whole line, without its terminator.
    fn prompt(&mut self, message: &str) -> io::Result<String>;
}
