use std::io::{self, Write};

use crossterm::cursor::{MoveLeft, MoveToColumn};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{execute, queue};

use crate::terminal::Input;

/// Reads keys from the controlling terminal.
///
/// Raw mode is only enabled while a prompt is on screen, and the prompt line
/// is erased again before returning, so paged text never interleaves with it.
/// crossterm reads from the tty even when stdin is a pipe, which is the usual
/// `producer | anymore` setup.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }

    fn prompted<T>(&mut self, message: &str, read: impl FnOnce() -> io::Result<T>) -> io::Result<T> {
        enable_raw_mode()?;
        scopeguard::defer! {
            let _ = execute!(io::stdout(), MoveToColumn(0), Clear(ClearType::CurrentLine));
            let _ = disable_raw_mode();
        }

        let mut stdout = io::stdout();
        queue!(stdout, Print(message))?;
        stdout.flush()?;

        read()
    }
}

impl Input for TerminalInput {
    fn get_character(&mut self, prompt: &str) -> io::Result<char> {
        self.prompted(prompt, || loop {
            let key = next_key()?;
            if is_interrupt(&key) {
                return Err(interrupted());
            }
            if let Some(ch) = key_to_char(&key) {
                return Ok(ch);
            }
        })
    }

    fn prompt(&mut self, message: &str) -> io::Result<String> {
        self.prompted(message, || {
            let mut stdout = io::stdout();
            let mut line = String::new();
            loop {
                let key = next_key()?;
                if is_interrupt(&key) {
                    return Err(interrupted());
                }
                match key.code {
                    KeyCode::Enter => return Ok(line),
                    KeyCode::Esc => return Ok(String::new()),
                    KeyCode::Backspace => {
                        if line.pop().is_some() {
                            execute!(stdout, MoveLeft(1), Clear(ClearType::UntilNewLine))?;
                        }
                    }
                    KeyCode::Char(ch) => {
                        line.push(ch);
                        execute!(stdout, Print(ch))?;
                    }
                    _ => {}
                }
            }
        })
    }
}

fn next_key() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Release {
                return Ok(key);
            }
        }
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'c'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn interrupted() -> io::Error {
    io::Error::new(io::ErrorKind::Interrupted, "interrupted by user")
}

/// Maps a key event to the character a plugin would register for it.
fn key_to_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(ch) => Some(ch),
        KeyCode::Enter => Some('\r'),
        KeyCode::Tab => Some('\t'),
        KeyCode::Esc => Some('\x1b'),
        KeyCode::Backspace => Some('\x7f'),
        _ => None,
    }
}
