//! Shared test utilities: scripted input, spy output, recording builders.

#![allow(dead_code, unused_imports)]

use anymore::builder::PageBuilder;
use anymore::page::{Output, Page};
use anymore::plugin::PluginRegistry;
use anymore::terminal::{FixedSizeScreen, Input};
use anymore::{MorePageBuilder, PagerError};
use parking_lot::Mutex;
use std::any::Any;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub type SpyBuffer = Arc<Mutex<Vec<u8>>>;

/// Key that makes [`ScriptedInput`] report a Ctrl-C.
pub const INTERRUPT: char = '\u{3}';

// ============================================================================
// Scripted input
// ============================================================================

/// Plays back a fixed sequence of keys and lines and records every prompt.
///
/// Running out of keys is an `UnexpectedEof` error, so a test that reads
/// more keys than it scripted fails loudly.
#[derive(Clone, Default)]
pub struct ScriptedInput {
    keys: Arc<Mutex<VecDeque<char>>>,
    lines: Arc<Mutex<VecDeque<String>>>,
    key_prompts: Arc<Mutex<Vec<String>>>,
    line_prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedInput {
    pub fn with_keys(keys: &str) -> Self {
        let input = Self::default();
        input.keys.lock().extend(keys.chars());
        input
    }

    pub fn with_lines(self, lines: &[&str]) -> Self {
        self.lines
            .lock()
            .extend(lines.iter().map(|line| line.to_string()));
        self
    }

    /// Prompts shown while waiting for a key, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.key_prompts.lock().clone()
    }

    /// Prompts shown while reading a line.
    pub fn line_prompts(&self) -> Vec<String> {
        self.line_prompts.lock().clone()
    }

    pub fn remaining_keys(&self) -> usize {
        self.keys.lock().len()
    }
}

impl Input for ScriptedInput {
    fn get_character(&mut self, prompt: &str) -> io::Result<char> {
        self.key_prompts.lock().push(prompt.to_string());
        match self.keys.lock().pop_front() {
            Some(INTERRUPT) => Err(io::Error::new(io::ErrorKind::Interrupted, "ctrl-c")),
            Some(key) => Ok(key),
            None => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "script ran out of keys",
            )),
        }
    }

    fn prompt(&mut self, message: &str) -> io::Result<String> {
        self.line_prompts.lock().push(message.to_string());
        self.lines.lock().pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script ran out of lines")
        })
    }
}

// ============================================================================
// Spy output
// ============================================================================

/// Captures everything written to an [`Output`] and counts flushes.
#[derive(Clone, Default)]
pub struct Spy {
    buffer: SpyBuffer,
    flushes: Arc<AtomicUsize>,
}

impl Spy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> Output {
        Output::new(SpyWriter(self.clone()))
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn flushes(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }
}

struct SpyWriter(Spy);

impl Write for SpyWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// `"a\nb\n"` for `lines(&["a", "b"])`.
pub fn lines(items: &[&str]) -> String {
    items.iter().map(|item| format!("{item}\n")).collect()
}

/// `"l1\n"` up to `"l{count}\n"`.
pub fn numbered(count: usize) -> Vec<String> {
    (1..=count).map(|n| format!("l{n}\n")).collect()
}

// ============================================================================
// More page builder fixtures
// ============================================================================

/// A `MorePageBuilder` with the default plugins on a screen `screen_height`
/// lines tall, so full pages hold `screen_height - 1` lines.
pub fn more_builder(input: &ScriptedInput, spy: &Spy, screen_height: usize) -> MorePageBuilder {
    more_builder_with(&PluginRegistry::with_defaults(), input, spy, screen_height)
}

pub fn more_builder_with(
    registry: &PluginRegistry,
    input: &ScriptedInput,
    spy: &Spy,
    screen_height: usize,
) -> MorePageBuilder {
    MorePageBuilder::from_registry(
        registry,
        input.clone(),
        spy.output(),
        FixedSizeScreen::with_height(screen_height),
    )
    .expect("default plugins have disjoint keys")
}

// ============================================================================
// Recording page builder
// ============================================================================

/// What a [`RecordingBuilder`] saw: lines per page and flushed page indices.
#[derive(Clone, Default)]
pub struct Recorder {
    pages: Arc<Mutex<Vec<Vec<String>>>>,
    flushes: Arc<Mutex<Vec<usize>>>,
}

impl Recorder {
    pub fn pages(&self) -> Vec<Vec<String>> {
        self.pages.lock().clone()
    }

    pub fn flushes(&self) -> Vec<usize> {
        self.flushes.lock().clone()
    }
}

/// Hands out pages of a fixed height that record their lines. Optionally
/// stops once a number of pages has been built.
pub struct RecordingBuilder {
    height: usize,
    limit: Option<usize>,
    recorder: Recorder,
}

impl RecordingBuilder {
    pub fn new(height: usize) -> (Self, Recorder) {
        let recorder = Recorder::default();
        let builder = Self {
            height,
            limit: None,
            recorder: recorder.clone(),
        };
        (builder, recorder)
    }

    /// Stop instead of building page number `pages + 1`.
    pub fn stop_after(mut self, pages: usize) -> Self {
        self.limit = Some(pages);
        self
    }

    fn page(&mut self) -> Result<Box<dyn Page>, PagerError> {
        let mut pages = self.recorder.pages.lock();
        if self.limit.is_some_and(|limit| pages.len() >= limit) {
            return Err(PagerError::Stopped);
        }
        pages.push(Vec::new());
        Ok(Box::new(RecordingPage {
            index: pages.len() - 1,
            remaining: self.height,
            recorder: self.recorder.clone(),
        }))
    }
}

impl PageBuilder for RecordingBuilder {
    fn build_first_page(&mut self) -> Result<Box<dyn Page>, PagerError> {
        self.page()
    }

    fn build_next_page(&mut self) -> Result<Box<dyn Page>, PagerError> {
        self.page()
    }
}

struct RecordingPage {
    index: usize,
    remaining: usize,
    recorder: Recorder,
}

impl Page for RecordingPage {
    fn is_full(&self) -> bool {
        self.remaining == 0
    }

    fn add_line(&mut self, line: &str) -> Result<(), PagerError> {
        if self.is_full() {
            return Err(PagerError::PageFull);
        }
        self.remaining -= 1;
        self.recorder.pages.lock()[self.index].push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), PagerError> {
        self.recorder.flushes.lock().push(self.index);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
