use std::sync::mpsc::{self, Receiver, Sender};

/// One item on the text queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    Text(String),
    /// No more text follows.
    EndOfInput,
}

/// Creates an unbounded queue feeding a paginator on another thread.
pub fn text_queue() -> (TextSender, TextReceiver) {
    let (tx, rx) = mpsc::channel();
    (TextSender { tx }, TextReceiver { rx, done: false })
}

/// Producer side. Sending never blocks.
#[derive(Debug, Clone)]
pub struct TextSender {
    tx: Sender<Chunk>,
}

impl TextSender {
    /// Returns false once the paginator is gone (for example after the user
    /// quit), so producers can stop early.
    pub fn send(&self, text: impl Into<String>) -> bool {
        self.put(Chunk::Text(text.into()))
    }

    /// Marks the end of input.
    pub fn finish(&self) -> bool {
        self.put(Chunk::EndOfInput)
    }

    pub fn put(&self, chunk: Chunk) -> bool {
        self.tx.send(chunk).is_ok()
    }
}

/// Consumer side: yields text until [`Chunk::EndOfInput`].
#[derive(Debug)]
pub struct TextReceiver {
    rx: Receiver<Chunk>,
    done: bool,
}

impl Iterator for TextReceiver {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        match self.rx.recv() {
            Ok(Chunk::Text(text)) => Some(text),
            Ok(Chunk::EndOfInput) => {
                self.done = true;
                None
            }
            Err(_) => {
                tracing::warn!("Text queue closed without end-of-input marker");
                self.done = true;
                None
            }
        }
    }
}
