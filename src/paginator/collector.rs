use crate::error::PagerError;

/// Assembles arbitrary text chunks into complete lines.
///
/// Complete lines keep their trailing `'\n'`. Text after the last `'\n'` is
/// held back until more input arrives or the caller pops it at end of input.
#[derive(Debug, Default)]
pub struct LineCollector {
    complete: Vec<String>,
    incomplete: String,
}

impl LineCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: &str) {
        let Some(last_newline) = text.rfind('\n') else {
            self.incomplete.push_str(text);
            return;
        };

        let (head, tail) = text.split_at(last_newline + 1);
        let mut pending = std::mem::take(&mut self.incomplete);
        pending.push_str(head);
        self.complete
            .extend(pending.split_inclusive('\n').map(str::to_owned));
        self.incomplete.push_str(tail);
    }

    /// Like [`LineCollector::add`], for raw bytes. Bytes that are not UTF-8
    /// are rejected and leave the collector untouched.
    pub fn add_bytes(&mut self, bytes: &[u8]) -> Result<(), PagerError> {
        let text = std::str::from_utf8(bytes)?;
        self.add(text);
        Ok(())
    }

    /// Complete lines gathered since the previous call, oldest first.
    pub fn pop_complete_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.complete)
    }

    /// The trailing fragment without a line terminator, if any.
    pub fn pop_incomplete_line(&mut self) -> String {
        std::mem::take(&mut self.incomplete)
    }

    pub fn has_incomplete_line(&self) -> bool {
        !self.incomplete.is_empty()
    }
}
