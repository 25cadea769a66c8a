use std::any::Any;

use crate::error::PagerError;
use crate::page::{Output, Page};

/// A page that accepts a fixed number of lines and forwards each one to the output.
#[derive(Debug)]
pub struct PageOfHeight {
    height: usize,
    remaining: usize,
    output: Output,
}

impl PageOfHeight {
    pub fn new(height: usize, output: Output) -> Self {
        Self {
            height,
            remaining: height,
            output,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Lines this page still accepts.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn output(&self) -> &Output {
        &self.output
    }
}

impl Page for PageOfHeight {
    fn is_full(&self) -> bool {
        self.remaining == 0
    }

    fn add_line(&mut self, line: &str) -> Result<(), PagerError> {
        if self.is_full() {
            return Err(PagerError::PageFull);
        }
        self.remaining -= 1;
        self.output.write_str(line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), PagerError> {
        self.output.flush()?;
        Ok(())
    }

    fn repeat(&self) -> Option<Box<dyn Page>> {
        Some(Box::new(Self::new(self.height, self.output.clone())))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Capture;
    use std::io;

    #[test]
    fn becomes_full_after_exactly_height_lines() {
        for height in 0..5 {
            let mut page = PageOfHeight::new(height, Output::new(io::sink()));
            for _ in 0..height {
                assert!(!page.is_full());
                page.add_line("x\n").unwrap();
            }
            assert!(page.is_full());
            assert!(page.is_full());
        }
    }

    #[test]
    fn rejects_lines_once_full() {
        let mut page = PageOfHeight::new(1, Output::new(io::sink()));
        page.add_line("one\n").unwrap();
        assert!(matches!(page.add_line("two\n"), Err(PagerError::PageFull)));
        assert_eq!(page.remaining(), 0);
    }

    #[test]
    fn forwards_lines_to_the_output() {
        let capture = Capture::default();
        let mut page = PageOfHeight::new(3, Output::new(capture.clone()));
        page.add_line("first\n").unwrap();
        page.add_line("second\n").unwrap();
        page.flush().unwrap();
        assert_eq!(capture.text(), "first\nsecond\n");
    }

    #[test]
    fn repeat_is_an_empty_page_of_the_same_height() {
        let mut page = PageOfHeight::new(2, Output::new(io::sink()));
        page.add_line("a\n").unwrap();
        page.add_line("b\n").unwrap();

        let fresh = page.repeat().unwrap();
        let fresh = fresh.as_any().downcast_ref::<PageOfHeight>().unwrap();
        assert_eq!(fresh.height(), 2);
        assert_eq!(fresh.remaining(), 2);
        assert!(!fresh.is_full());
    }
}
