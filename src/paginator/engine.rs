use crate::builder::PageBuilder;
use crate::error::PagerError;
use crate::page::Page;
use crate::paginator::{LineCollector, TextReceiver};

/// How a call into the paginator ended.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The call processed all of its input.
    Completed,
    /// Output was stopped (quit key, interrupt or a plugin). Remaining input
    /// was not shown.
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginatorState {
    AwaitingFirstPage,
    FillingPage,
    /// The current page filled up and the builder is deciding what comes next.
    PageFullPendingBuilder,
    /// No further input is accepted. Carries how the run ended.
    Stopped(Outcome),
}

/// Feeds lines into pages, asking the builder for a new page whenever the
/// current one is full.
///
/// Text can be pushed in pieces ([`Paginator::add_text`], followed by one
/// [`Paginator::flush_incomplete_line`]) or pulled from an iterator
/// ([`Paginator::paginate`]). Once stopped, every call returns the final
/// outcome without looking at its input.
pub struct Paginator<B: PageBuilder> {
    builder: B,
    lines: LineCollector,
    page: Option<Box<dyn Page>>,
    state: PaginatorState,
}

impl<B: PageBuilder> Paginator<B> {
    /// Builds the first page. A builder that stops right away leaves the
    /// paginator in [`PaginatorState::Stopped`].
    pub fn new(builder: B) -> Result<Self, PagerError> {
        let mut paginator = Self {
            builder,
            lines: LineCollector::new(),
            page: None,
            state: PaginatorState::AwaitingFirstPage,
        };

        match paginator.builder.build_first_page() {
            Ok(page) => {
                paginator.page = Some(page);
                paginator.state = PaginatorState::FillingPage;
            }
            Err(PagerError::Stopped) => {
                tracing::info!("Stopped before the first page");
                paginator.state = PaginatorState::Stopped(Outcome::Stopped);
            }
            Err(err) => return Err(err),
        }

        Ok(paginator)
    }

    /// Paginates every chunk, then the trailing incomplete line.
    pub fn paginate<I>(&mut self, chunks: I) -> Result<Outcome, PagerError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for chunk in chunks {
            if self.add_text(chunk.as_ref())? == Outcome::Stopped {
                return Ok(Outcome::Stopped);
            }
        }
        self.flush_incomplete_line()
    }

    /// Paginates text from a queue until its end-of-input marker.
    pub fn paginate_from_queue(&mut self, receiver: TextReceiver) -> Result<Outcome, PagerError> {
        self.paginate(receiver)
    }

    pub fn add_text(&mut self, text: &str) -> Result<Outcome, PagerError> {
        if let PaginatorState::Stopped(outcome) = self.state {
            return Ok(outcome);
        }
        self.lines.add(text);
        let result = self.paginate_complete_lines();
        self.settle(result)
    }

    /// Fails with [`PagerError::InvalidInput`] if `bytes` is not UTF-8.
    /// Nothing is paginated in that case.
    pub fn add_bytes(&mut self, bytes: &[u8]) -> Result<Outcome, PagerError> {
        if let PaginatorState::Stopped(outcome) = self.state {
            return Ok(outcome);
        }
        self.lines.add_bytes(bytes)?;
        let result = self.paginate_complete_lines();
        self.settle(result)
    }

    /// Ends the input: shows the trailing text that lacks a line terminator
    /// and flushes the last page.
    pub fn flush_incomplete_line(&mut self) -> Result<Outcome, PagerError> {
        if let PaginatorState::Stopped(outcome) = self.state {
            return Ok(outcome);
        }

        let result = self.finish();
        let outcome = self.settle(result)?;
        if outcome == Outcome::Completed {
            self.state = PaginatorState::Stopped(Outcome::Completed);
        }
        Ok(outcome)
    }

    pub fn state(&self) -> PaginatorState {
        self.state
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    pub fn into_builder(self) -> B {
        self.builder
    }

    fn paginate_complete_lines(&mut self) -> Result<(), PagerError> {
        for line in self.lines.pop_complete_lines() {
            self.paginate_line(&line)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), PagerError> {
        if self.lines.has_incomplete_line() {
            let line = self.lines.pop_incomplete_line();
            self.paginate_line(&line)?;
        }
        if let Some(mut page) = self.page.take() {
            page.flush()?;
        }
        tracing::trace!("Input ended");
        Ok(())
    }

    fn paginate_line(&mut self, line: &str) -> Result<(), PagerError> {
        while self.page.as_ref().map_or(true, |page| page.is_full()) {
            self.start_new_page()?;
        }
        match self.page.as_mut() {
            Some(page) => page.add_line(line),
            None => Err(PagerError::Stopped),
        }
    }

    /// Flushes the full page once, then asks the builder for the next one.
    fn start_new_page(&mut self) -> Result<(), PagerError> {
        self.state = PaginatorState::PageFullPendingBuilder;
        if let Some(mut page) = self.page.take() {
            page.flush()?;
        }

        let page = self.builder.build_next_page()?;
        tracing::trace!("Started next page");
        self.page = Some(page);
        self.state = PaginatorState::FillingPage;
        Ok(())
    }

    fn settle(&mut self, result: Result<(), PagerError>) -> Result<Outcome, PagerError> {
        match result {
            Ok(()) => Ok(Outcome::Completed),
            Err(PagerError::Stopped) => {
                tracing::info!("Output stopped");
                self.page = None;
                self.state = PaginatorState::Stopped(Outcome::Stopped);
                Ok(Outcome::Stopped)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Output, PageOfHeight};
    use crate::test_support::Capture;

    /// Hands out pages of a fixed height, stopping after `budget` pages.
    struct Fixed {
        output: Output,
        height: usize,
        budget: usize,
    }

    impl PageBuilder for Fixed {
        fn build_first_page(&mut self) -> Result<Box<dyn Page>, PagerError> {
            Ok(Box::new(PageOfHeight::new(self.height, self.output.clone())))
        }

        fn build_next_page(&mut self) -> Result<Box<dyn Page>, PagerError> {
            if self.budget == 0 {
                return Err(PagerError::Stopped);
            }
            self.budget -= 1;
            self.build_first_page()
        }
    }

    fn fixed(height: usize, budget: usize) -> (Fixed, Capture) {
        let capture = Capture::default();
        let builder = Fixed {
            output: Output::new(capture.clone()),
            height,
            budget,
        };
        (builder, capture)
    }

    #[test]
    fn test_state_transitions() {
        let (builder, _) = fixed(1, 0);
        let mut paginator = Paginator::new(builder).unwrap();
        assert_eq!(paginator.state(), PaginatorState::FillingPage);

        assert_eq!(paginator.add_text("a\n").unwrap(), Outcome::Completed);
        assert_eq!(paginator.state(), PaginatorState::FillingPage);

        assert_eq!(paginator.add_text("b\n").unwrap(), Outcome::Stopped);
        assert_eq!(paginator.state(), PaginatorState::Stopped(Outcome::Stopped));
    }

    #[test]
    fn test_completed_run_is_terminal() {
        let (builder, capture) = fixed(5, 0);
        let mut paginator = Paginator::new(builder).unwrap();

        assert_eq!(paginator.add_text("a").unwrap(), Outcome::Completed);
        assert_eq!(paginator.flush_incomplete_line().unwrap(), Outcome::Completed);
        assert_eq!(paginator.state(), PaginatorState::Stopped(Outcome::Completed));

        assert_eq!(paginator.add_text("ignored\n").unwrap(), Outcome::Completed);
        assert_eq!(capture.text(), "a");
    }

    #[test]
    fn test_zero_height_pages_are_skipped() {
        let (builder, capture) = fixed(0, 3);
        let mut paginator = Paginator::new(builder).unwrap();

        assert_eq!(paginator.add_text("x\n").unwrap(), Outcome::Stopped);
        assert!(capture.text().is_empty());
        assert_eq!(paginator.into_builder().budget, 0);
    }

    #[test]
    fn test_invalid_bytes_are_rejected() {
        let (builder, _) = fixed(5, 0);
        let mut paginator = Paginator::new(builder).unwrap();

        assert!(matches!(
            paginator.add_bytes(&[0xc3]),
            Err(PagerError::InvalidInput(_))
        ));
        assert_eq!(paginator.state(), PaginatorState::FillingPage);
    }
}
