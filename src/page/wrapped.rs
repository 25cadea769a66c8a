use std::any::Any;

use crate::error::PagerError;
use crate::page::Page;

/// Observes or rewrites every line passing through a [`WrappedPage`].
pub trait LineHook: Send + 'static {
    /// Called with every accepted line; returns the line to forward.
    fn on_add_line(&mut self, line: String) -> String;
}

/// A page decorating exactly one inner page.
///
/// `is_full`, `flush` and `repeat` are forwarded unchanged. Wrappers nest:
/// the page returned by the builder is typically several of these around a
/// concrete page, and [`crate::page::innermost`] recovers the core.
pub struct WrappedPage<H> {
    hook: H,
    inner: Box<dyn Page>,
}

impl<H: LineHook> WrappedPage<H> {
    pub fn new(hook: H, inner: Box<dyn Page>) -> Self {
        Self { hook, inner }
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    pub fn into_inner(self) -> Box<dyn Page> {
        self.inner
    }
}

impl<H: LineHook> Page for WrappedPage<H> {
    fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    fn add_line(&mut self, line: &str) -> Result<(), PagerError> {
        if self.inner.is_full() {
            return Err(PagerError::PageFull);
        }
        let line = self.hook.on_add_line(line.to_owned());
        self.inner.add_line(&line)
    }

    fn flush(&mut self) -> Result<(), PagerError> {
        self.inner.flush()
    }

    /// Repeats the inner page only. The builder re-applies wrappers to
    /// whatever page it hands out, so a repeated page is wrapped afresh.
    fn repeat(&self) -> Option<Box<dyn Page>> {
        self.inner.repeat()
    }

    fn inner(&self) -> Option<&dyn Page> {
        Some(self.inner.as_ref())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{innermost, Output, PageOfHeight};
    use crate::test_support::Capture;
    use std::io;

    struct Tag(&'static str);

    impl LineHook for Tag {
        fn on_add_line(&mut self, line: String) -> String {
            format!("{}{}", self.0, line)
        }
    }

    #[test]
    fn nested_hooks_apply_outermost_first() {
        let capture = Capture::default();
        let core = PageOfHeight::new(5, Output::new(capture.clone()));
        let inner = WrappedPage::new(Tag("B:"), Box::new(core));
        let mut outer = WrappedPage::new(Tag("A:"), Box::new(inner));

        outer.add_line("line\n").unwrap();

        assert_eq!(capture.text(), "B:A:line\n");
    }

    #[test]
    fn innermost_recovers_the_concrete_page() {
        let core = PageOfHeight::new(7, Output::new(io::sink()));
        let wrapped = WrappedPage::new(Tag("x"), Box::new(WrappedPage::new(Tag("y"), Box::new(core))));

        let page = innermost(&wrapped);
        let core = page.as_any().downcast_ref::<PageOfHeight>().unwrap();
        assert_eq!(core.height(), 7);
    }

    #[test]
    fn forwards_fullness_and_rejects_lines_when_full() {
        let mut page = WrappedPage::new(
            Tag(""),
            Box::new(PageOfHeight::new(1, Output::new(io::sink()))),
        );
        assert!(!page.is_full());
        page.add_line("one\n").unwrap();
        assert!(page.is_full());
        assert!(matches!(page.add_line("two\n"), Err(PagerError::PageFull)));
    }

    #[test]
    fn unwrapping_returns_the_decorated_page() {
        let page = WrappedPage::new(
            Tag("T:"),
            Box::new(PageOfHeight::new(4, Output::new(io::sink()))),
        );
        assert_eq!(page.hook().0, "T:");

        let inner = page.into_inner();
        let core = inner.as_any().downcast_ref::<PageOfHeight>().unwrap();
        assert_eq!(core.height(), 4);
    }

    #[test]
    fn repeat_returns_unwrapped_fresh_inner_page() {
        let page = WrappedPage::new(
            Tag(""),
            Box::new(PageOfHeight::new(3, Output::new(io::sink()))),
        );
        let fresh = page.repeat().unwrap();
        assert!(fresh.as_any().downcast_ref::<PageOfHeight>().is_some());
    }
}
