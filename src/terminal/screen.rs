use crossterm::terminal::size as terminal_size;

/// Current size of the output window, in lines and columns.
pub trait ScreenDimensions: Send {
    fn height(&self) -> usize;
    fn width(&self) -> usize;
}

/// Asks the terminal on every call, so resizes are picked up between pages.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalScreen;

impl TerminalScreen {
    pub fn new() -> Self {
        Self
    }

    fn size(&self) -> (usize, usize) {
        let (cols, rows) = terminal_size().unwrap_or((80, 24));
        (rows as usize, cols as usize)
    }
}

impl ScreenDimensions for TerminalScreen {
    fn height(&self) -> usize {
        self.size().0
    }

    fn width(&self) -> usize {
        self.size().1
    }
}

/// A screen of a fixed size. The default is effectively unbounded, which
/// turns the pager into a pass-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSizeScreen {
    height: usize,
    width: usize,
}

impl FixedSizeScreen {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    pub fn with_height(height: usize) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }
}

impl Default for FixedSizeScreen {
    fn default() -> Self {
        Self {
            height: usize::MAX,
            width: usize::MAX,
        }
    }
}

impl ScreenDimensions for FixedSizeScreen {
    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }
}
