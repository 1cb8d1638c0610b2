//! Line budget and viewport geometry

/// Lines shown when no count is given
pub const DEFAULT_LINES: usize = 10;

/// How many trailing lines to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBudget {
    /// Exactly the last `n` lines (`n >= 1`)
    Fixed(usize),
    /// As many lines as fit the viewport, counting soft-wrapped rows
    FitViewport,
}

impl LineBudget {
    /// Build a budget from the user-facing count.
    ///
    /// `-1` selects [`LineBudget::FitViewport`]; anything else below 1 is
    /// clamped up to 1.
    pub fn from_count(count: i64) -> Self {
        if count == -1 {
            return LineBudget::FitViewport;
        }
        let n = usize::try_from(count.max(1)).unwrap_or(usize::MAX);
        LineBudget::Fixed(n)
    }

    /// Rows the tail may occupy, given the current viewport.
    pub fn rows(&self, viewport: Viewport) -> usize {
        match self {
            LineBudget::Fixed(n) => (*n).max(1),
            LineBudget::FitViewport => viewport.rows as usize,
        }
    }

    /// Wrap width to model, if any. Zero width disables wrapping.
    pub fn wrap_width(&self, viewport: Viewport) -> Option<usize> {
        match self {
            LineBudget::FitViewport if viewport.cols > 0 => Some(viewport.cols as usize),
            _ => None,
        }
    }
}

impl Default for LineBudget {
    fn default() -> Self {
        LineBudget::Fixed(DEFAULT_LINES)
    }
}

/// Terminal geometry at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: u16,
    pub cols: u16,
}

impl Viewport {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { rows: 24, cols: 80 }
    }
}
