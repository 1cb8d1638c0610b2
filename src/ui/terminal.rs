//! Full-screen display surface

use std::io::{self, Stdout, Write};

use crossterm::{cursor, terminal, ExecutableCommand, QueueableCommand};
use is_terminal::IsTerminal;

use crate::tail::{Viewport, SEPARATOR};

/// Where rendered tails go
pub trait Surface {
    /// Current geometry; queried again on every read since the terminal can
    /// be resized.
    fn viewport(&self) -> Viewport;

    /// Replace everything on screen with `content`.
    fn draw(&mut self, content: &[u8]) -> io::Result<()>;
}

/// Terminal screen, restored on drop.
///
/// On a TTY the screen switches to the alternate buffer and hides the cursor.
/// Otherwise each draw writes the raw bytes with no escape sequences, which
/// keeps output usable in a pipe.
pub struct Screen<W: Write> {
    out: W,
    fullscreen: bool,
    size: fn() -> Option<(u16, u16)>,
}

impl Screen<Stdout> {
    pub fn stdout() -> io::Result<Self> {
        let out = io::stdout();
        let fullscreen = out.is_terminal();
        Self::new(out, fullscreen)
    }
}

impl<W: Write> Screen<W> {
    pub fn new(mut out: W, fullscreen: bool) -> io::Result<Self> {
        if fullscreen {
            out.execute(terminal::EnterAlternateScreen)?;
            out.execute(cursor::Hide)?;
        }
        Ok(Self {
            out,
            fullscreen,
            size: || terminal::size().ok(),
        })
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[cfg(test)]
    fn with_size(mut self, size: fn() -> Option<(u16, u16)>) -> Self {
        self.size = size;
        self
    }
}

impl<W: Write> Surface for Screen<W> {
    fn viewport(&self) -> Viewport {
        viewport_from((self.size)())
    }

    fn draw(&mut self, content: &[u8]) -> io::Result<()> {
        if self.fullscreen {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
            self.out.queue(cursor::MoveTo(0, 0))?;
            // A final separator on the bottom row would scroll the top line away.
            let visible = content.strip_suffix(&[SEPARATOR]).unwrap_or(content);
            self.out.write_all(visible)?;
        } else {
            self.out.write_all(content)?;
        }
        self.out.flush()
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        if self.fullscreen {
            let _ = self.out.execute(cursor::Show);
            let _ = self.out.execute(terminal::LeaveAlternateScreen);
        }
    }
}

/// crossterm reports (columns, rows); fall back to 80x24 when unknown.
fn viewport_from(size: Option<(u16, u16)>) -> Viewport {
    match size {
        Some((cols, rows)) => Viewport::new(rows, cols),
        None => Viewport::default(),
    }
}
