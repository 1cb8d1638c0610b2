//! Backward line-counting state machine
//!
//! The scanner is fed bytes in reverse file order and decides, byte by byte,
//! whether each one still belongs to the tail. It holds no I/O so the counting
//! rules can be tested on plain byte strings.

/// Line separator
pub const SEPARATOR: u8 = b'\n';

/// Outcome of feeding one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Byte is part of the tail; keep scanning
    Keep,
    /// Byte is the boundary; it and everything before it are excluded
    Stop,
}

/// Counts rows remaining while walking a file backward.
///
/// The budget starts one higher than the requested rows: the separator that
/// ends the file opens an empty row which costs nothing. When the file does
/// not end with a separator, that unit is spent on the unterminated last line
/// as soon as its final byte is seen.
#[derive(Debug, Clone)]
pub struct TailScanner {
    remaining: i64,
    line_len: usize,
    wrap_width: Option<usize>,
    started: bool,
}

impl TailScanner {
    /// `rows` is the number of lines (or viewport rows) wanted; `wrap_width`
    /// enables soft-wrap accounting for lines wider than the terminal.
    pub fn new(rows: usize, wrap_width: Option<usize>) -> Self {
        Self {
            remaining: i64::try_from(rows).unwrap_or(i64::MAX).saturating_add(1),
            line_len: 0,
            wrap_width: wrap_width.filter(|w| *w > 0),
            started: false,
        }
    }

    pub fn feed(&mut self, byte: u8) -> Step {
        if !self.started {
            self.started = true;
            if byte != SEPARATOR {
                self.remaining = self.remaining.saturating_sub(1);
            }
        }

        if byte == SEPARATOR {
            // The line just finished is the one to the right of this byte.
            self.remaining = self.remaining.saturating_sub(1);
            if let Some(width) = self.wrap_width {
                if self.line_len > width {
                    let extra = i64::try_from(self.line_len / width).unwrap_or(i64::MAX);
                    self.remaining = self.remaining.saturating_sub(extra);
                }
            }
            self.line_len = 0;
        } else {
            self.line_len += 1;
        }

        if self.remaining <= 0 {
            Step::Stop
        } else {
            Step::Keep
        }
    }

    /// Rows still available before the scan stops
    pub fn remaining(&self) -> i64 {
        self.remaining
    }
}

/// Run the scanner over an in-memory buffer and return the kept suffix.
#[cfg(test)]
pub(crate) fn tail_of<'a>(data: &'a [u8], scanner: &mut TailScanner) -> &'a [u8] {
    let mut start = data.len();
    for (idx, &byte) in data.iter().enumerate().rev() {
        if scanner.feed(byte) == Step::Stop {
            break;
        }
        start = idx;
    }
    &data[start..]
}
