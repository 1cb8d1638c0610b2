//! Backward tail extraction
//!
//! Finds the trailing lines of a file by walking it from end-of-file toward
//! the start, so the cost depends on the size of the tail rather than the
//! size of the file.

mod budget;
mod reader;
mod scanner;

pub use budget::{LineBudget, Viewport, DEFAULT_LINES};
pub use reader::{read_tail, BLOCK_SIZE};
pub use scanner::{Step, TailScanner, SEPARATOR};
