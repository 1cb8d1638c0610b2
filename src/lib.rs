//! tailwatch - full-screen live tail for a single file
//!
//! Shows the last lines of a file and redraws them whenever the file changes,
//! surviving truncation, rotation and deletion followed by recreation.

pub mod config;
pub mod error;
pub mod logging;
pub mod tail;
pub mod ui;
pub mod watcher;

// Re-exports for convenience
pub use config::Settings;
pub use error::{ReadError, TailwatchError, TailwatchResult};
pub use tail::{read_tail, LineBudget, Viewport};
pub use ui::{Screen, Surface};
pub use watcher::{follow, ChangeSource, FollowOptions, NotifySource, WatchState};
