//! File follower
//!
//! Implements the watch/refresh loop with:
//! - Explicit Watching / Rewatching / Polling states
//! - Recovery when the file is removed, replaced or recreated
//! - Coalescing of bursts of change events into one redraw
//! - Fixed-delay retries for reads that race with rotation

mod follow;
mod source;
mod state;

pub use follow::{follow, FollowOptions};
pub use source::{classify, ChangeSource, NotifySource};
pub use state::{Refresh, Signal, Transition, WatchState};
