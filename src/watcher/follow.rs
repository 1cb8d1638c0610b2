//! The follow loop

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::TailwatchResult;
use crate::tail::{read_tail, LineBudget};
use crate::ui::Surface;

use super::source::ChangeSource;
use super::state::{Refresh, Signal, WatchState};

/// Longest single sleep while waiting out a retry interval
const PAUSE_SLICE: Duration = Duration::from_millis(50);

/// Follow options
#[derive(Debug, Clone)]
pub struct FollowOptions {
    /// File being followed
    pub path: PathBuf,
    /// Lines to show
    pub budget: LineBudget,
    /// Delay between attempts to read or rewatch a missing file
    pub retry_interval: Duration,
    /// Longest single wait on the event channel
    pub poll_interval: Duration,
}

/// Follow `options.path` until `running` is cleared.
///
/// Every refresh rebuilds the tail from the file and hands the bytes to
/// `surface`. Read failures inside the loop are expected during rotation and
/// are retried, never returned; only a failing surface ends the loop early.
pub fn follow(
    options: &FollowOptions,
    source: &mut impl ChangeSource,
    surface: &mut impl Surface,
    running: &AtomicBool,
) -> TailwatchResult<()> {
    info!(path = %options.path.display(), budget = ?options.budget, "following");

    let mut state = WatchState::initial();
    let mut last_drawn: Option<Vec<u8>> = None;

    while running.load(Ordering::SeqCst) {
        let signal = match state {
            WatchState::Watching => source.wait(options.poll_interval),
            WatchState::Rewatching => match source.attach(&options.path) {
                Ok(()) => Signal::Attached,
                Err(e) => {
                    debug!(error = %e, "attach failed");
                    Signal::AttachFailed
                }
            },
            WatchState::Polling => {
                pause(options.retry_interval, running);
                Signal::Idle
            }
        };

        let transition = state.on(signal);
        if transition.next != state {
            debug!(from = ?state, to = ?transition.next, ?signal, "watch state changed");
        }

        match transition.refresh {
            Refresh::None => {}
            Refresh::Always => {
                if let Some(content) = read_until_ok(options, &*surface, running) {
                    surface.draw(&content)?;
                    last_drawn = Some(content);
                }
            }
            Refresh::IfChanged => {
                if let Ok(content) = read_tail(&options.path, options.budget, surface.viewport()) {
                    if last_drawn.as_deref() != Some(content.as_slice()) {
                        surface.draw(&content)?;
                        last_drawn = Some(content);
                    }
                }
            }
        }

        state = transition.next;
    }

    info!("stopped following");
    Ok(())
}

/// Read the tail, retrying on a fixed delay. `None` only if stopped.
fn read_until_ok(
    options: &FollowOptions,
    surface: &impl Surface,
    running: &AtomicBool,
) -> Option<Vec<u8>> {
    loop {
        match read_tail(&options.path, options.budget, surface.viewport()) {
            Ok(content) => return Some(content),
            Err(e) => {
                debug!(error = %e, "tail read failed, retrying");
                if !pause(options.retry_interval, running) {
                    return None;
                }
            }
        }
    }
}

/// Sleep for `duration` in short slices. Returns whether still running.
fn pause(duration: Duration, running: &AtomicBool) -> bool {
    let deadline = Instant::now() + duration;
    loop {
        if !running.load(Ordering::SeqCst) {
            return false;
        }
        let left = deadline.saturating_duration_since(Instant::now());
        if left.is_zero() {
            return true;
        }
        std::thread::sleep(left.min(PAUSE_SLICE));
    }
}
