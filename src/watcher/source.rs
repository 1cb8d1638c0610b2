//! Change notification sources

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use notify::event::ModifyKind;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::{TailwatchError, TailwatchResult};

use super::state::Signal;

/// A subscription to change events for a single path.
///
/// `attach` replaces whatever subscription was active before. After `wait`
/// returns [`Signal::Invalidated`], no further events arrive until the next
/// successful `attach`.
pub trait ChangeSource {
    fn attach(&mut self, path: &Path) -> Result<(), notify::Error>;

    /// Block for at most `timeout`. Events that arrive together are merged,
    /// with [`Signal::Invalidated`] taking precedence.
    fn wait(&mut self, timeout: Duration) -> Signal;
}

/// [`ChangeSource`] backed by the platform's native watcher
pub struct NotifySource {
    watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    attached: Option<PathBuf>,
}

impl NotifySource {
    /// Create the backend. Failure here means the host has no usable
    /// notification mechanism.
    pub fn new() -> TailwatchResult<Self> {
        let (tx, rx) = channel();

        let watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                let _ = tx.send(res);
            },
            Config::default(),
        )
        .map_err(|e| TailwatchError::WatchUnavailable {
            message: e.to_string(),
        })?;

        Ok(Self {
            watcher,
            rx,
            attached: None,
        })
    }

    fn drain(&self, mut signal: Signal) -> Signal {
        while let Ok(res) = self.rx.try_recv() {
            signal = signal.max(classify(&res));
        }
        signal
    }
}

impl ChangeSource for NotifySource {
    fn attach(&mut self, path: &Path) -> Result<(), notify::Error> {
        if let Some(previous) = self.attached.take() {
            // Already gone if the backend dropped it on removal.
            let _ = self.watcher.unwatch(&previous);
        }

        self.watcher.watch(path, RecursiveMode::NonRecursive)?;

        // Anything queued so far belongs to the old subscription.
        let _ = self.drain(Signal::Idle);
        self.attached = Some(path.to_path_buf());
        Ok(())
    }

    fn wait(&mut self, timeout: Duration) -> Signal {
        let deadline = Instant::now() + timeout;

        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            let signal = match self.rx.recv_timeout(left) {
                Ok(res) => classify(&res),
                Err(RecvTimeoutError::Timeout) => return Signal::Idle,
                Err(RecvTimeoutError::Disconnected) => return Signal::Invalidated,
            };

            if signal != Signal::Idle {
                return self.drain(signal);
            }
        }
    }
}

/// Map a backend event to a loop signal.
pub fn classify(res: &notify::Result<Event>) -> Signal {
    let event = match res {
        Ok(event) => event,
        Err(e) => {
            tracing::debug!(error = %e, "watch backend error");
            return Signal::Invalidated;
        }
    };

    match event.kind {
        EventKind::Remove(_) | EventKind::Modify(ModifyKind::Name(_)) => Signal::Invalidated,
        EventKind::Access(_) | EventKind::Modify(ModifyKind::Metadata(_)) => Signal::Idle,
        _ => Signal::Changed,
    }
}
