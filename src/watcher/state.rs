//! Watch state machine
//!
//! The loop is a small machine over three states. Transitions are a pure
//! function of (state, signal) so the reconnect rules can be tested without a
//! real notification backend.

/// Where the follow loop stands with respect to its subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Subscribed; block on the event channel
    Watching,
    /// Subscription lost or never made; try to (re)establish it
    Rewatching,
    /// Attach failed; wait out the retry interval
    Polling,
}

/// What the loop observed in its current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Signal {
    /// Nothing happened before the wait timed out
    Idle,
    /// File content changed or the path was (re)created
    Changed,
    /// The subscription was torn down and will never fire again
    Invalidated,
    /// A fresh subscription is in place
    Attached,
    /// The path could not be watched
    AttachFailed,
}

/// Whether a transition should reread and redraw the tail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    None,
    /// Read (retrying until it succeeds) and render
    Always,
    /// Read once and render only if the content differs from the last render
    IfChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: WatchState,
    pub refresh: Refresh,
}

impl Transition {
    fn to(next: WatchState, refresh: Refresh) -> Self {
        Self { next, refresh }
    }
}

impl WatchState {
    /// The loop starts without a subscription.
    pub fn initial() -> Self {
        WatchState::Rewatching
    }

    pub fn on(self, signal: Signal) -> Transition {
        use Refresh as R;
        use Signal::*;
        use WatchState::*;

        match (self, signal) {
            (Watching, Changed) => Transition::to(Watching, R::Always),
            (Watching, Invalidated) => Transition::to(Rewatching, R::None),
            // The file may have been rewritten while unwatched.
            (Rewatching, Attached) => Transition::to(Watching, R::Always),
            (Rewatching, AttachFailed) => Transition::to(Polling, R::IfChanged),
            (Polling, Idle) => Transition::to(Rewatching, R::None),
            (state, _) => Transition::to(state, R::None),
        }
    }
}
