//! Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::tail::{LineBudget, DEFAULT_LINES};

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Line count used when none is given on the command line (-1 = fit screen)
    pub lines: i64,

    /// Delay between attempts to read or rewatch a missing file
    pub retry_interval_ms: u64,

    /// Longest single wait for a change event
    pub poll_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lines: DEFAULT_LINES as i64,
            retry_interval_ms: 1000,
            poll_interval_ms: 250,
        }
    }
}

impl Settings {
    pub fn budget(&self) -> LineBudget {
        LineBudget::from_count(self.lines)
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_millis(self.retry_interval_ms.max(1))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}
