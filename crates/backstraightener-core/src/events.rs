use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{DisplayTriple, RunState};

/// Every state change of the countdown produces an Event.
/// The CLI prints them as JSON lines with `--json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    CountdownStarted {
        duration_secs: u64,
        display: DisplayTriple,
        at: DateTime<Utc>,
    },
    Tick {
        /// 1-based tick number within the current run.
        tick: u64,
        remaining_secs: u64,
        display: DisplayTriple,
        at: DateTime<Utc>,
    },
    CountdownCompleted {
        ticks: u64,
        /// False when the alert collaborator reported a failure.
        alert_delivered: bool,
        at: DateTime<Utc>,
    },
    /// Run cancelled before reaching zero. No alert is fired.
    CountdownStopped {
        remaining_secs: u64,
        display: DisplayTriple,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: RunState,
        remaining_secs: u64,
        display: DisplayTriple,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Event::CountdownCompleted { .. } | Event::CountdownStopped { .. }
        )
    }
}
