//! Countdown controller.
//!
//! The controller is a tick-driven state machine. It owns no timer of its
//! own: whoever hosts it calls `on_tick()` once per interval while the
//! countdown is running (see [`drive`](super::drive)).
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Idle
//!          (on completion: alert fires; on stop: it doesn't)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut controller = CountdownController::new(config, panel, alert);
//! controller.request_start(0, 1, 30);
//! // Once per second:
//! controller.on_tick(); // Returns Event::CountdownCompleted at zero
//! ```

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::display::DisplayTriple;
use super::wheel::Wheels;
use crate::alert::Alert;
use crate::error::ValidationError;
use crate::events::Event;
use crate::panel::WheelPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Idle,
    Running,
}

/// Construction-time settings for a [`CountdownController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    pub wheels: Wheels,
    /// Wall-clock cadence of the tick driver. Every tick removes one second
    /// from the countdown regardless of this value.
    pub tick_interval: Duration,
    /// How long the completion alert should last.
    pub alert_duration_ms: u64,
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tick_interval.is_zero() {
            return Err(ValidationError::InvalidValue {
                field: "tick_interval".into(),
                message: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            wheels: Wheels::default(),
            tick_interval: Duration::from_secs(1),
            alert_duration_ms: 1000,
        }
    }
}

/// Counts a duration down one second per tick and keeps the wheels in sync.
pub struct CountdownController<P, A> {
    config: ControllerConfig,
    state: RunState,
    /// Remaining time in whole seconds.
    remaining_secs: u64,
    /// Ticks observed in the current run.
    ticks: u64,
    panel: P,
    alert: A,
}

impl<P: WheelPanel, A: Alert> CountdownController<P, A> {
    pub fn new(config: ControllerConfig, panel: P, alert: A) -> Self {
        Self {
            config,
            state: RunState::Idle,
            remaining_secs: 0,
            ticks: 0,
            panel,
            alert,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn display(&self) -> DisplayTriple {
        DisplayTriple::from_secs(self.remaining_secs)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn alert(&self) -> &A {
        &self.alert
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            remaining_secs: self.remaining_secs,
            display: self.display(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start a countdown from the three wheel values.
    ///
    /// Ignored while a countdown is already running. A zero total completes
    /// on the spot: no tick, no display update, one alert.
    pub fn request_start(&mut self, hours: i64, minutes: i64, seconds: i64) -> Option<Event> {
        if self.state == RunState::Running {
            tracing::debug!(
                remaining_secs = self.remaining_secs,
                "start requested while running, ignoring"
            );
            return None;
        }

        let total = self.total_secs(hours, minutes, seconds);
        self.remaining_secs = total;
        self.ticks = 0;

        if total == 0 {
            tracing::info!("countdown started at zero, completing immediately");
            return Some(self.on_complete());
        }

        self.panel.set_editable(false);
        self.state = RunState::Running;
        tracing::info!(duration_secs = total, "countdown started");
        Some(Event::CountdownStarted {
            duration_secs: total,
            display: self.display(),
            at: Utc::now(),
        })
    }

    /// Call once per interval. Returns `Event::CountdownCompleted` on the
    /// tick that reaches zero and `None` while idle.
    pub fn on_tick(&mut self) -> Option<Event> {
        if self.state != RunState::Running {
            return None;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.ticks += 1;

        let triple = self.display();
        self.panel.show(triple);
        tracing::debug!(tick = self.ticks, triple = %triple, "tick");

        if self.remaining_secs == 0 {
            return Some(self.on_complete());
        }

        Some(Event::Tick {
            tick: self.ticks,
            remaining_secs: self.remaining_secs,
            display: triple,
            at: Utc::now(),
        })
    }

    /// Cancel a running countdown without firing the alert.
    pub fn stop(&mut self) -> Option<Event> {
        if self.state != RunState::Running {
            return None;
        }
        self.state = RunState::Idle;
        self.panel.set_editable(true);
        tracing::info!(remaining_secs = self.remaining_secs, "countdown stopped");
        Some(Event::CountdownStopped {
            remaining_secs: self.remaining_secs,
            display: self.display(),
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn on_complete(&mut self) -> Event {
        self.state = RunState::Idle;
        self.panel.set_editable(true);

        let alert_delivered = match self.alert.fire(self.config.alert_duration_ms) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "completion alert failed");
                false
            }
        };

        tracing::info!(ticks = self.ticks, "countdown completed");
        Event::CountdownCompleted {
            ticks: self.ticks,
            alert_delivered,
            at: Utc::now(),
        }
    }

    fn total_secs(&self, hours: i64, minutes: i64, seconds: i64) -> u64 {
        let total = hours
            .saturating_mul(3600)
            .saturating_add(minutes.saturating_mul(60))
            .saturating_add(seconds);
        let max = self.config.wheels.max_total_secs();

        if total < 0 {
            tracing::warn!(hours, minutes, seconds, "negative countdown total, clamping to zero");
            return 0;
        }
        let total = total as u64;
        if total > max {
            tracing::warn!(total, max, "countdown total exceeds the wheels, clamping");
            return max;
        }
        total
    }
}
