//! Async tick driver.
//!
//! Feeds a [`CountdownController`] one tick per configured interval until the
//! countdown finishes or the shutdown future resolves. Each tick is handled
//! to completion before the next one is awaited, and late ticks are delayed
//! rather than replayed in a burst.

use std::future::Future;
use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};

use super::controller::{CountdownController, RunState};
use crate::alert::Alert;
use crate::events::Event;
use crate::panel::WheelPanel;

/// Cadence used when the controller was built with a zero interval.
const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// How a call to [`drive`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveOutcome {
    /// The countdown reached zero.
    Completed,
    /// The shutdown future fired first; the countdown was stopped.
    Stopped,
    /// Nothing was running when `drive` was called.
    AlreadyIdle,
}

pub async fn drive<P, A, S, F>(
    controller: &mut CountdownController<P, A>,
    shutdown: S,
    mut on_event: F,
) -> DriveOutcome
where
    P: WheelPanel,
    A: Alert,
    S: Future<Output = ()>,
    F: FnMut(Event),
{
    if controller.state() != RunState::Running {
        return DriveOutcome::AlreadyIdle;
    }

    let mut period = controller.config().tick_interval;
    if period.is_zero() {
        tracing::warn!("zero tick interval, using {MIN_TICK_INTERVAL:?}");
        period = MIN_TICK_INTERVAL;
    }
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    while controller.is_running() {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(event) = controller.on_tick() {
                    on_event(event);
                }
            }
            _ = &mut shutdown => {
                if let Some(event) = controller.stop() {
                    on_event(event);
                }
                return DriveOutcome::Stopped;
            }
        }
    }

    DriveOutcome::Completed
}
