//! Wheel bounds for the hours, minutes, and seconds pickers.
//!
//! A wheel offers the values `min..max` (upper bound exclusive), shown as
//! zero-padded two-digit labels. Range enforcement belongs to the wheel, not
//! to the countdown controller.

use serde::{Deserialize, Serialize};

/// Longest countdown any wheel layout may express: 99:59:59, just under
/// 100 hours.
pub const MAX_TOTAL_SECS: u64 = 100 * 3600 - 1;

/// Bounds of a single numeric wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wheel {
    pub min: u32,
    /// Exclusive upper bound.
    pub max: u32,
}

impl Wheel {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Largest selectable value.
    pub fn top(&self) -> u32 {
        self.max.saturating_sub(1).max(self.min)
    }

    /// Snap an arbitrary input onto the wheel.
    pub fn clamp(&self, value: i64) -> u32 {
        if value <= i64::from(self.min) {
            self.min
        } else if value >= i64::from(self.top()) {
            self.top()
        } else {
            value as u32
        }
    }

    /// Display labels for every selectable value, e.g. `"00"`, `"01"`, ...
    pub fn labels(&self) -> Vec<String> {
        (self.min..self.max).map(|v| format!("{v:02}")).collect()
    }
}

/// The three wheels of the countdown screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wheels {
    pub hours: Wheel,
    pub minutes: Wheel,
    pub seconds: Wheel,
}

impl Default for Wheels {
    fn default() -> Self {
        Self {
            hours: Wheel::new(0, 100),
            minutes: Wheel::new(0, 60),
            seconds: Wheel::new(0, 60),
        }
    }
}

impl Wheels {
    /// Longest duration the wheels can express, in seconds, never more
    /// than [`MAX_TOTAL_SECS`].
    pub fn max_total_secs(&self) -> u64 {
        let total = u64::from(self.hours.top()) * 3600
            + u64::from(self.minutes.top()) * 60
            + u64::from(self.seconds.top());
        total.min(MAX_TOTAL_SECS)
    }

    pub fn clamp(&self, hours: i64, minutes: i64, seconds: i64) -> (u32, u32, u32) {
        (
            self.hours.clamp(hours),
            self.minutes.clamp(minutes),
            self.seconds.clamp(seconds),
        )
    }
}
