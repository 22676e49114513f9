use std::fmt;

use serde::{Deserialize, Serialize};

/// The hours/minutes/seconds shown on the three wheels.
///
/// Always derived from a remaining duration in whole seconds, never
/// decremented field by field, so the three values can't drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayTriple {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DisplayTriple {
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn from_secs(duration_secs: u64) -> Self {
        Self {
            hours: duration_secs / 3600,
            minutes: (duration_secs % 3600) / 60,
            seconds: duration_secs % 60,
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for DisplayTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_with_carry() {
        assert_eq!(
            DisplayTriple::from_secs(3661),
            DisplayTriple { hours: 1, minutes: 1, seconds: 1 }
        );
        assert_eq!(
            DisplayTriple::from_secs(59),
            DisplayTriple { hours: 0, minutes: 0, seconds: 59 }
        );
        assert_eq!(
            DisplayTriple::from_secs(359_999),
            DisplayTriple { hours: 99, minutes: 59, seconds: 59 }
        );
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(DisplayTriple::from_secs(0), DisplayTriple::ZERO);
        assert_eq!(DisplayTriple::ZERO.total_secs(), 0);
    }

    #[test]
    fn formats_two_digit_fields() {
        assert_eq!(DisplayTriple::from_secs(0).to_string(), "00:00:00");
        assert_eq!(DisplayTriple::from_secs(61).to_string(), "00:01:01");
        assert_eq!(DisplayTriple::from_secs(36_000).to_string(), "10:00:00");
    }

    #[test]
    fn serializes_as_named_fields() {
        let json = serde_json::to_value(DisplayTriple::from_secs(3723)).unwrap();
        assert_eq!(json["hours"], 1);
        assert_eq!(json["minutes"], 2);
        assert_eq!(json["seconds"], 3);
    }
}
