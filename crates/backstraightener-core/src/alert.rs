//! Completion alerts.
//!
//! The countdown fires its alert exactly once per completed run. Delivery
//! failures are reported back as [`AlertError`] but never change the
//! controller's state.

use std::io::Write;

use crate::error::AlertError;

/// Something that can get the user's attention when a countdown finishes.
pub trait Alert {
    /// Fire the alert for roughly `duration_ms` milliseconds.
    fn fire(&mut self, duration_ms: u64) -> Result<(), AlertError>;
}

impl<A: Alert + ?Sized> Alert for Box<A> {
    fn fire(&mut self, duration_ms: u64) -> Result<(), AlertError> {
        (**self).fire(duration_ms)
    }
}

/// Rings the terminal bell on the wrapped writer.
///
/// A terminal can't vibrate, so the duration only shows up in the logs.
#[derive(Debug)]
pub struct BellAlert<W: Write> {
    out: W,
}

impl<W: Write> BellAlert<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Alert for BellAlert<W> {
    fn fire(&mut self, duration_ms: u64) -> Result<(), AlertError> {
        tracing::debug!(duration_ms, "ringing terminal bell");
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Used when alerts are disabled in the config.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAlert;

impl Alert for SilentAlert {
    fn fire(&mut self, duration_ms: u64) -> Result<(), AlertError> {
        tracing::debug!(duration_ms, "alert disabled, staying silent");
        Ok(())
    }
}
