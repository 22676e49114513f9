//! # Backstraightener Core Library
//!
//! Core logic for the Backstraightener wheel countdown timer. The CLI binary
//! is a thin terminal layer over this crate.
//!
//! ## Architecture
//!
//! - **Countdown Controller**: a tick-driven state machine that turns three
//!   wheel values into a duration, counts it down one second per tick, and
//!   fires an alert at zero
//! - **Tick driver**: a tokio interval that feeds the controller without
//!   overlapping ticks
//! - **Collaborators**: [`WheelPanel`] and [`Alert`] traits standing in for
//!   the wheel widgets and the vibration motor
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`CountdownController`]: countdown state machine
//! - [`DisplayTriple`]: hours/minutes/seconds derived from a duration
//! - [`Wheels`]: per-wheel bounds and labels
//! - [`Config`]: application configuration management

pub mod alert;
pub mod error;
pub mod events;
pub mod panel;
pub mod storage;
pub mod timer;

pub use alert::{Alert, BellAlert, SilentAlert};
pub use error::{AlertError, ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use panel::WheelPanel;
pub use storage::Config;
pub use timer::{
    drive, ControllerConfig, CountdownController, DisplayTriple, DriveOutcome, RunState, Wheel,
    Wheels, MAX_TOTAL_SECS,
};
