mod controller;
mod display;
mod driver;
mod wheel;

pub use controller::{ControllerConfig, CountdownController, RunState};
pub use display::DisplayTriple;
pub use driver::{drive, DriveOutcome};
pub use wheel::{Wheel, Wheels, MAX_TOTAL_SECS};
