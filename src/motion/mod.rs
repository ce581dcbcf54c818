//! Motion module for tread-motor.
//!
//! Provides direction and H-bridge pin mapping, and speed ramp calculation.

mod bridge;
mod ramp;

pub use bridge::{BridgeState, Direction};
pub use ramp::SpeedRamp;
