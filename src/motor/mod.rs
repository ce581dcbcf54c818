//! Motor module for tread-motor.
//!
//! Provides the H-bridge DC motor driver with type-state safety.

mod builder;
mod channel;
mod descriptor;
mod driver;
pub mod state;
mod system;

pub use builder::DcMotorBuilder;
pub use channel::HBridge;
pub use descriptor::MotorDescriptor;
pub use driver::DcMotor;
pub use state::{MotorState, Ready, StateName, Uninitialized};
pub use system::MotorSystem;
