//! Configuration module for tread-motor.
//!
//! Provides types for loading and validating motor channel and tread
//! configurations from TOML files (with `std` feature) or pre-parsed data.

mod limits;
mod motor;
mod system;
mod tread;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use limits::{LimitPolicy, SpeedLimits};
pub use motor::{MotorConfig, RampConfig};
pub use system::SystemConfig;
pub use tread::TreadConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{SignedSpeed, Speed};
