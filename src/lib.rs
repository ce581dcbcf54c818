//! # tread-motor
//!
//! H-bridge DC motor channels and skid-steer tread drive with embedded-hal 1.0
//! support.
//!
//! ## Features
//!
//! - **embedded-hal 1.0**: `SetDutyCycle` for the enable line, `OutputPin` for
//!   the bridge inputs, `DelayNs` for soft-start ramps
//! - **no_std compatible**: Core library works without standard library
//! - **Type-state safety**: A channel cannot be driven before `init()`
//! - **Configuration-driven**: Define motors and tread pairs in TOML files
//! - **Speed limits**: Deadband and ceiling with clamp or reject policy
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tread_motor::{DcMotorBuilder, Direction};
//!
//! let mut motor = DcMotorBuilder::new()
//!     .axis(0)
//!     .enable(pwm_channel)
//!     .pin_1(in1)
//!     .pin_2(in2)
//!     .build()?
//!     .init()?;
//!
//! motor.set_direction(Direction::Forward)?;
//! motor.set_velocity(180)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod motor;
pub mod tread;

// Re-exports for ergonomic API
pub use config::{validate_config, MotorConfig, SystemConfig, TreadConfig};
pub use error::{Error, Result};
pub use motion::{BridgeState, Direction, SpeedRamp};
pub use motor::{state, DcMotor, DcMotorBuilder, HBridge, MotorDescriptor, MotorSystem};
pub use tread::TreadDrive;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{SignedSpeed, Speed};
