//! Error types for tread-motor library.
//!
//! Provides unified error handling across configuration and motor control.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all tread-motor operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor operation error
    Motor(MotorError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// Tread name not found in configuration
    TreadNotFound(heapless::String<32>),
    /// Two motors in the configuration drive the same axis
    DuplicateAxis {
        /// Axis shared by both motors
        axis: u32,
        /// Name of the second motor claiming the axis
        motor: heapless::String<32>,
    },
    /// Invalid speed limits (min must be <= max)
    InvalidSpeedLimits {
        /// Minimum non-zero duty
        min: u8,
        /// Maximum duty
        max: u8,
    },
    /// Invalid ramp (step and interval must be > 0)
    InvalidRamp {
        /// Duty change per tick
        step: u8,
        /// Delay between ticks in milliseconds
        interval_ms: u32,
    },
    /// Tread uses the same motor for both sides
    TreadUsesSameMotor(heapless::String<32>),
    /// Builder was missing a required field
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Direction pin operation failed
    PinError,
    /// Enable (PWM) channel operation failed
    PwmError,
    /// Requested speed is outside the configured limits
    SpeedOutOfRange {
        /// Requested duty
        requested: u32,
        /// Minimum non-zero duty
        min: u8,
        /// Maximum duty
        max: u8,
    },
    /// Another registered motor already drives this axis
    AxisInUse(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            ConfigError::TreadNotFound(name) => write!(f, "Tread '{}' not found", name),
            ConfigError::DuplicateAxis { axis, motor } => {
                write!(f, "Motor '{}' reuses axis {}", motor, axis)
            }
            ConfigError::InvalidSpeedLimits { min, max } => {
                write!(f, "Invalid speed limits: min ({}) must be <= max ({})", min, max)
            }
            ConfigError::InvalidRamp { step, interval_ms } => write!(
                f,
                "Invalid ramp: step ({}) and interval ({} ms) must be > 0",
                step, interval_ms
            ),
            ConfigError::TreadUsesSameMotor(name) => {
                write!(f, "Tread '{}' uses the same motor for both sides", name)
            }
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
            MotorError::PwmError => write!(f, "PWM duty cycle update failed"),
            MotorError::SpeedOutOfRange {
                requested,
                min,
                max,
            } => write!(f, "Speed {} outside [{}, {}]", requested, min, max),
            MotorError::AxisInUse(axis) => write!(f, "Axis {} is already driven", axis),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}
