//! Motor configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::limits::SpeedLimits;

/// Complete motor channel configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Mechanical axis this channel drives.
    pub axis: u32,

    /// Swap the H-bridge input pair.
    #[serde(default)]
    pub invert_direction: bool,

    /// Allowed duty range.
    #[serde(default)]
    pub speed: SpeedLimits,

    /// Optional soft-start ramp.
    #[serde(default)]
    pub ramp: Option<RampConfig>,
}

/// Soft-start ramp settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RampConfig {
    /// Duty change per tick.
    pub step: u8,

    /// Delay between ticks in milliseconds.
    pub interval_ms: u32,
}

impl RampConfig {
    /// Create a new ramp configuration.
    pub const fn new(step: u8, interval_ms: u32) -> Self {
        Self { step, interval_ms }
    }

    /// Check if the ramp is usable (both fields > 0).
    pub fn is_valid(&self) -> bool {
        self.step > 0 && self.interval_ms > 0
    }
}
