//! Speed limit configuration and types.

use serde::Deserialize;

use crate::error::MotorError;

use super::units::Speed;

/// Policy for handling speed requests outside the limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum LimitPolicy {
    /// Reject requests outside the limits.
    Reject,
    /// Clamp requests to the nearest limit.
    #[default]
    Clamp,
}

/// Allowed duty range for a motor channel.
///
/// `min` is the smallest non-zero duty that actually turns the motor; zero
/// is always accepted as "off".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedLimits {
    /// Minimum non-zero duty.
    #[serde(default)]
    pub min: Speed,

    /// Maximum duty.
    #[serde(default = "default_max")]
    pub max: Speed,

    /// What to do when a request falls outside the range.
    #[serde(default)]
    pub policy: LimitPolicy,
}

fn default_max() -> Speed {
    Speed::MAX
}

impl Default for SpeedLimits {
    fn default() -> Self {
        Self {
            min: Speed::ZERO,
            max: Speed::MAX,
            policy: LimitPolicy::Clamp,
        }
    }
}

impl SpeedLimits {
    /// Create new speed limits.
    pub fn new(min: Speed, max: Speed, policy: LimitPolicy) -> Self {
        Self { min, max, policy }
    }

    /// Check if limits are valid (min <= max).
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Check if a request is accepted unchanged.
    pub fn contains(&self, requested: u32) -> bool {
        requested == 0
            || (requested >= self.min.0 as u32 && requested <= self.max.0 as u32)
    }

    /// Apply limit policy to a requested duty.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::SpeedOutOfRange`] under [`LimitPolicy::Reject`]
    /// when the request is outside the range.
    pub fn apply(&self, requested: u32) -> core::result::Result<Speed, MotorError> {
        if self.contains(requested) {
            return Ok(Speed::saturating_from(requested));
        }

        match self.policy {
            LimitPolicy::Reject => Err(MotorError::SpeedOutOfRange {
                requested,
                min: self.min.0,
                max: self.max.0,
            }),
            LimitPolicy::Clamp => {
                if requested < self.min.0 as u32 {
                    Ok(self.min)
                } else {
                    Ok(self.max)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_limits_reject() {
        let limits = SpeedLimits::new(Speed(40), Speed(200), LimitPolicy::Reject);

        assert_eq!(limits.apply(0), Ok(Speed::ZERO));
        assert_eq!(limits.apply(40), Ok(Speed(40)));
        assert_eq!(limits.apply(200), Ok(Speed(200)));
        assert!(limits.apply(39).is_err());
        assert!(limits.apply(201).is_err());
    }

    #[test]
    fn test_speed_limits_clamp() {
        let limits = SpeedLimits::new(Speed(40), Speed(200), LimitPolicy::Clamp);

        assert_eq!(limits.apply(0), Ok(Speed::ZERO));
        assert_eq!(limits.apply(1), Ok(Speed(40)));
        assert_eq!(limits.apply(120), Ok(Speed(120)));
        assert_eq!(limits.apply(5000), Ok(Speed(200)));
    }

    #[test]
    fn test_default_limits_saturate_at_full_duty() {
        let limits = SpeedLimits::default();
        assert_eq!(limits.apply(255), Ok(Speed::MAX));
        assert_eq!(limits.apply(256), Ok(Speed::MAX));
        assert_eq!(limits.apply(u32::MAX), Ok(Speed::MAX));
    }
}
