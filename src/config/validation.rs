//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Speed limits are valid (min <= max)
/// - Ramps have a non-zero step and interval
/// - No two motors drive the same axis
/// - Treads reference existing, distinct motors
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (name, motor) in config.motors.iter() {
        validate_motor(name.as_str(), motor)?;
    }

    validate_axes(config)?;

    for (name, tread) in config.treads.iter() {
        validate_tread(name.as_str(), tread, config)?;
    }

    Ok(())
}

fn validate_motor(_name: &str, config: &super::MotorConfig) -> Result<()> {
    if !config.speed.is_valid() {
        return Err(Error::Config(ConfigError::InvalidSpeedLimits {
            min: config.speed.min.0,
            max: config.speed.max.0,
        }));
    }

    if let Some(ref ramp) = config.ramp {
        if !ramp.is_valid() {
            return Err(Error::Config(ConfigError::InvalidRamp {
                step: ramp.step,
                interval_ms: ramp.interval_ms,
            }));
        }
    }

    Ok(())
}

fn validate_axes(config: &SystemConfig) -> Result<()> {
    for (i, (name, motor)) in config.motors.iter().enumerate() {
        let earlier = config
            .motors
            .values()
            .take(i)
            .any(|other| other.axis == motor.axis);

        if earlier {
            return Err(Error::Config(ConfigError::DuplicateAxis {
                axis: motor.axis,
                motor: name.clone(),
            }));
        }
    }

    Ok(())
}

fn validate_tread(name: &str, tread: &super::TreadConfig, config: &SystemConfig) -> Result<()> {
    for side in [&tread.left, &tread.right] {
        if config.motor(side.as_str()).is_none() {
            return Err(Error::Config(ConfigError::MotorNotFound(side.clone())));
        }
    }

    if tread.is_degenerate() {
        return Err(Error::Config(ConfigError::TreadUsesSameMotor(
            heapless::String::try_from(name).unwrap_or_default(),
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Speed;
    use crate::config::{LimitPolicy, MotorConfig, RampConfig, SpeedLimits};

    fn motor(name: &str, axis: u32) -> MotorConfig {
        MotorConfig {
            name: heapless::String::try_from(name).unwrap(),
            axis,
            invert_direction: false,
            speed: SpeedLimits::default(),
            ramp: None,
        }
    }

    #[test]
    fn test_invalid_speed_limits() {
        let mut config = motor("test", 0);
        config.speed = SpeedLimits::new(Speed(200), Speed(100), LimitPolicy::Clamp);

        let result = validate_motor("test", &config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidSpeedLimits { min: 200, max: 100 }))
        ));
    }

    #[test]
    fn test_invalid_ramp() {
        let mut config = motor("test", 0);
        config.ramp = Some(RampConfig::new(0, 10));

        let result = validate_motor("test", &config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidRamp { step: 0, .. }))
        ));
    }

    #[test]
    fn test_duplicate_axis() {
        let mut config = SystemConfig::default();
        config
            .motors
            .insert(heapless::String::try_from("a").unwrap(), motor("A", 3))
            .unwrap();
        config
            .motors
            .insert(heapless::String::try_from("b").unwrap(), motor("B", 3))
            .unwrap();

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::DuplicateAxis { axis: 3, .. }))
        ));
    }
}
