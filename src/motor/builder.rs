//! Builder pattern for DcMotor.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::config::{MotorConfig, RampConfig, SpeedLimits, SystemConfig};
use crate::error::{ConfigError, Error, Result};

use super::driver::DcMotor;
use super::state::Uninitialized;

/// Builder for creating DcMotor instances.
pub struct DcMotorBuilder<EN, IN1, IN2>
where
    EN: SetDutyCycle,
    IN1: OutputPin,
    IN2: OutputPin,
{
    enable: Option<EN>,
    pin_1: Option<IN1>,
    pin_2: Option<IN2>,
    axis: Option<u32>,
    name: Option<heapless::String<32>>,
    invert_direction: bool,
    limits: SpeedLimits,
    ramp: Option<RampConfig>,
}

impl<EN, IN1, IN2> Default for DcMotorBuilder<EN, IN1, IN2>
where
    EN: SetDutyCycle,
    IN1: OutputPin,
    IN2: OutputPin,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<EN, IN1, IN2> DcMotorBuilder<EN, IN1, IN2>
where
    EN: SetDutyCycle,
    IN1: OutputPin,
    IN2: OutputPin,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            enable: None,
            pin_1: None,
            pin_2: None,
            axis: None,
            name: None,
            invert_direction: false,
            limits: SpeedLimits::default(),
            ramp: None,
        }
    }

    /// Set the enable (PWM) line.
    pub fn enable(mut self, enable: EN) -> Self {
        self.enable = Some(enable);
        self
    }

    /// Set the first bridge input.
    pub fn pin_1(mut self, pin: IN1) -> Self {
        self.pin_1 = Some(pin);
        self
    }

    /// Set the second bridge input.
    pub fn pin_2(mut self, pin: IN2) -> Self {
        self.pin_2 = Some(pin);
        self
    }

    /// Set the driven axis.
    pub fn axis(mut self, axis: u32) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Set the motor name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Set speed limits.
    pub fn speed_limits(mut self, limits: SpeedLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the soft-start ramp.
    pub fn ramp(mut self, ramp: RampConfig) -> Self {
        self.ramp = Some(ramp);
        self
    }

    /// Configure from a MotorConfig.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.name = Some(config.name.clone());
        self.axis = Some(config.axis);
        self.invert_direction = config.invert_direction;
        self.limits = config.speed;
        self.ramp = config.ramp;
        self
    }

    /// Configure from SystemConfig by motor name.
    pub fn from_config(self, config: &SystemConfig, motor_name: &str) -> Result<Self> {
        let motor_config = config.motor(motor_name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(motor_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_motor_config(motor_config))
    }

    /// Build the DcMotor.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin or the axis is missing, or if the speed
    /// limits or ramp are invalid.
    pub fn build(self) -> Result<DcMotor<EN, IN1, IN2, Uninitialized>> {
        let enable = self.enable.ok_or(ConfigError::MissingField("enable"))?;
        let pin_1 = self.pin_1.ok_or(ConfigError::MissingField("pin_1"))?;
        let pin_2 = self.pin_2.ok_or(ConfigError::MissingField("pin_2"))?;
        let axis = self.axis.ok_or(ConfigError::MissingField("axis"))?;

        if !self.limits.is_valid() {
            return Err(Error::Config(ConfigError::InvalidSpeedLimits {
                min: self.limits.min.0,
                max: self.limits.max.0,
            }));
        }

        if let Some(ramp) = self.ramp {
            if !ramp.is_valid() {
                return Err(Error::Config(ConfigError::InvalidRamp {
                    step: ramp.step,
                    interval_ms: ramp.interval_ms,
                }));
            }
        }

        let name = self.name.unwrap_or_else(|| {
            let mut name = heapless::String::new();
            let _ = name.push_str("motor");
            name
        });

        Ok(DcMotor::new(
            enable,
            pin_1,
            pin_2,
            axis,
            name,
            self.invert_direction,
            self.limits,
            self.ramp,
        ))
    }
}
