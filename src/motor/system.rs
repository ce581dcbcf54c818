//! Motor system facade for multi-motor configuration.
//!
//! Provides a high-level API for managing several motor channels from a
//! single configuration.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use heapless::{FnvIndexMap, String};

use crate::config::{MotorConfig, SystemConfig, TreadConfig};
use crate::error::{ConfigError, Error, MotorError, Result};
use crate::motor::state::Uninitialized;
use crate::motor::{DcMotor, DcMotorBuilder};

/// A facade for managing multiple DC motor channels from configuration.
///
/// `MotorSystem` provides a high-level API for:
/// - Creating motors from named configurations
/// - Tracking which axes are already driven
/// - Looking up tread pairs
///
/// # Example
///
/// ```rust,ignore
/// use tread_motor::motor::MotorSystem;
///
/// let config = tread_motor::load_config("treads.toml")?;
/// let mut system = MotorSystem::from_config(config);
///
/// let left = system.register_motor("left", pwm_a, in1_a, in2_a)?.init()?;
/// let right = system.register_motor("right", pwm_b, in1_b, in2_b)?.init()?;
/// ```
pub struct MotorSystem {
    /// The system configuration.
    config: SystemConfig,
    /// Registered motor names and their axes (motors are owned by the caller).
    registered_motors: FnvIndexMap<String<32>, u32, 8>,
}

impl MotorSystem {
    /// Create a new motor system from configuration.
    ///
    /// No motors are created; register them individually with
    /// `register_motor()`.
    pub fn from_config(config: SystemConfig) -> Self {
        Self {
            config,
            registered_motors: FnvIndexMap::new(),
        }
    }

    /// Get the system configuration.
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Get a motor configuration by name.
    pub fn motor_config(&self, name: &str) -> Option<&MotorConfig> {
        self.config.motor(name)
    }

    /// Check if a motor name exists in the configuration.
    pub fn has_motor(&self, name: &str) -> bool {
        self.config.motor(name).is_some()
    }

    /// List all configured motor names.
    pub fn motor_names(&self) -> impl Iterator<Item = &str> {
        self.config.motor_names()
    }

    /// Axis of a configured motor.
    pub fn axis_of(&self, name: &str) -> Option<u32> {
        self.config.motor(name).map(|m| m.axis)
    }

    /// Register a motor as active in the system.
    ///
    /// The motor is built from its configuration and returned to the caller,
    /// still uninitialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the motor name doesn't exist in the configuration,
    /// or [`MotorError::AxisInUse`] if a registered motor already drives the
    /// same axis.
    pub fn register_motor<EN, IN1, IN2>(
        &mut self,
        name: &str,
        enable: EN,
        pin_1: IN1,
        pin_2: IN2,
    ) -> Result<DcMotor<EN, IN1, IN2, Uninitialized>>
    where
        EN: SetDutyCycle,
        IN1: OutputPin,
        IN2: OutputPin,
    {
        let motor_config = self.config.motor(name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })?;

        let axis = motor_config.axis;
        if self.registered_motors.values().any(|&a| a == axis) {
            return Err(Error::Motor(MotorError::AxisInUse(axis)));
        }

        let motor = DcMotorBuilder::new()
            .enable(enable)
            .pin_1(pin_1)
            .pin_2(pin_2)
            .from_motor_config(motor_config)
            .build()?;

        let motor_name: String<32> = String::try_from(name).unwrap_or_default();
        let _ = self.registered_motors.insert(motor_name, axis);

        Ok(motor)
    }

    /// Build a motor from configuration without registering it.
    ///
    /// # Errors
    ///
    /// Returns an error if the motor name doesn't exist or building fails.
    pub fn build_motor<EN, IN1, IN2>(
        &self,
        name: &str,
        enable: EN,
        pin_1: IN1,
        pin_2: IN2,
    ) -> Result<DcMotor<EN, IN1, IN2, Uninitialized>>
    where
        EN: SetDutyCycle,
        IN1: OutputPin,
        IN2: OutputPin,
    {
        DcMotorBuilder::new()
            .enable(enable)
            .pin_1(pin_1)
            .pin_2(pin_2)
            .from_config(&self.config, name)?
            .build()
    }

    /// Forget a registered motor, freeing its axis.
    ///
    /// Returns `true` if the motor was registered.
    pub fn unregister_motor(&mut self, name: &str) -> bool {
        let key = match String::<32>::try_from(name) {
            Ok(key) => key,
            Err(_) => return false,
        };
        self.registered_motors.remove(&key).is_some()
    }

    /// Check if a motor has been registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.registered_motors
            .iter()
            .any(|(k, _)| k.as_str() == name)
    }

    /// Get the number of registered motors.
    pub fn registered_count(&self) -> usize {
        self.registered_motors.len()
    }

    /// Get a tread pair by name, with error if not found.
    pub fn tread_config(&self, name: &str) -> Result<&TreadConfig> {
        self.config.tread(name).ok_or_else(|| {
            Error::Config(ConfigError::TreadNotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })
    }

    /// Motor configurations `(left, right)` of a tread pair.
    pub fn tread_motors(&self, name: &str) -> Result<(&MotorConfig, &MotorConfig)> {
        let tread = self.tread_config(name)?;
        let lookup = |motor: &String<32>| {
            self.config
                .motor(motor.as_str())
                .ok_or_else(|| Error::Config(ConfigError::MotorNotFound(motor.clone())))
        };
        Ok((lookup(&tread.left)?, lookup(&tread.right)?))
    }
}
