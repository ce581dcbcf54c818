//! DC motor channel driver.
//!
//! Generic over embedded-hal 1.0 pin types with type-state safety.

use core::marker::PhantomData;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::config::units::{SignedSpeed, Speed};
use crate::config::{RampConfig, SpeedLimits};
use crate::error::{MotorError, Result};
use crate::motion::{BridgeState, Direction, SpeedRamp};

use super::descriptor::MotorDescriptor;
use super::state::{MotorState, Ready, StateName, Uninitialized};

/// One H-bridge DC motor channel with type-state safety.
///
/// Generic over:
/// - `EN`: enable line (must implement `SetDutyCycle`)
/// - `IN1`, `IN2`: bridge inputs (must implement `OutputPin`)
/// - `STATE`: Type-state marker (defaults to `Ready`)
pub struct DcMotor<EN, IN1, IN2, STATE = Ready>
where
    EN: SetDutyCycle,
    IN1: OutputPin,
    IN2: OutputPin,
    STATE: MotorState,
{
    /// Enable line; its duty cycle sets the speed.
    enable: EN,

    /// First bridge input.
    pin_1: IN1,

    /// Second bridge input.
    pin_2: IN2,

    /// Mechanical axis this channel drives.
    axis: u32,

    /// Motor name for logging/debugging.
    name: heapless::String<32>,

    /// Whether the bridge input pair is swapped.
    invert_direction: bool,

    /// Allowed duty range.
    limits: SpeedLimits,

    /// Soft-start ramp, if configured.
    ramp: Option<RampConfig>,

    /// Last duty written to the enable line.
    speed: Speed,

    /// Last state written to the bridge inputs.
    bridge: BridgeState,

    /// Type-state marker.
    _state: PhantomData<STATE>,
}

impl<EN, IN1, IN2, STATE> DcMotor<EN, IN1, IN2, STATE>
where
    EN: SetDutyCycle,
    IN1: OutputPin,
    IN2: OutputPin,
    STATE: MotorState + StateName,
{
    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the driven axis.
    #[inline]
    pub fn axis(&self) -> u32 {
        self.axis
    }

    /// Last duty written to the enable line.
    #[inline]
    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Last bridge state written.
    #[inline]
    pub fn bridge(&self) -> BridgeState {
        self.bridge
    }

    /// Direction currently driven, if any.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.bridge.direction()
    }

    /// Get the speed limits.
    #[inline]
    pub fn limits(&self) -> &SpeedLimits {
        &self.limits
    }

    /// Get the ramp settings.
    #[inline]
    pub fn ramp(&self) -> Option<RampConfig> {
        self.ramp
    }

    /// Snapshot of axis, duty and bridge input levels.
    pub fn descriptor(&self) -> MotorDescriptor {
        let (pin_1, pin_2) = self.bridge.levels(self.invert_direction);
        MotorDescriptor {
            axis: self.axis,
            enable_pin: self.speed.0,
            pin_1,
            pin_2,
        }
    }

    /// Get the current state name.
    #[inline]
    pub fn state_name(&self) -> &'static str {
        STATE::name()
    }

    /// Give back the enable line and both bridge inputs.
    ///
    /// Outputs are left as last written.
    pub fn release(self) -> (EN, IN1, IN2) {
        (self.enable, self.pin_1, self.pin_2)
    }

    fn write_duty(&mut self, speed: Speed) -> Result<()> {
        self.enable
            .set_duty_cycle_fraction(speed.0 as u16, u8::MAX as u16)
            .map_err(|_| MotorError::PwmError)?;
        self.speed = speed;
        Ok(())
    }

    fn write_bridge(&mut self, state: BridgeState) -> Result<()> {
        let (level_1, level_2) = state.levels(self.invert_direction);

        // Pull inputs low before raising the other one.
        if !level_1 {
            drive_pin(&mut self.pin_1, false)?;
        }
        if !level_2 {
            drive_pin(&mut self.pin_2, false)?;
        }
        if level_1 {
            drive_pin(&mut self.pin_1, true)?;
        }
        if level_2 {
            drive_pin(&mut self.pin_2, true)?;
        }

        self.bridge = state;
        Ok(())
    }

    fn into_state<NEXT: MotorState>(self) -> DcMotor<EN, IN1, IN2, NEXT> {
        DcMotor {
            enable: self.enable,
            pin_1: self.pin_1,
            pin_2: self.pin_2,
            axis: self.axis,
            name: self.name,
            invert_direction: self.invert_direction,
            limits: self.limits,
            ramp: self.ramp,
            speed: self.speed,
            bridge: self.bridge,
            _state: PhantomData,
        }
    }
}

impl<EN, IN1, IN2> DcMotor<EN, IN1, IN2, Uninitialized>
where
    EN: SetDutyCycle,
    IN1: OutputPin,
    IN2: OutputPin,
{
    /// Create a new motor in the Uninitialized state.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        enable: EN,
        pin_1: IN1,
        pin_2: IN2,
        axis: u32,
        name: heapless::String<32>,
        invert_direction: bool,
        limits: SpeedLimits,
        ramp: Option<RampConfig>,
    ) -> Self {
        Self {
            enable,
            pin_1,
            pin_2,
            axis,
            name,
            invert_direction,
            limits,
            ramp,
            speed: Speed::ZERO,
            bridge: BridgeState::Coast,
            _state: PhantomData,
        }
    }

    /// Put the outputs in a known state: zero duty, both inputs low.
    ///
    /// # Errors
    ///
    /// Returns an error if the enable line or a bridge input cannot be
    /// written. The motor is dropped and its outputs may be partially set.
    pub fn init(mut self) -> Result<DcMotor<EN, IN1, IN2, Ready>> {
        self.write_duty(Speed::ZERO)?;
        self.write_bridge(BridgeState::Coast)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("{=str}: initialized on axis {}", self.name.as_str(), self.axis);

        Ok(self.into_state())
    }
}

impl<EN, IN1, IN2> DcMotor<EN, IN1, IN2, Ready>
where
    EN: SetDutyCycle,
    IN1: OutputPin,
    IN2: OutputPin,
{
    /// Drive the bridge inputs for a direction.
    ///
    /// Does nothing if the bridge already drives that direction. Leaving a
    /// brake zeroes the duty first, so the brake's full duty never drives.
    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        let state = BridgeState::Drive(direction);
        if self.bridge == state {
            return Ok(());
        }

        if self.bridge == BridgeState::Brake && !self.speed.is_zero() {
            self.stop()?;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("{=str}: direction {}", self.name.as_str(), direction);

        self.write_bridge(state)
    }

    /// Write a duty to the enable line after applying the speed limits.
    ///
    /// Returns the duty actually written.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::SpeedOutOfRange`] if the limits reject the
    /// request, or [`MotorError::PwmError`] if the write fails.
    pub fn set_velocity(&mut self, speed: u32) -> Result<Speed> {
        let applied = self.apply_limits(speed)?;
        self.write_velocity(applied)
    }

    /// Zero the duty, leaving the bridge inputs as they are.
    pub fn stop(&mut self) -> Result<()> {
        self.write_duty(Speed::ZERO)
    }

    /// Short the motor terminals: both inputs high, full duty.
    pub fn brake(&mut self) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::debug!("{=str}: brake", self.name.as_str());

        self.write_bridge(BridgeState::Brake)?;
        self.write_duty(Speed::MAX)
    }

    /// Let the motor spin down freely: zero duty, both inputs low.
    pub fn coast(&mut self) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::debug!("{=str}: coast", self.name.as_str());

        self.write_duty(Speed::ZERO)?;
        self.write_bridge(BridgeState::Coast)
    }

    /// Drive with a signed speed: the sign picks the direction.
    ///
    /// Zero coasts. Reversing while running, or driving out of a brake,
    /// zeroes the duty before the bridge inputs change. A speed the limits
    /// reject leaves every output untouched.
    pub fn drive(&mut self, speed: SignedSpeed) -> Result<Speed> {
        if speed == SignedSpeed::ZERO {
            self.coast()?;
            return Ok(Speed::ZERO);
        }

        let applied = self.apply_limits(speed.magnitude().0 as u32)?;

        let direction = Direction::from_sign(speed.value() as i32);
        let stop_first = match self.bridge {
            BridgeState::Drive(current) => current != direction,
            BridgeState::Brake => true,
            BridgeState::Coast => false,
        };

        if stop_first && !self.speed.is_zero() {
            self.stop()?;
        }

        self.set_direction(direction)?;
        self.write_velocity(applied)
    }

    /// Move the duty to `speed` through the configured ramp.
    ///
    /// Without a ramp the target is written directly. Intermediate duties
    /// skip the band below `limits.min`. Returns the final duty.
    pub fn ramp_to<D: DelayNs>(&mut self, speed: u32, delay: &mut D) -> Result<Speed> {
        let target = self.limits.apply(speed)?;

        let Some(ramp) = self.ramp else {
            self.write_duty(target)?;
            return Ok(target);
        };

        let mut steps = SpeedRamp::new(self.speed, target, ramp.step)
            .with_deadband(self.limits.min)
            .peekable();
        while let Some(step) = steps.next() {
            self.write_duty(step)?;
            if steps.peek().is_some() {
                delay.delay_ms(ramp.interval_ms);
            }
        }

        Ok(target)
    }

    fn apply_limits(&self, speed: u32) -> Result<Speed> {
        let applied = self.limits.apply(speed)?;

        #[cfg(feature = "defmt")]
        {
            if applied.0 as u32 != speed {
                defmt::warn!("{=str}: speed {} clamped to {}", self.name.as_str(), speed, applied);
            }
        }

        Ok(applied)
    }

    fn write_velocity(&mut self, applied: Speed) -> Result<Speed> {
        self.write_duty(applied)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("{=str}: duty {}", self.name.as_str(), applied);

        Ok(applied)
    }
}

fn drive_pin<P: OutputPin>(pin: &mut P, high: bool) -> Result<()> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| MotorError::PinError)?;
    Ok(())
}
