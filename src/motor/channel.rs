//! Object-safe seam over a ready motor channel.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::config::units::{SignedSpeed, Speed};
use crate::error::Result;
use crate::motion::Direction;

use super::descriptor::MotorDescriptor;
use super::driver::DcMotor;
use super::state::Ready;

/// Anything that can be driven like one H-bridge channel.
///
/// Lets [`TreadDrive`](crate::tread::TreadDrive) hold channels with different
/// pin types, or test doubles.
pub trait HBridge {
    /// Mechanical axis this channel drives.
    fn axis(&self) -> u32;

    /// Current outputs.
    fn descriptor(&self) -> MotorDescriptor;

    /// Drive the bridge inputs for a direction.
    fn set_direction(&mut self, direction: Direction) -> Result<()>;

    /// Write a duty to the enable line; returns the duty written.
    fn set_velocity(&mut self, speed: u32) -> Result<Speed>;

    /// Drive with a signed speed.
    fn drive(&mut self, speed: SignedSpeed) -> Result<Speed>;

    /// Short the motor terminals.
    fn brake(&mut self) -> Result<()>;

    /// Release the motor terminals.
    fn coast(&mut self) -> Result<()>;
}

impl<EN, IN1, IN2> HBridge for DcMotor<EN, IN1, IN2, Ready>
where
    EN: SetDutyCycle,
    IN1: OutputPin,
    IN2: OutputPin,
{
    fn axis(&self) -> u32 {
        DcMotor::axis(self)
    }

    fn descriptor(&self) -> MotorDescriptor {
        DcMotor::descriptor(self)
    }

    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        DcMotor::set_direction(self, direction)
    }

    fn set_velocity(&mut self, speed: u32) -> Result<Speed> {
        DcMotor::set_velocity(self, speed)
    }

    fn drive(&mut self, speed: SignedSpeed) -> Result<Speed> {
        DcMotor::drive(self, speed)
    }

    fn brake(&mut self) -> Result<()> {
        DcMotor::brake(self)
    }

    fn coast(&mut self) -> Result<()> {
        DcMotor::coast(self)
    }
}

impl<T: HBridge + ?Sized> HBridge for &mut T {
    fn axis(&self) -> u32 {
        T::axis(self)
    }

    fn descriptor(&self) -> MotorDescriptor {
        T::descriptor(self)
    }

    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        T::set_direction(self, direction)
    }

    fn set_velocity(&mut self, speed: u32) -> Result<Speed> {
        T::set_velocity(self, speed)
    }

    fn drive(&mut self, speed: SignedSpeed) -> Result<Speed> {
        T::drive(self, speed)
    }

    fn brake(&mut self) -> Result<()> {
        T::brake(self)
    }

    fn coast(&mut self) -> Result<()> {
        T::coast(self)
    }
}
