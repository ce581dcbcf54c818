//! Skid-steer tread drive.
//!
//! Drives two motor channels as the left and right tread of a tracked base.

mod mixing;

pub use mixing::mix_arcade;

use crate::config::units::SignedSpeed;
use crate::error::Result;
use crate::motor::{HBridge, MotorDescriptor};

/// Left and right tread channels driven together.
///
/// Holds the last command sent to each side.
pub struct TreadDrive<L: HBridge, R: HBridge> {
    left: L,
    right: R,
    command: (SignedSpeed, SignedSpeed),
}

impl<L: HBridge, R: HBridge> TreadDrive<L, R> {
    /// Pair two ready channels.
    pub fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            command: (SignedSpeed::ZERO, SignedSpeed::ZERO),
        }
    }

    /// Drive both treads at the same signed speed.
    pub fn set_velocity(&mut self, speed: SignedSpeed) -> Result<()> {
        self.tank(speed, speed)
    }

    /// Drive each tread independently.
    ///
    /// The left side is written first; if it fails the right side is left
    /// untouched.
    pub fn tank(&mut self, left: SignedSpeed, right: SignedSpeed) -> Result<()> {
        self.left.drive(left)?;
        self.command.0 = left;
        self.right.drive(right)?;
        self.command.1 = right;
        Ok(())
    }

    /// Drive from a throttle and a turn rate (positive turns right).
    pub fn arcade(&mut self, throttle: SignedSpeed, turn: SignedSpeed) -> Result<()> {
        let (left, right) = mix_arcade(throttle, turn);
        self.tank(left, right)
    }

    /// Spin in place (positive turns right).
    pub fn pivot(&mut self, rate: SignedSpeed) -> Result<()> {
        self.tank(rate, -rate)
    }

    /// Brake both treads.
    pub fn brake(&mut self) -> Result<()> {
        self.left.brake()?;
        self.right.brake()?;
        self.command = (SignedSpeed::ZERO, SignedSpeed::ZERO);
        Ok(())
    }

    /// Let both treads coast.
    pub fn coast(&mut self) -> Result<()> {
        self.left.coast()?;
        self.right.coast()?;
        self.command = (SignedSpeed::ZERO, SignedSpeed::ZERO);
        Ok(())
    }

    /// Last `(left, right)` command applied.
    pub fn command(&self) -> (SignedSpeed, SignedSpeed) {
        self.command
    }

    /// Current outputs of both channels.
    pub fn descriptors(&self) -> (MotorDescriptor, MotorDescriptor) {
        (self.left.descriptor(), self.right.descriptor())
    }

    /// Left channel.
    pub fn left(&mut self) -> &mut L {
        &mut self.left
    }

    /// Right channel.
    pub fn right(&mut self) -> &mut R {
        &mut self.right
    }

    /// Split back into the two channels.
    pub fn release(self) -> (L, R) {
        (self.left, self.right)
    }
}
