//! Speed ramp calculation.
//!
//! Produces the intermediate duty values between two speeds so a motor can be
//! soft-started or slowed without a current spike.

use crate::config::units::Speed;

/// Iterator over the duty values of a linear ramp.
///
/// Yields every intermediate value in `step` increments and always ends
/// exactly on the target. The starting speed is not yielded.
///
/// With a deadband, no non-zero value below it is yielded: a ramp up jumps
/// to the deadband, a ramp down jumps to the target.
#[derive(Debug, Clone)]
pub struct SpeedRamp {
    current: u8,
    target: u8,
    step: u8,
    deadband: u8,
}

impl SpeedRamp {
    /// Create a ramp from `from` to `to`.
    ///
    /// A `step` of zero jumps straight to the target.
    pub fn new(from: Speed, to: Speed, step: u8) -> Self {
        Self {
            current: from.0,
            target: to.0,
            step: if step == 0 { u8::MAX } else { step },
            deadband: 0,
        }
    }

    /// Skip non-zero values below `min`.
    pub fn with_deadband(mut self, min: Speed) -> Self {
        self.deadband = min.0;
        self
    }

    /// Number of duty writes remaining.
    pub fn remaining(&self) -> usize {
        let current = self.current as usize;
        let target = self.target as usize;
        let step = self.step as usize;

        if current < target {
            let floor = self.deadband.min(self.target) as usize;
            if current + step < floor {
                return 1 + ceil_div(target - floor, step);
            }
            ceil_div(target - current, step)
        } else if current > target {
            let floor = self.deadband as usize;
            if target < floor {
                return current.saturating_sub(floor) / step + 1;
            }
            ceil_div(current - target, step)
        } else {
            0
        }
    }

    /// Whether the ramp has reached its target.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.current == self.target
    }
}

impl Iterator for SpeedRamp {
    type Item = Speed;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_complete() {
            return None;
        }

        let rising = self.target > self.current;
        let mut next = if rising {
            self.current.saturating_add(self.step).min(self.target)
        } else {
            self.current.saturating_sub(self.step).max(self.target)
        };

        if next != 0 && next < self.deadband {
            next = if rising {
                self.deadband.min(self.target)
            } else {
                self.target
            };
        }

        self.current = next;
        Some(Speed(next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for SpeedRamp {}

fn ceil_div(n: usize, d: usize) -> usize {
    (n + d - 1) / d
}
