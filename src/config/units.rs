//! Unit types for motor speed.
//!
//! Speeds are duty values out of [`Speed::MAX`], the 8-bit range of the
//! enable line. Signed speeds carry direction in their sign.

use core::ops::Neg;

use serde::Deserialize;

/// Unsigned duty value written to the enable line (0 = off, 255 = full).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Speed(pub u8);

impl Speed {
    /// Motor off.
    pub const ZERO: Self = Self(0);
    /// Full duty.
    pub const MAX: Self = Self(u8::MAX);

    /// Create a new Speed value.
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether the motor is commanded off.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Saturating conversion from a wide unsigned request.
    #[inline]
    pub fn saturating_from(value: u32) -> Self {
        Self(value.min(u8::MAX as u32) as u8)
    }

    /// Duty as a fraction of full scale (0.0 to 1.0).
    #[inline]
    pub fn fraction(self) -> f32 {
        self.0 as f32 / u8::MAX as f32
    }
}

impl From<u8> for Speed {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// Signed speed: positive drives forward, negative drives backward.
///
/// Magnitude is clamped to `-255..=255` on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignedSpeed(i16);

impl SignedSpeed {
    /// Stopped.
    pub const ZERO: Self = Self(0);
    /// Full speed forward.
    pub const FULL_FORWARD: Self = Self(u8::MAX as i16);
    /// Full speed backward.
    pub const FULL_BACKWARD: Self = Self(-(u8::MAX as i16));

    /// Create a signed speed, clamping to `-255..=255`.
    #[inline]
    pub fn new(value: i32) -> Self {
        let max = u8::MAX as i32;
        Self(value.clamp(-max, max) as i16)
    }

    /// Create from a normalized command in `-1.0..=1.0` (e.g. a joystick axis).
    ///
    /// Out-of-range inputs saturate. NaN maps to zero.
    pub fn from_fraction(fraction: f32) -> Self {
        if fraction.is_nan() {
            return Self::ZERO;
        }
        let clamped = fraction.clamp(-1.0, 1.0);
        Self::new(libm::roundf(clamped * u8::MAX as f32) as i32)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i16 {
        self.0
    }

    /// Unsigned magnitude.
    #[inline]
    pub fn magnitude(self) -> Speed {
        Speed(self.0.unsigned_abs() as u8)
    }

    /// Whether this is a backward command.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl Neg for SignedSpeed {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<Speed> for SignedSpeed {
    fn from(speed: Speed) -> Self {
        Self(speed.0 as i16)
    }
}
