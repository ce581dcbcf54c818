//! Plain snapshot of a motor channel's outputs.

/// What a motor channel is currently writing.
///
/// `enable_pin` is the duty on the enable line (0-255); `pin_1` and `pin_2`
/// are the H-bridge input levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorDescriptor {
    /// Mechanical axis driven by this channel.
    pub axis: u32,
    /// Duty on the enable line.
    pub enable_pin: u8,
    /// Level of the first bridge input.
    pub pin_1: bool,
    /// Level of the second bridge input.
    pub pin_2: bool,
}
