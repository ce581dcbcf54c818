//! Direction and H-bridge input mapping.

/// Direction of motor rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Direction {
    /// Forward rotation.
    Forward = 0,
    /// Backward rotation.
    Backward = 1,
}

impl Direction {
    /// Get direction from a signed value (zero counts as forward).
    #[inline]
    pub fn from_sign(value: i32) -> Self {
        if value >= 0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = u8;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::Forward),
            1 => Ok(Direction::Backward),
            other => Err(other),
        }
    }
}

/// Logic levels on the H-bridge input pair.
///
/// | pin_1 | pin_2 | state    |
/// |-------|-------|----------|
/// | high  | low   | forward  |
/// | low   | high  | backward |
/// | high  | high  | brake    |
/// | low   | low   | coast    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeState {
    /// Both inputs low: motor terminals float.
    Coast,
    /// Driving in a direction.
    Drive(Direction),
    /// Both inputs high: motor terminals shorted.
    Brake,
}

impl BridgeState {
    /// Pin levels `(pin_1, pin_2)` for this state.
    ///
    /// `invert` swaps the pair, for motors wired the other way round.
    pub fn levels(self, invert: bool) -> (bool, bool) {
        let (a, b) = match self {
            BridgeState::Coast => (false, false),
            BridgeState::Brake => (true, true),
            BridgeState::Drive(Direction::Forward) => (true, false),
            BridgeState::Drive(Direction::Backward) => (false, true),
        };
        if invert {
            (b, a)
        } else {
            (a, b)
        }
    }

    /// Direction being driven, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            BridgeState::Drive(direction) => Some(direction),
            _ => None,
        }
    }
}
