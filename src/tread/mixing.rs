//! Throttle/turn mixing for skid-steer.

use crate::config::units::SignedSpeed;

/// Mix a throttle and turn command into `(left, right)` tread speeds.
///
/// `left = throttle + turn`, `right = throttle - turn`. If either side would
/// exceed full scale, both are scaled down by the same factor so the turn
/// ratio is kept.
pub fn mix_arcade(throttle: SignedSpeed, turn: SignedSpeed) -> (SignedSpeed, SignedSpeed) {
    let throttle = throttle.value() as i32;
    let turn = turn.value() as i32;
    let full = u8::MAX as i32;

    let mut left = throttle + turn;
    let mut right = throttle - turn;

    let peak = left.abs().max(right.abs());
    if peak > full {
        left = left * full / peak;
        right = right * full / peak;
    }

    (SignedSpeed::new(left), SignedSpeed::new(right))
}
