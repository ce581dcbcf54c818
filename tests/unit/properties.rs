//! Property tests for speed limits, ramps and mixing.

use proptest::prelude::*;

use tread_motor::config::{LimitPolicy, SpeedLimits};
use tread_motor::tread::mix_arcade;
use tread_motor::{SignedSpeed, Speed, SpeedRamp};

proptest! {
    #[test]
    fn clamped_speed_stays_in_range(min in 0u8..=255, span in 0u8..=255, requested in any::<u32>()) {
        let max = min.saturating_add(span);
        let limits = SpeedLimits::new(Speed(min), Speed(max), LimitPolicy::Clamp);

        let applied = limits.apply(requested).unwrap();
        prop_assert!(applied.is_zero() || (applied.0 >= min && applied.0 <= max));
        if requested == 0 {
            prop_assert_eq!(applied, Speed::ZERO);
        }
    }

    #[test]
    fn reject_policy_only_passes_in_range(min in 0u8..=255, span in 0u8..=255, requested in 0u32..1024) {
        let max = min.saturating_add(span);
        let limits = SpeedLimits::new(Speed(min), Speed(max), LimitPolicy::Reject);

        let in_range = requested == 0 || (requested >= min as u32 && requested <= max as u32);
        prop_assert_eq!(limits.apply(requested).is_ok(), in_range);
    }

    #[test]
    fn ramp_ends_on_target_monotonically(from in any::<u8>(), to in any::<u8>(), step in 1u8..=255) {
        let ramp = SpeedRamp::new(Speed(from), Speed(to), step);
        let expected_len = ramp.len();

        let mut last = from;
        let mut count = 0;
        for speed in ramp {
            prop_assert!(last.abs_diff(speed.0) <= step);
            if to >= from {
                prop_assert!(speed.0 > last);
            } else {
                prop_assert!(speed.0 < last);
            }
            last = speed.0;
            count += 1;
        }

        prop_assert_eq!(last, to);
        prop_assert_eq!(count, expected_len);
    }

    #[test]
    fn mixing_never_exceeds_full_scale(throttle in -255i32..=255, turn in -255i32..=255) {
        let (left, right) = mix_arcade(SignedSpeed::new(throttle), SignedSpeed::new(turn));

        prop_assert!(left.value().abs() <= 255);
        prop_assert!(right.value().abs() <= 255);
        // Turning right never makes the left tread slower than the right.
        if turn >= 0 {
            prop_assert!(left >= right);
        } else {
            prop_assert!(left <= right);
        }
    }
}
