use proptest::prelude::*;

use daydial::constants::{DAY_COLOR, NIGHT_COLOR, TRANSITION_HALF_WIDTH};
use daydial::time_state::{
    TimeState, TransitionState, color_for_time, get_transition_state, in_cyclic_interval,
    is_daytime, normalize_hour,
};

/// Sunrise/sunset pairs whose transition windows do not overlap.
fn sun_times_strategy() -> impl Strategy<Value = (f64, f64)> {
    (0.0..24.0f64, 1.0..23.0f64).prop_map(|(sunrise, gap)| (sunrise, normalize_hour(sunrise + gap)))
}

fn channel_between(value: f32, a: f32, b: f32) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    value >= lo - 1e-3 && value <= hi + 1e-3
}

proptest! {
    #[test]
    fn test_normalize_hour_range(h in -1.0e6..1.0e6f64) {
        let n = normalize_hour(h);
        prop_assert!((0.0..24.0).contains(&n), "normalize_hour({}) = {}", h, n);
    }

    #[test]
    fn test_normalize_hour_is_periodic(h in 0.0..24.0f64, k in -50i32..50) {
        let shifted = normalize_hour(h + 24.0 * k as f64);
        // shifting by whole days keeps the same position on the circle
        let diff = (shifted - h).abs();
        prop_assert!(diff < 1e-6 || (24.0 - diff) < 1e-6, "{} vs {}", shifted, h);
    }

    #[test]
    fn test_color_stays_between_endpoints(
        t in -48.0..48.0f64,
        (sunrise, sunset) in sun_times_strategy()
    ) {
        let c = color_for_time(t, sunrise, sunset);
        prop_assert!(c.is_valid());
        prop_assert!(channel_between(c.r, DAY_COLOR.r, NIGHT_COLOR.r));
        prop_assert!(channel_between(c.g, DAY_COLOR.g, NIGHT_COLOR.g));
        prop_assert!(channel_between(c.b, DAY_COLOR.b, NIGHT_COLOR.b));
    }

    #[test]
    fn test_color_depends_only_on_time_of_day(
        t in 0.0..24.0f64,
        days in -3i32..3,
        (sunrise, sunset) in sun_times_strategy()
    ) {
        let a = color_for_time(t, sunrise, sunset);
        let b = color_for_time(t + 24.0 * days as f64, sunrise, sunset);
        prop_assert!((a.r - b.r).abs() < 1e-2);
        prop_assert!((a.g - b.g).abs() < 1e-2);
        prop_assert!((a.b - b.b).abs() < 1e-2);
    }

    #[test]
    fn test_daytime_matches_stable_day_state(
        t in 0.0..24.0f64,
        (sunrise, sunset) in sun_times_strategy()
    ) {
        let state = get_transition_state(t, sunrise, sunset);
        if state == TransitionState::Stable(TimeState::Day) {
            prop_assert!(is_daytime(t, sunrise, sunset));
        }
        if state == TransitionState::Stable(TimeState::Night) {
            prop_assert!(!is_daytime(t, sunrise, sunset));
        }
    }

    #[test]
    fn test_far_from_boundaries_is_stable(
        (sunrise, sunset) in sun_times_strategy()
    ) {
        // The midpoint of the day span, measured forward from sunrise
        let day_len = normalize_hour(sunset - sunrise);
        prop_assume!(day_len > 2.0 * TRANSITION_HALF_WIDTH + 0.1);
        let midday = normalize_hour(sunrise + day_len / 2.0);
        prop_assert_eq!(color_for_time(midday, sunrise, sunset), DAY_COLOR);

        let night_len = 24.0 - day_len;
        prop_assume!(night_len > 2.0 * TRANSITION_HALF_WIDTH + 0.1);
        let midnight = normalize_hour(sunset + night_len / 2.0);
        prop_assert_eq!(color_for_time(midnight, sunrise, sunset), NIGHT_COLOR);
    }

    #[test]
    fn test_transition_progress_in_unit_range(
        offset in -TRANSITION_HALF_WIDTH..TRANSITION_HALF_WIDTH,
        (sunrise, sunset) in sun_times_strategy()
    ) {
        match get_transition_state(sunrise + offset, sunrise, sunset) {
            TransitionState::Transitioning { from, to, progress } => {
                prop_assert_eq!(from, TimeState::Night);
                prop_assert_eq!(to, TimeState::Day);
                prop_assert!((0.0..=1.0).contains(&progress));
            }
            other => prop_assert!(false, "expected sunrise transition, got {:?}", other),
        }
    }

    #[test]
    fn test_cyclic_interval_complement(
        t in 0.0..24.0f64,
        a in 0.0..24.0f64,
        b in 0.0..24.0f64
    ) {
        prop_assume!(t != a && t != b && a != b);
        // [a, b] and [b, a] cover the circle and only share their endpoints
        prop_assert!(in_cyclic_interval(t, a, b) != in_cyclic_interval(t, b, a));
    }
}
