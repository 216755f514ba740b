//! Time-of-day state for the day/night color model.
//!
//! Times are decimal hours in [0, 24). Sunrise and sunset each sit at the
//! center of a transition window of [`TRANSITION_HALF_WIDTH`] hours to either
//! side, during which the dial color blends between the night and day colors.
//!
//! ## Key Functionality
//! - **Normalization**: wrapping any hour value into [0, 24)
//! - **Cyclic intervals**: membership tests for windows that cross midnight
//! - **State Detection**: day, night, or transitioning with progress
//! - **Color**: the blended color for a time of day
//!
//! Non-finite inputs are not rejected. They flow through as NaN and come out
//! as [`Rgb::INVALID`] from the color functions so callers can spot a bad
//! upstream value.

use chrono::{Local, NaiveTime, Timelike};

use crate::color::{Palette, Rgb};
use crate::constants::{HOURS_PER_DAY, TRANSITION_HALF_WIDTH};

/// Represents the basic time-based state of the dial.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum TimeState {
    Day,
    Night,
}

/// Represents the current transition state with progress information.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum TransitionState {
    Stable(TimeState),
    Transitioning {
        from: TimeState,
        to: TimeState,
        progress: f32, // 0.0 = start, 1.0 = complete
    },
}

/// Wrap an hour value into [0, 24).
///
/// # Examples
/// ```
/// use daydial::time_state::normalize_hour;
/// assert_eq!(normalize_hour(25.5), 1.5);
/// assert_eq!(normalize_hour(-0.5), 23.5);
/// ```
pub fn normalize_hour(h: f64) -> f64 {
    let h = h % HOURS_PER_DAY;
    let h = if h < 0.0 { h + HOURS_PER_DAY } else { h };
    // -1e-17 + 24 rounds to 24.0 in f64
    if h >= HOURS_PER_DAY { 0.0 } else { h }
}

/// Whether `t` lies in the closed interval `[a, b]` on a 24h circle.
///
/// When `a > b` the interval wraps past midnight.
pub fn in_cyclic_interval(t: f64, a: f64, b: f64) -> bool {
    if a <= b {
        t >= a && t <= b
    } else {
        t >= a || t <= b
    }
}

/// Hours elapsed on the circle going forward from `from` to `to`.
fn forward_distance(from: f64, to: f64) -> f64 {
    (to - from + HOURS_PER_DAY) % HOURS_PER_DAY
}

/// The four normalized boundaries of the sunrise and sunset windows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionWindows {
    pub sunrise_start: f64,
    pub sunrise_end: f64,
    pub sunset_start: f64,
    pub sunset_end: f64,
}

impl TransitionWindows {
    pub fn new(sunrise: f64, sunset: f64) -> Self {
        let sunrise = normalize_hour(sunrise);
        let sunset = normalize_hour(sunset);
        Self {
            sunrise_start: normalize_hour(sunrise - TRANSITION_HALF_WIDTH),
            sunrise_end: normalize_hour(sunrise + TRANSITION_HALF_WIDTH),
            sunset_start: normalize_hour(sunset - TRANSITION_HALF_WIDTH),
            sunset_end: normalize_hour(sunset + TRANSITION_HALF_WIDTH),
        }
    }

    fn progress_from(start: f64, t: f64) -> f32 {
        let f = forward_distance(start, t) / (TRANSITION_HALF_WIDTH * 2.0);
        // clamp keeps NaN, which is what we want here
        f.clamp(0.0, 1.0) as f32
    }

    /// Classify a normalized time against these windows.
    ///
    /// The sunrise window is checked first, then the sunset window, then the
    /// day span between them. Anything else is night.
    pub fn state_at(&self, t: f64) -> TransitionState {
        if t.is_nan() {
            // NaN fails every comparison and would land in the night branch
            return TransitionState::Transitioning {
                from: TimeState::Night,
                to: TimeState::Day,
                progress: f32::NAN,
            };
        }

        if in_cyclic_interval(t, self.sunrise_start, self.sunrise_end) {
            return TransitionState::Transitioning {
                from: TimeState::Night,
                to: TimeState::Day,
                progress: Self::progress_from(self.sunrise_start, t),
            };
        }

        if in_cyclic_interval(t, self.sunset_start, self.sunset_end) {
            return TransitionState::Transitioning {
                from: TimeState::Day,
                to: TimeState::Night,
                progress: Self::progress_from(self.sunset_start, t),
            };
        }

        if in_cyclic_interval(t, self.sunrise_end, self.sunset_start) {
            TransitionState::Stable(TimeState::Day)
        } else {
            TransitionState::Stable(TimeState::Night)
        }
    }
}

/// Determine the transition state for time `t` given sunrise and sunset hours.
pub fn get_transition_state(t: f64, sunrise: f64, sunset: f64) -> TransitionState {
    let windows = TransitionWindows::new(sunrise, sunset);
    if !sunrise.is_finite() || !sunset.is_finite() {
        return windows.state_at(f64::NAN);
    }
    windows.state_at(normalize_hour(t))
}

fn color_for_state(state: TransitionState, palette: &Palette) -> Rgb {
    match state {
        TransitionState::Stable(TimeState::Day) => palette.day,
        TransitionState::Stable(TimeState::Night) => palette.night,
        TransitionState::Transitioning { from, to, progress } => {
            let endpoint = |s: TimeState| match s {
                TimeState::Day => palette.day,
                TimeState::Night => palette.night,
            };
            endpoint(from).lerp(&endpoint(to), progress)
        }
    }
}

/// Dial color for time `t` using the default day/night palette.
///
/// # Examples
/// ```
/// use daydial::constants::DAY_COLOR;
/// use daydial::time_state::color_for_time;
/// assert_eq!(color_for_time(12.75, 7.0, 18.5), DAY_COLOR);
/// ```
pub fn color_for_time(t: f64, sunrise: f64, sunset: f64) -> Rgb {
    color_for_time_with(t, sunrise, sunset, &Palette::default())
}

/// Dial color for time `t` blended between the endpoints of `palette`.
pub fn color_for_time_with(t: f64, sunrise: f64, sunset: f64, palette: &Palette) -> Rgb {
    color_for_state(get_transition_state(t, sunrise, sunset), palette)
}

/// Whether `t` is in full daylight, i.e. between the end of the sunrise
/// window and the start of the sunset window.
pub fn is_daytime(t: f64, sunrise: f64, sunset: f64) -> bool {
    let t = normalize_hour(t);
    let start = normalize_hour(sunrise + TRANSITION_HALF_WIDTH);
    let end = normalize_hour(sunset - TRANSITION_HALF_WIDTH);
    in_cyclic_interval(t, start, end)
}

/// Decimal hours for a wall-clock time, e.g. 13:30:00 is 13.5.
pub fn hours_from_time(time: NaiveTime) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0
}

/// Current local time of day as decimal hours.
pub fn current_hour() -> f64 {
    hours_from_time(Local::now().time())
}

/// Wall-clock time for decimal hours, rounded to the second and wrapped into
/// a single day. `None` for non-finite input.
pub fn time_from_hours(h: f64) -> Option<NaiveTime> {
    let h = normalize_hour(h);
    if !h.is_finite() {
        return None;
    }
    let secs = (h * 3600.0).round() as u32 % 86_400;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
}
