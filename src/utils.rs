//! Utility functions shared across the codebase.
//!
//! This module provides interpolation, range mapping and the small text
//! formatters used by the sketches and the CLI.

use std::path::Path;

use crate::time_state::normalize_hour;

/// Interpolate between two f32 values based on progress (0.0 to 1.0).
///
/// # Arguments
/// * `start` - Starting value (returned when progress = 0.0)
/// * `end` - Ending value (returned when progress = 1.0)
/// * `progress` - Interpolation progress, automatically clamped to [0.0, 1.0]
///
/// # Examples
/// ```
/// use daydial::utils::interpolate_f32;
/// assert_eq!(interpolate_f32(20.0, 255.0, 0.5), 137.5);
/// assert_eq!(interpolate_f32(100.0, 90.0, 2.0), 90.0);
/// ```
pub fn interpolate_f32(start: f32, end: f32, progress: f32) -> f32 {
    start + (end - start) * progress.clamp(0.0, 1.0)
}

/// Re-map `value` from one range onto another, like a canvas `map()`.
///
/// With `clamp` set the result is limited to the target range (either order).
///
/// # Examples
/// ```
/// use daydial::utils::map_range;
/// assert_eq!(map_range(0.0, -180.0, 180.0, 0.0, 900.0, false), 450.0);
/// assert_eq!(map_range(10.0, 6.0, 9.5, 0.0, 1.0, true), 1.0);
/// ```
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64, clamp: bool) -> f64 {
    let mapped = out_min + (value - in_min) / (in_max - in_min) * (out_max - out_min);
    if clamp {
        let (lo, hi) = if out_min <= out_max {
            (out_min, out_max)
        } else {
            (out_max, out_min)
        };
        mapped.clamp(lo, hi)
    } else {
        mapped
    }
}

/// Format decimal hours as `HH:MM`, wrapping into a single day.
///
/// # Examples
/// ```
/// use daydial::utils::format_hour;
/// assert_eq!(format_hour(18.5), "18:30");
/// assert_eq!(format_hour(-1.0), "23:00");
/// ```
pub fn format_hour(h: f64) -> String {
    let h = normalize_hour(h);
    if !h.is_finite() {
        return "--:--".to_string();
    }
    let hh = h.floor();
    let mm = ((h - hh) * 60.0).floor();
    format!("{:02}:{:02}", hh as u32, mm as u32)
}

/// Twelve-hour dial label for an hour value, e.g. `12AM`, `3PM`.
pub fn hour_label(h: f64) -> String {
    let h = normalize_hour(h).round() as u32 % 24;
    match h {
        0 => "12AM".to_string(),
        1..=11 => format!("{}AM", h),
        12 => "12PM".to_string(),
        _ => format!("{}PM", h - 12),
    }
}

/// Format milliseconds as zero-padded `HH:MM:SS`.
pub fn format_clock(ms: u64) -> String {
    let total_secs = ms / 1000;
    format!(
        "{:02}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    )
}

/// Format milliseconds as `H:MM:SS` with an unpadded hour.
pub fn format_elapsed(ms: u64) -> String {
    let s = ms / 1000;
    let m = s / 60;
    let h = m / 60;
    format!("{}:{:02}:{:02}", h, m % 60, s % 60)
}

/// Group the integer part of a number with commas, e.g. `230,210`.
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Render a text progress bar of `width` cells.
pub fn progress_bar(progress: f32, width: usize) -> String {
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    let filled = (progress * width as f32).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

/// Display a path with the home directory shortened to `~`.
pub fn path_for_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_f32_basic() {
        assert_eq!(interpolate_f32(0.0, 100.0, 0.0), 0.0);
        assert_eq!(interpolate_f32(0.0, 100.0, 1.0), 100.0);
        assert_eq!(interpolate_f32(0.0, 100.0, 0.5), 50.0);
    }

    #[test]
    fn test_interpolate_f32_clamping() {
        assert_eq!(interpolate_f32(0.0, 100.0, -0.5), 0.0);
        assert_eq!(interpolate_f32(0.0, 100.0, 1.5), 100.0);
    }

    #[test]
    fn test_map_range_inverted_target() {
        // latitude 90 maps to the top of the map
        assert_eq!(map_range(90.0, 90.0, -90.0, 180.0, 630.0, false), 180.0);
        assert_eq!(map_range(-90.0, 90.0, -90.0, 180.0, 630.0, false), 630.0);
        assert_eq!(map_range(0.0, 90.0, -90.0, 180.0, 630.0, false), 405.0);
    }

    #[test]
    fn test_map_range_clamps_both_orders() {
        assert_eq!(map_range(500_000.0, 1000.0, 250_000.0, 8.0, 45.0, true), 45.0);
        assert_eq!(map_range(0.0, 1000.0, 250_000.0, 8.0, 45.0, true), 8.0);
        assert_eq!(map_range(2.0, 0.0, 1.0, 10.0, 0.0, true), 0.0);
    }

    #[test]
    fn test_format_hour() {
        assert_eq!(format_hour(7.0), "07:00");
        assert_eq!(format_hour(7.25), "07:15");
        assert_eq!(format_hour(24.0), "00:00");
        assert_eq!(format_hour(f64::NAN), "--:--");
    }

    #[test]
    fn test_hour_label() {
        assert_eq!(hour_label(0.0), "12AM");
        assert_eq!(hour_label(3.0), "3AM");
        assert_eq!(hour_label(12.0), "12PM");
        assert_eq!(hour_label(21.0), "9PM");
        assert_eq!(hour_label(23.6), "12AM");
    }

    #[test]
    fn test_format_clock_and_elapsed() {
        assert_eq!(format_clock(0), "00:00:00");
        assert_eq!(format_clock(3_723_000), "01:02:03");
        assert_eq!(format_elapsed(3_723_999), "1:02:03");
        assert_eq!(format_elapsed(59_000), "0:00:59");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(227_898.0), "227,898");
        assert_eq!(format_thousands(1_234_567.0), "1,234,567");
        assert_eq!(format_thousands(-4500.0), "-4,500");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0, 4), "[░░░░]");
        assert_eq!(progress_bar(0.5, 4), "[██░░]");
        assert_eq!(progress_bar(3.0, 4), "[████]");
        assert_eq!(progress_bar(f32::NAN, 2), "[░░]");
    }
}
