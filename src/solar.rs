//! Sunrise and sunset hours from geographic coordinates.
//!
//! Used when `time_mode = "geo"` so the dial follows the real sun instead of
//! the fixed sunrise/sunset settings. Event times come from the `sunrise`
//! crate in UTC and are converted to local decimal hours.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use sunrise::{Coordinates, SolarDay, SolarEvent};

use crate::time_state::hours_from_time;

/// Validate latitude/longitude ranges.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        anyhow::bail!(
            "Invalid latitude: {}. Must be between -90 and 90 degrees",
            latitude
        );
    }
    if !(-180.0..=180.0).contains(&longitude) {
        anyhow::bail!(
            "Invalid longitude: {}. Must be between -180 and 180 degrees",
            longitude
        );
    }
    Ok(())
}

/// Calculate local sunrise and sunset for a location and date.
///
/// # Arguments
/// * `latitude` - Geographic latitude in degrees (-90 to +90)
/// * `longitude` - Geographic longitude in degrees (-180 to +180)
/// * `date` - Date for which to calculate sunrise/sunset
///
/// # Returns
/// * `Ok((sunrise_hours, sunset_hours))` - Local decimal hours
/// * `Err(_)` - If the coordinates are invalid
pub fn calculate_sunrise_sunset_hours(
    latitude: f64,
    longitude: f64,
    date: NaiveDate,
) -> Result<(f64, f64)> {
    validate_coordinates(latitude, longitude)?;

    let coord = Coordinates::new(latitude, longitude)
        .context("Failed to create coordinates")?;
    let solar_day = SolarDay::new(coord, date);

    let sunrise = solar_day
        .event_time(SolarEvent::Sunrise)
        .with_timezone(&Local)
        .time();
    let sunset = solar_day
        .event_time(SolarEvent::Sunset)
        .with_timezone(&Local)
        .time();

    Ok((hours_from_time(sunrise), hours_from_time(sunset)))
}

/// Sunrise and sunset for today at the given location.
pub fn today_sunrise_sunset_hours(latitude: f64, longitude: f64) -> Result<(f64, f64)> {
    calculate_sunrise_sunset_hours(latitude, longitude, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        assert!(calculate_sunrise_sunset_hours(91.0, 0.0, date).is_err());
        assert!(calculate_sunrise_sunset_hours(0.0, -181.0, date).is_err());
    }

    #[test]
    fn test_hours_are_in_day_range() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let (sunrise, sunset) = calculate_sunrise_sunset_hours(40.7128, -74.0060, date).unwrap();
        assert!((0.0..24.0).contains(&sunrise));
        assert!((0.0..24.0).contains(&sunset));
    }

    #[test]
    fn test_equinox_day_length_near_twelve_hours() {
        // Local timezone shifts both events equally, so the span is stable
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let (sunrise, sunset) = calculate_sunrise_sunset_hours(0.0, 0.0, date).unwrap();
        let span = crate::time_state::normalize_hour(sunset - sunrise);
        assert!((span - 12.1).abs() < 0.3, "day length was {}", span);
    }
}
