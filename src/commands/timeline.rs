//! Implementation of `daydial timeline`: the dial colors across one day.

use anyhow::Result;

use crate::args::TimelineArgs;
use crate::color::{Palette, Rgb};
use crate::config::Config;
use crate::logger::Log;
use crate::time_state::{TransitionState, color_for_time_with, get_transition_state};
use crate::utils::format_hour;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineRow {
    pub hour: f64,
    pub color: Rgb,
    pub state: TransitionState,
}

/// Rows from midnight every `step_minutes` until the end of the day.
pub fn timeline_rows(sunrise: f64, sunset: f64, step_minutes: u32, palette: &Palette) -> Vec<TimelineRow> {
    let step = step_minutes.max(1) as usize;
    (0..24 * 60)
        .step_by(step)
        .map(|minute| {
            let hour = minute as f64 / 60.0;
            TimelineRow {
                hour,
                color: color_for_time_with(hour, sunrise, sunset, palette),
                state: get_transition_state(hour, sunrise, sunset),
            }
        })
        .collect()
}

pub fn handle_timeline_command(config: &Config, args: &TimelineArgs) -> Result<()> {
    let (sunrise, sunset) = super::resolve_sun_hours(config, &args.sun)?;
    Log::log_debug(&format!(
        "Timeline for sunrise {} / sunset {}, every {} min",
        format_hour(sunrise),
        format_hour(sunset),
        args.step
    ));

    for row in timeline_rows(sunrise, sunset, args.step, &config.palette()) {
        println!(
            "{}  {}  {}  {}",
            format_hour(row.hour),
            super::swatch(row.color, 6),
            row.color.to_hex(),
            super::color::describe_state(row.state)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DAY_COLOR, NIGHT_COLOR};
    use crate::time_state::TimeState;

    #[test]
    fn test_row_count_follows_step() {
        let palette = Palette::default();
        assert_eq!(timeline_rows(7.0, 18.5, 30, &palette).len(), 48);
        assert_eq!(timeline_rows(7.0, 18.5, 60, &palette).len(), 24);
        assert_eq!(timeline_rows(7.0, 18.5, 45, &palette).len(), 32);
    }

    #[test]
    fn test_rows_cross_both_transitions() {
        let rows = timeline_rows(7.0, 18.5, 30, &Palette::default());
        assert_eq!(rows[0].color, NIGHT_COLOR);
        assert_eq!(rows[24].color, DAY_COLOR);
        // 07:00 is the sunrise midpoint
        assert!(matches!(
            rows[14].state,
            TransitionState::Transitioning { from: TimeState::Night, progress, .. } if progress == 0.5
        ));
        // 18:30 is the sunset midpoint
        assert!(matches!(
            rows[37].state,
            TransitionState::Transitioning { from: TimeState::Day, progress, .. } if progress == 0.5
        ));
    }
}
