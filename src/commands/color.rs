//! Implementation of `daydial color`: the dial color for one time of day.

use anyhow::Result;

use crate::args::ColorArgs;
use crate::color::Palette;
use crate::config::Config;
use crate::constants::PROGRESS_BAR_WIDTH;
use crate::logger::Log;
use crate::time_state::{
    TimeState, TransitionState, color_for_time_with, current_hour, get_transition_state,
    is_daytime, normalize_hour,
};
use crate::utils::{format_hour, progress_bar};

/// Human readable transition state, e.g. `sunrise 50%` or `day`.
pub fn describe_state(state: TransitionState) -> String {
    match state {
        TransitionState::Stable(TimeState::Day) => "day".to_string(),
        TransitionState::Stable(TimeState::Night) => "night".to_string(),
        TransitionState::Transitioning { from, progress, .. } => {
            let event = match from {
                TimeState::Night => "sunrise",
                TimeState::Day => "sunset",
            };
            if progress.is_nan() {
                format!("{} (unknown progress)", event)
            } else {
                format!("{} {:.0}%", event, progress * 100.0)
            }
        }
    }
}

/// The report printed for one time of day.
pub fn color_report(t: f64, sunrise: f64, sunset: f64, palette: &Palette) -> Vec<String> {
    let color = color_for_time_with(t, sunrise, sunset, palette);
    let state = get_transition_state(t, sunrise, sunset);

    let mut lines = vec![
        format!("Time:      {}", format_hour(t)),
        format!("Sunrise:   {}", format_hour(sunrise)),
        format!("Sunset:    {}", format_hour(sunset)),
        format!("State:     {}", describe_state(state)),
    ];
    if let TransitionState::Transitioning { progress, .. } = state {
        lines.push(format!(
            "Progress:  {}",
            progress_bar(progress, PROGRESS_BAR_WIDTH)
        ));
    }
    lines.push(format!("Color:     {} {}", color.to_hex(), color));
    lines.push(format!(
        "Daytime:   {}",
        if is_daytime(t, sunrise, sunset) { "yes" } else { "no" }
    ));
    lines
}

pub fn handle_color_command(config: &Config, args: &ColorArgs) -> Result<()> {
    let (sunrise, sunset) = super::resolve_sun_hours(config, &args.sun)?;
    let t = args.time.unwrap_or_else(current_hour);
    Log::log_debug(&format!(
        "Color for {:.4}h (normalized {:.4}h)",
        t,
        normalize_hour(t)
    ));

    let palette = config.palette();
    let color = color_for_time_with(t, sunrise, sunset, &palette);
    println!("{}", super::swatch(color, 12));
    for line in color_report(t, sunrise, sunset, &palette) {
        println!("{}", line);
    }
    Ok(())
}
