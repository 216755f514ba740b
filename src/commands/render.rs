//! Implementation of `daydial render`: one frame of a sketch as SVG.
//!
//! Timer sketches are started at millisecond 0 and rendered at `--millis`, so
//! `--millis 5400000` shows a timer that has been running for 90 minutes.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use std::fs;

use crate::args::RenderArgs;
use crate::config::Config;
use crate::logger::Log;
use crate::sketches::{Frame, SketchRegistry};
use crate::time_state::time_from_hours;
use crate::utils::path_for_display;

/// Local date-time for the frame: today at `time` hours, or now.
fn frame_time(time: Option<f64>) -> Result<NaiveDateTime> {
    let now = Local::now().naive_local();
    match time {
        Some(hours) => {
            let clock = time_from_hours(hours)
                .with_context(|| format!("Invalid time of day: {}", hours))?;
            Ok(now.date().and_time(clock))
        }
        None => Ok(now),
    }
}

/// Render `args.sketch` from `registry` and return the SVG document.
pub fn render_svg(registry: &mut SketchRegistry, args: &RenderArgs) -> Result<String> {
    let sketch = registry.get_mut(&args.sketch)?;
    let (width, height) = sketch.canvas_size();

    let mut frame = Frame::new(frame_time(args.time)?, width, height).with_millis(args.millis);
    if let Some((x, y)) = args.mouse {
        frame = frame.with_mouse(x, y);
    }

    sketch.start(0);
    let commands = sketch.render(&frame);
    Log::log_debug(&format!(
        "Rendered '{}' at {} with {} draw commands",
        args.sketch,
        frame.now.format("%H:%M:%S"),
        commands.len()
    ));
    Ok(commands.to_svg(width, height))
}

pub fn handle_render_command(config: &Config, args: &RenderArgs) -> Result<()> {
    let mut registry = SketchRegistry::with_defaults(config)?;
    let svg = render_svg(&mut registry, args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, svg)
                .with_context(|| format!("Failed to write SVG to {}", path.display()))?;
            Log::log_decorated(&format!("Wrote {}", path_for_display(path)));
        }
        None => print!("{}", svg),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(sketch: &str) -> RenderArgs {
        RenderArgs {
            sketch: sketch.to_string(),
            time: Some(12.0),
            millis: 0,
            mouse: None,
            output: None,
        }
    }

    #[test]
    fn test_render_day_dial_svg() {
        let mut registry = SketchRegistry::with_defaults(&Config::default()).unwrap();
        let svg = render_svg(&mut registry, &args("day-dial")).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("width=\"760\""));
        assert!(svg.contains("Display: PM dial"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_render_timer_uses_millis() {
        let mut registry = SketchRegistry::with_defaults(&Config::default()).unwrap();
        let svg = render_svg(
            &mut registry,
            &RenderArgs {
                millis: 5_400_000,
                ..args("bottle-timer")
            },
        )
        .unwrap();
        assert!(svg.contains("Elapsed time: 01:30:00"));
    }

    #[test]
    fn test_render_timers_at_longest_millis_stay_small() {
        let mut registry = SketchRegistry::with_defaults(&Config::default()).unwrap();
        for name in ["hike-timer", "bottle-timer"] {
            let svg = render_svg(
                &mut registry,
                &RenderArgs {
                    millis: crate::constants::MAXIMUM_RENDER_MILLIS,
                    ..args(name)
                },
            )
            .unwrap();
            assert!(svg.len() < 200_000, "{} svg is {} bytes", name, svg.len());
        }
    }

    #[test]
    fn test_render_unknown_sketch() {
        let mut registry = SketchRegistry::with_defaults(&Config::default()).unwrap();
        let err = render_svg(&mut registry, &args("nope")).unwrap_err();
        assert!(err.to_string().contains("Unknown sketch 'nope'"));
    }

    #[test]
    fn test_frame_time_uses_given_hours() {
        let t = frame_time(Some(6.5)).unwrap();
        assert_eq!(t.format("%H:%M:%S").to_string(), "06:30:00");
        assert!(frame_time(Some(f64::NAN)).is_err());
    }
}
