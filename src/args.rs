//! Command-line argument parsing.
//!
//! Hour arguments accept decimal hours (`13.5`) or clock times (`13:30`,
//! `13:30:00`).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::parse_hours;

/// Day/night clock dials, timers and a quake map rendered as draw commands.
#[derive(Debug, Parser)]
#[command(name = "daydial", version, about)]
pub struct Cli {
    /// Read configuration from this file instead of the default location.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print configuration and per-step details to stderr.
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all log output.
    #[arg(short, long, global = true, conflicts_with = "debug")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the registered sketches.
    List,
    /// Show the day/night color for a time of day.
    Color(ColorArgs),
    /// Print a 24-hour strip of colors.
    Timeline(TimelineArgs),
    /// Render one frame of a sketch as SVG.
    Render(RenderArgs),
}

/// Sun time overrides shared by the color commands.
#[derive(Debug, Args, Default, Clone, Copy)]
pub struct SunArgs {
    /// Sunrise, overriding the configured value.
    #[arg(long, value_parser = parse_hour_arg)]
    pub sunrise: Option<f64>,

    /// Sunset, overriding the configured value.
    #[arg(long, value_parser = parse_hour_arg)]
    pub sunset: Option<f64>,
}

#[derive(Debug, Args)]
pub struct ColorArgs {
    /// Time of day; defaults to now.
    #[arg(short, long, value_parser = parse_hour_arg, allow_hyphen_values = true)]
    pub time: Option<f64>,

    #[command(flatten)]
    pub sun: SunArgs,
}

#[derive(Debug, Args)]
pub struct TimelineArgs {
    #[command(flatten)]
    pub sun: SunArgs,

    /// Minutes between rows.
    #[arg(long, default_value_t = crate::constants::TIMELINE_STEP_MINUTES,
          value_parser = clap::value_parser!(u32).range(1..=720))]
    pub step: u32,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Sketch name, see `daydial list`.
    pub sketch: String,

    /// Local time of day for the frame; defaults to now.
    #[arg(short, long, value_parser = parse_hour_arg, allow_hyphen_values = true)]
    pub time: Option<f64>,

    /// Milliseconds since the sketch started, up to one week. Timers are
    /// started at 0.
    #[arg(long, default_value_t = 0,
          value_parser = clap::value_parser!(u64).range(0..=crate::constants::MAXIMUM_RENDER_MILLIS))]
    pub millis: u64,

    /// Mouse position as `X,Y` canvas coordinates.
    #[arg(long, value_parser = parse_point)]
    pub mouse: Option<(f32, f32)>,

    /// Write the SVG here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Decimal hours or `HH:MM[:SS]`.
pub fn parse_hour_arg(value: &str) -> Result<f64, String> {
    if let Ok(hours) = value.parse::<f64>() {
        if hours.is_finite() {
            return Ok(hours);
        }
        return Err(format!("'{}' is not a finite number of hours", value));
    }
    let full = if value.matches(':').count() == 1 {
        format!("{}:00", value)
    } else {
        value.to_string()
    };
    parse_hours(&full).map_err(|e| e.to_string())
}

/// `X,Y` as a pair of floats.
pub fn parse_point(value: &str) -> Result<(f32, f32), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", value))?;
    let coord = |s: &str| {
        s.trim()
            .parse::<f32>()
            .map_err(|_| format!("'{}' is not a number", s.trim()))
    };
    Ok((coord(x)?, coord(y)?))
}
