//! Command-line command handlers for daydial.
//!
//! Each subcommand lives in its own submodule. Results go to stdout, progress
//! and diagnostics go through [`crate::logger::Log`] on stderr.

pub mod color;
pub mod list;
pub mod render;
pub mod timeline;

use anyhow::Result;
use crossterm::style::{Color, Stylize};

use crate::args::SunArgs;
use crate::color::Rgb;
use crate::config::Config;

/// Sunrise and sunset hours: command-line overrides first, then the config.
pub fn resolve_sun_hours(config: &Config, overrides: &SunArgs) -> Result<(f64, f64)> {
    let (sunrise, sunset) = match (overrides.sunrise, overrides.sunset) {
        (Some(sunrise), Some(sunset)) => (sunrise, sunset),
        (sunrise, sunset) => {
            let (cfg_sunrise, cfg_sunset) = config.resolve_sun_hours()?;
            (sunrise.unwrap_or(cfg_sunrise), sunset.unwrap_or(cfg_sunset))
        }
    };
    Ok((sunrise, sunset))
}

/// A block of terminal cells painted with `color`. Invalid colors print blank.
pub fn swatch(color: Rgb, width: usize) -> String {
    let cells = " ".repeat(width);
    match color.to_rgb8() {
        Some((r, g, b)) => cells.on(Color::Rgb { r, g, b }).to_string(),
        None => cells,
    }
}
