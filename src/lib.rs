//! # Daydial
//!
//! Clock-face sketches built around a day/night color model.
//!
//! The core of the crate is a pure function from a time of day and the
//! sunrise/sunset hours to a color: deep blue at night, warm orange by day,
//! blended linearly across a one-hour window centered on sunrise and sunset.
//! Around it sit a handful of sketches (a sun/moon dial, two timers, a
//! calendar-ring clock and an earthquake map) that render into a retained
//! list of draw commands, and a small CLI that prints colors or writes a
//! frame as SVG.
//!
//! ## Architecture
//!
//! - **args**: Command-line argument definitions
//! - **color**: RGB values, hex parsing and the day/night palette
//! - **commands**: Handlers for the CLI subcommands
//! - **config**: Configuration loading, validation, and default generation
//! - **constants**: Application-wide constants and defaults
//! - **draw**: Retained drawing surface and SVG output
//! - **logger**: Structured logging with visual formatting
//! - **sketches**: The sketch trait, registry and built-in sketches
//! - **solar**: Sunrise/sunset hours from coordinates
//! - **stopwatch**: Start/stop/reset elapsed time for the timer sketches
//! - **time_state**: Time-based state calculations and transition logic
//! - **utils**: Interpolation, range mapping and text formatting

pub mod args;
pub mod color;
pub mod commands;
pub mod config;
pub mod constants;
pub mod draw;
pub mod logger;
pub mod sketches;
pub mod solar;
pub mod stopwatch;
pub mod time_state;
pub mod utils;

// Re-export important types for easier access
pub use color::{Palette, Rgb};
pub use config::Config;
pub use draw::{DrawCommand, DrawCommands, Shape};
pub use logger::{Log, LogLevel};
pub use sketches::{Frame, Sketch, SketchRegistry};
pub use time_state::{
    TimeState, TransitionState, color_for_time, get_transition_state, is_daytime, normalize_hour,
};
