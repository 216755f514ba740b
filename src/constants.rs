//! Application constants and default values for daydial.
//!
//! This module contains the color model defaults, configuration limits and the
//! layout constants shared by the sketches.

use crate::color::Rgb;

// ═══ Day/Night Color Model ═══
// The transition window is centered on sunrise/sunset and extends this many
// hours to either side.

pub const TRANSITION_HALF_WIDTH: f64 = 0.5; // hours (30 minutes)
pub const HOURS_PER_DAY: f64 = 24.0;

pub const DAY_COLOR: Rgb = Rgb::new(255.0, 185.0, 60.0); // warm yellow/orange
pub const NIGHT_COLOR: Rgb = Rgb::new(20.0, 35.0, 90.0); // deep blue

// ═══ Application Configuration Defaults ═══
// These values are used when config options are not specified by the user

pub const DEFAULT_SUNRISE: &str = "07:00:00";
pub const DEFAULT_SUNSET: &str = "18:30:00";
pub const DEFAULT_USE_SYSTEM_TIME: bool = true;
pub const DEFAULT_DEMO_TIME: f64 = 12.0; // hours
pub const DEFAULT_TIME_MODE: &str = "manual";
pub const DEFAULT_CANVAS_WIDTH: f32 = 760.0;
pub const DEFAULT_CANVAS_HEIGHT: f32 = 520.0;
pub const DEFAULT_PLANNED_HOURS: f64 = 1.0;
pub const DEFAULT_ELEVATION: f64 = 0.0; // meters

// ═══ Validation Limits ═══

// Slider ranges from the dial controls
pub const MINIMUM_HOUR: f64 = 0.0;
pub const MAXIMUM_DEMO_HOUR: f64 = 24.0;

pub const MINIMUM_CANVAS_SIZE: f32 = 100.0;
pub const MAXIMUM_CANVAS_SIZE: f32 = 4000.0;

pub const MAXIMUM_PLANNED_HOURS: f64 = 48.0;

// ═══ Day Dial Layout ═══

pub const DIAL_RADIUS: f32 = 160.0;
pub const DIAL_THICKNESS: f32 = 28.0;
pub const DIAL_SEGMENTS: usize = 360;
pub const DIAL_HOURS: f64 = 12.0;
pub const DIAL_LABEL_STEP: usize = 3; // hours between ticks
pub const DIAL_MARKER_SIZE: f32 = 18.0;
pub const DIAL_CENTER_SIZE: f32 = 40.0;

// ═══ Timer Sketches ═══

pub const BOTTLE_WIDTH: f32 = 80.0;
pub const BOTTLE_HEIGHT: f32 = 180.0;
pub const BOTTLE_GAP: f32 = 30.0;
pub const BOTTLE_TOP_Y: f32 = 120.0;
pub const BOTTLE_LEFT_X: f32 = 160.0;
pub const MAXIMUM_BOTTLES: usize = 24; // most recent hours drawn

pub const SAMPLE_INTERVAL_MS: u64 = 1000;
pub const ELEVATION_MIN: f64 = -30.0; // meters
pub const ELEVATION_MAX: f64 = 30.0; // meters
pub const MINIMUM_VISIBLE_SECS: f64 = 5.0;
pub const HIKE_MARGIN: f32 = 40.0;
pub const MAXIMUM_HIKE_SAMPLES: usize = 3600; // one hour at the sampling rate

/// Latest frame time `render --millis` accepts (one week).
pub const MAXIMUM_RENDER_MILLIS: u64 = 7 * 24 * 3_600_000;

// ═══ Calendar Rings ═══

pub const RING_MONTH_RADIUS: f32 = 220.0;
pub const RING_DAY_RADIUS: f32 = 185.0;
pub const RING_HOUR_RADIUS: f32 = 150.0;
pub const RING_MINUTE_RADIUS: f32 = 115.0;
pub const RING_SECOND_RADIUS: f32 = 80.0;

// ═══ Quake Map ═══

pub const QUAKE_CANVAS_WIDTH: f32 = 900.0;
pub const QUAKE_CANVAS_HEIGHT: f32 = 1200.0;
pub const MAP_TOP: f32 = 180.0;
pub const MAP_HEIGHT: f32 = 450.0;
pub const MAP_IMAGE: &str = "images/world_map.png";

pub const MAG_COLOR_LOW: Rgb = Rgb::new(255.0, 230.0, 109.0); // #ffe66d
pub const MAG_COLOR_HIGH: Rgb = Rgb::new(177.0, 0.0, 0.0); // #b10000
pub const MAG_RANGE: (f64, f64) = (6.0, 9.5);
pub const DEATHS_RANGE: (f64, f64) = (1000.0, 250000.0);
pub const POINT_SIZE_RANGE: (f32, f32) = (8.0, 45.0);

pub const TOOLTIP_WIDTH: f32 = 220.0;
pub const TOOLTIP_HEIGHT: f32 = 90.0;
pub const TOOLTIP_OFFSET: f32 = 12.0;

// ═══ User Interface Constants ═══

pub const PROGRESS_BAR_WIDTH: usize = 30; // Characters width for progress bar display
pub const TIMELINE_STEP_MINUTES: u32 = 30;

// ═══ Exit Codes ═══

pub const EXIT_FAILURE: i32 = 1; // General failure
