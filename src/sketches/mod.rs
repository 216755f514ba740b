//! Sketch trait and the name-keyed registry.
//!
//! A sketch is a drawing routine that turns one [`Frame`] of input into a
//! [`DrawCommands`] list. Sketches that keep state between frames (the timers)
//! take `&mut self` and are driven by the frame's millisecond clock.

use anyhow::Result;
use chrono::NaiveDateTime;

use crate::config::Config;
use crate::draw::DrawCommands;
use crate::time_state::hours_from_time;

pub mod bottle_timer;
pub mod calendar_rings;
pub mod day_dial;
pub mod hike_timer;
pub mod quake_map;

/// Per-frame inputs supplied by whatever drives the redraw loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Local wall-clock date and time.
    pub now: NaiveDateTime,
    /// Milliseconds since the sketch started running.
    pub millis: u64,
    /// Mouse position in canvas coordinates, if the pointer is over the canvas.
    pub mouse: Option<(f32, f32)>,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn new(now: NaiveDateTime, width: f32, height: f32) -> Self {
        Self {
            now,
            millis: 0,
            mouse: None,
            width,
            height,
        }
    }

    pub fn with_millis(mut self, millis: u64) -> Self {
        self.millis = millis;
        self
    }

    pub fn with_mouse(mut self, x: f32, y: f32) -> Self {
        self.mouse = Some((x, y));
        self
    }

    /// Time of day as decimal hours.
    pub fn hour_of_day(&self) -> f64 {
        hours_from_time(self.now.time())
    }
}

pub trait Sketch {
    /// Registry name.
    fn name(&self) -> &str;

    /// Canvas size this sketch was laid out for.
    fn canvas_size(&self) -> (f32, f32);

    /// Begin a timed session at `now_ms`. Sketches without a clock ignore it.
    fn start(&mut self, _now_ms: u64) {}

    fn render(&mut self, frame: &Frame) -> DrawCommands;
}

/// Sketches registered by name, in registration order.
#[derive(Default)]
pub struct SketchRegistry {
    sketches: Vec<Box<dyn Sketch>>,
}

impl SketchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in sketch configured from `config`.
    pub fn with_defaults(config: &Config) -> Result<Self> {
        let mut registry = Self::new();
        registry.register(Box::new(day_dial::DayDial::new(
            config.dial_settings()?,
            config.canvas_size(),
        )));
        registry.register(Box::new(bottle_timer::BottleTimer::new()));
        registry.register(Box::new(hike_timer::HikeTimer::new(
            config.planned_hours,
            config.elevation.unwrap_or(crate::constants::DEFAULT_ELEVATION),
        )));
        let mut rings = calendar_rings::CalendarRings::new();
        if let Some(path) = &config.center_image {
            rings = rings.with_center_image(path.clone());
        }
        registry.register(Box::new(rings));
        registry.register(Box::new(quake_map::QuakeMap::new(config.quakes.clone())));
        Ok(registry)
    }

    /// Add a sketch, replacing any existing sketch with the same name.
    pub fn register(&mut self, sketch: Box<dyn Sketch>) {
        if let Some(slot) = self.sketches.iter_mut().find(|s| s.name() == sketch.name()) {
            *slot = sketch;
        } else {
            self.sketches.push(sketch);
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.sketches.iter().map(|s| s.name()).collect()
    }

    /// Registered sketches with their canvas sizes.
    pub fn iter(&self) -> impl Iterator<Item = (&str, (f32, f32))> {
        self.sketches.iter().map(|s| (s.name(), s.canvas_size()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut (dyn Sketch + 'static)> {
        let known = self.names().join(", ");
        match self.sketches.iter_mut().find(|s| s.name() == name) {
            Some(sketch) => Ok(sketch.as_mut()),
            None => anyhow::bail!("Unknown sketch '{}'. Available: {}", name, known),
        }
    }
}
