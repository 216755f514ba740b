//! Calendar-ring clock: five concentric rings for month, day, hour, minute and
//! second, each with a dot that travels clockwise from 12 o'clock.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::color::Rgb;
use crate::constants::*;
use crate::draw::{DrawCommands, TextAlign};
use crate::sketches::{Frame, Sketch};

const CENTER_DISC_SIZE: f32 = 100.0;
const CENTER_IMAGE_SIZE: f32 = 90.0;
const DOT_SIZE: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub radius: f32,
    pub value: u32,
    pub max: u32,
}

impl Ring {
    /// Dot angle in radians, `-π/2` at zero.
    pub fn angle(&self) -> f32 {
        -FRAC_PI_2 + TAU * self.value as f32 / self.max as f32
    }

    pub fn dot_position(&self, cx: f32, cy: f32) -> (f32, f32) {
        let a = self.angle();
        (cx + a.cos() * self.radius, cy + a.sin() * self.radius)
    }
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = match date.month() {
        12 => (date.year() + 1, 1),
        m => (date.year(), m + 1),
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Month, day, hour, minute and second rings, outermost first.
pub fn rings_for(now: NaiveDateTime) -> [Ring; 5] {
    [
        Ring { radius: RING_MONTH_RADIUS, value: now.month0(), max: 12 },
        Ring { radius: RING_DAY_RADIUS, value: now.day0(), max: days_in_month(now.date()) },
        Ring { radius: RING_HOUR_RADIUS, value: now.hour(), max: 24 },
        Ring { radius: RING_MINUTE_RADIUS, value: now.minute(), max: 60 },
        Ring { radius: RING_SECOND_RADIUS, value: now.second(), max: 60 },
    ]
}

#[derive(Debug, Default)]
pub struct CalendarRings {
    center_image: Option<String>,
}

impl CalendarRings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_center_image(mut self, path: impl Into<String>) -> Self {
        self.center_image = Some(path.into());
        self
    }

    fn draw_center(&self, d: &mut DrawCommands, cx: f32, cy: f32) {
        d.no_stroke().fill(Rgb::gray(255.0));
        d.circle(cx, cy, CENTER_DISC_SIZE);

        if let Some(path) = &self.center_image {
            let half = CENTER_IMAGE_SIZE / 2.0;
            d.image(path.clone(), cx - half, cy - half, CENTER_IMAGE_SIZE, CENTER_IMAGE_SIZE);
        }

        d.no_fill().stroke(Rgb::gray(200.0)).stroke_weight(1.0);
        d.circle(cx, cy, CENTER_DISC_SIZE);
    }
}

impl Sketch for CalendarRings {
    fn name(&self) -> &str {
        "calendar-rings"
    }

    fn canvas_size(&self) -> (f32, f32) {
        (700.0, 700.0)
    }

    fn render(&mut self, frame: &Frame) -> DrawCommands {
        let mut d = DrawCommands::new();
        d.background(Rgb::gray(245.0));

        let cx = frame.width / 2.0;
        let cy = frame.height / 2.0 - 40.0;

        for ring in rings_for(frame.now) {
            d.no_fill().stroke(Rgb::gray(180.0)).stroke_weight(2.0);
            d.circle(cx, cy, ring.radius * 2.0);

            let (x, y) = ring.dot_position(cx, cy);
            d.no_stroke().fill(Rgb::gray(30.0));
            d.circle(x, y, DOT_SIZE);
        }

        self.draw_center(&mut d, cx, cy);

        d.no_stroke()
            .fill(Rgb::gray(50.0))
            .text_size(16.0)
            .text_align(TextAlign::Center);
        d.text(
            frame.now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
            cx,
            cy + 260.0,
        );

        d
    }
}
