//! Sun/moon day-night dial.
//!
//! A 12-hour ring for the current half of the day, colored segment by segment
//! with the day/night color model, with a sun or moon marker at the current
//! time.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::color::{Palette, Rgb};
use crate::constants::*;
use crate::draw::{DrawCommands, TextAlign};
use crate::sketches::{Frame, Sketch};
use crate::time_state::{color_for_time_with, is_daytime, normalize_hour};
use crate::utils::{format_hour, hour_label};

/// Dial inputs that used to be sliders and a checkbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialSettings {
    pub sunrise: f64,
    pub sunset: f64,
    /// When false, `demo_time` is shown instead of the frame's clock.
    pub use_system_time: bool,
    pub demo_time: f64,
    pub palette: Palette,
}

impl Default for DialSettings {
    fn default() -> Self {
        Self {
            sunrise: 7.0,
            sunset: 18.5,
            use_system_time: DEFAULT_USE_SYSTEM_TIME,
            demo_time: DEFAULT_DEMO_TIME,
            palette: Palette::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Sun,
    Moon,
}

pub struct DayDial {
    pub settings: DialSettings,
    canvas: (f32, f32),
}

impl DayDial {
    pub fn new(settings: DialSettings, canvas: (f32, f32)) -> Self {
        Self { settings, canvas }
    }

    /// The time of day the dial shows for this frame.
    pub fn dial_time(&self, frame: &Frame) -> f64 {
        if self.settings.use_system_time {
            frame.hour_of_day()
        } else {
            normalize_hour(self.settings.demo_time)
        }
    }

    pub fn marker_for(&self, now: f64) -> Marker {
        if is_daytime(now, self.settings.sunrise, self.settings.sunset) {
            Marker::Sun
        } else {
            Marker::Moon
        }
    }

    fn draw_dial(&self, d: &mut DrawCommands, base_hour: f64, now: f64) {
        let DialSettings {
            sunrise,
            sunset,
            palette,
            ..
        } = self.settings;
        let r = DIAL_RADIUS;
        let inner_r = r - DIAL_THICKNESS / 2.0;
        let start_angle = -FRAC_PI_2;
        let angle_at = |fraction: f32| start_angle + TAU * fraction;

        d.no_fill()
            .stroke(Rgb::gray(220.0))
            .stroke_weight(DIAL_THICKNESS)
            .round_cap(false);
        d.arc(0.0, 0.0, r, start_angle, start_angle + TAU);

        d.round_cap(true);
        for i in 0..=DIAL_SEGMENTS {
            let t = i as f32 / DIAL_SEGMENTS as f32;
            let ang0 = angle_at(t);
            let ang1 = angle_at((i + 1) as f32 / DIAL_SEGMENTS as f32);

            let abs_time = normalize_hour(base_hour + t as f64 * DIAL_HOURS);
            let c = color_for_time_with(abs_time, sunrise, sunset, &palette);

            d.stroke(c).stroke_weight(DIAL_THICKNESS);
            d.line(
                ang0.cos() * inner_r,
                ang0.sin() * inner_r,
                ang1.cos() * inner_r,
                ang1.sin() * inner_r,
            );
        }

        // ticks & labels
        for k in (0..DIAL_HOURS as usize).step_by(DIAL_LABEL_STEP) {
            let ang = angle_at(k as f32 / DIAL_HOURS as f32);
            d.stroke(Rgb::gray(40.0)).stroke_weight(2.0);
            d.line(
                ang.cos() * (r - 18.0),
                ang.sin() * (r - 18.0),
                ang.cos() * (r + 10.0),
                ang.sin() * (r + 10.0),
            );

            d.no_stroke()
                .fill(Rgb::gray(30.0))
                .text_size(14.0)
                .text_align(TextAlign::Center);
            d.text(
                hour_label(base_hour + k as f64),
                ang.cos() * (r + 28.0),
                ang.sin() * (r + 28.0),
            );
        }

        d.fill(Rgb::gray(250.0)).stroke(Rgb::gray(200.0)).stroke_weight(1.0);
        d.circle(0.0, 0.0, DIAL_CENTER_SIZE);

        // current time marker
        let local_hour = (now - base_hour + 24.0) % DIAL_HOURS;
        let ang = angle_at((local_hour / DIAL_HOURS) as f32);
        let (px, py) = (ang.cos() * inner_r, ang.sin() * inner_r);

        match self.marker_for(now) {
            Marker::Sun => draw_sun(d, px, py, DIAL_MARKER_SIZE, palette.day),
            Marker::Moon => draw_moon(d, px, py, DIAL_MARKER_SIZE, palette.night),
        }
    }
}

fn draw_sun(d: &mut DrawCommands, x: f32, y: f32, r: f32, color: Rgb) {
    d.push();
    d.translate(x, y);
    d.no_stroke().fill(color);
    d.circle(0.0, 0.0, r);
    d.stroke(color);
    for ray in 0..12 {
        let a = ray as f32 * PI / 6.0;
        d.line(a.cos() * r * 0.7, a.sin() * r * 0.7, a.cos() * r * 1.2, a.sin() * r * 1.2);
    }
    d.pop();
}

fn draw_moon(d: &mut DrawCommands, x: f32, y: f32, r: f32, shadow: Rgb) {
    d.push();
    d.translate(x, y);
    d.no_stroke().fill(Rgb::gray(240.0));
    d.circle(0.0, 0.0, r);
    d.fill(shadow);
    d.circle(r * 0.2, -r * 0.05, r);
    d.pop();
}

impl Sketch for DayDial {
    fn name(&self) -> &str {
        "day-dial"
    }

    fn canvas_size(&self) -> (f32, f32) {
        self.canvas
    }

    fn render(&mut self, frame: &Frame) -> DrawCommands {
        let mut d = DrawCommands::new();
        d.background(Rgb::gray(245.0));

        let now = self.dial_time(frame);
        let is_pm = now >= 12.0;
        let base = if is_pm { 12.0 } else { 0.0 };
        let dial_label = if is_pm { "PM dial" } else { "AM dial" };

        d.fill(Rgb::gray(30.0))
            .no_stroke()
            .text_size(16.0)
            .text_align(TextAlign::Left);
        d.text(
            format!(
                "Current time (hours, decimal): {:06.3}   Sunrise: {}   Sunset: {}   Display: {}",
                now,
                format_hour(self.settings.sunrise),
                format_hour(self.settings.sunset),
                dial_label
            ),
            18.0,
            18.0,
        );

        let (w, h) = self.canvas;
        d.push();
        d.translate(w / 2.0, h / 2.0 + 10.0);
        self.draw_dial(&mut d, base, now);
        d.pop();

        d
    }
}
