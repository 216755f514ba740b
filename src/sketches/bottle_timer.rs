//! Stopwatch drawn as water bottles: one bottle per started hour, each filling
//! over the course of its hour.

use crate::color::Rgb;
use crate::constants::*;
use crate::draw::{DrawCommands, TextAlign};
use crate::sketches::{Frame, Sketch};
use crate::stopwatch::Stopwatch;
use crate::utils::format_clock;

/// The sketch's three buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerButton {
    Start,
    Stop,
    Reset,
}

#[derive(Debug, Default)]
pub struct BottleTimer {
    stopwatch: Stopwatch,
}

impl BottleTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: TimerButton, now_ms: u64) {
        match button {
            TimerButton::Start => self.stopwatch.start(now_ms),
            TimerButton::Stop => self.stopwatch.stop(now_ms),
            TimerButton::Reset => self.stopwatch.reset(),
        }
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    /// Fill level of each bottle in [0, 1]. There is always at least one,
    /// and at most `MAXIMUM_BOTTLES` covering the latest hours.
    pub fn bottle_fills(&self, now_ms: u64) -> Vec<f32> {
        let hours = self.stopwatch.elapsed_hours(now_ms);
        let count = (hours.floor() as usize).saturating_add(1);
        let first = count.saturating_sub(MAXIMUM_BOTTLES);
        (first..count)
            .map(|i| (hours - i as f64).clamp(0.0, 1.0) as f32)
            .collect()
    }
}

fn draw_bottle(d: &mut DrawCommands, x: f32, y: f32, fill_amount: f32) {
    d.no_fill().stroke(Rgb::gray(80.0)).stroke_weight(2.0);
    d.rounded_rect(x, y, BOTTLE_WIDTH, BOTTLE_HEIGHT, 10.0);
    // neck
    d.rounded_rect(x + 20.0, y - 20.0, BOTTLE_WIDTH - 40.0, 20.0, 5.0);

    let fill_height = BOTTLE_HEIGHT * fill_amount;
    d.no_stroke().fill(Rgb::new(80.0, 120.0, 200.0));
    d.corner_rect(
        x,
        y + BOTTLE_HEIGHT - fill_height,
        BOTTLE_WIDTH,
        fill_height,
        [0.0, 0.0, 10.0, 10.0],
    );
}

impl Sketch for BottleTimer {
    fn name(&self) -> &str {
        "bottle-timer"
    }

    fn canvas_size(&self) -> (f32, f32) {
        (DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }

    fn start(&mut self, now_ms: u64) {
        self.press(TimerButton::Start, now_ms);
    }

    fn render(&mut self, frame: &Frame) -> DrawCommands {
        let mut d = DrawCommands::new();
        d.background(Rgb::gray(245.0));

        for (i, fill) in self.bottle_fills(frame.millis).into_iter().enumerate() {
            let x = BOTTLE_LEFT_X + i as f32 * (BOTTLE_WIDTH + BOTTLE_GAP);
            draw_bottle(&mut d, x, BOTTLE_TOP_Y, fill);
        }

        d.no_stroke()
            .fill(Rgb::gray(30.0))
            .text_size(18.0)
            .text_align(TextAlign::Left);
        d.text(
            format!(
                "Elapsed time: {}",
                format_clock(self.stopwatch.elapsed_ms(frame.millis))
            ),
            BOTTLE_LEFT_X,
            BOTTLE_TOP_Y + BOTTLE_HEIGHT + 40.0,
        );

        d
    }
}
