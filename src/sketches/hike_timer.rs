//! Hiking timer: an elevation-over-time graph sampled once a second while the
//! session runs, and a loading bar filling towards the planned duration.

use crate::color::Rgb;
use crate::constants::*;
use crate::draw::{DrawCommands, TextAlign};
use crate::sketches::{Frame, Sketch};
use crate::stopwatch::Stopwatch;
use crate::utils::{format_elapsed, map_range};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t_sec: f64,
    pub elevation: f64,
}

#[derive(Debug)]
pub struct HikeTimer {
    stopwatch: Stopwatch,
    planned_hours: Option<f64>,
    elevation: f64,
    samples: Vec<Sample>,
    last_sample_at: u64,
}

impl HikeTimer {
    pub fn new(planned_hours: Option<f64>, elevation: f64) -> Self {
        Self {
            stopwatch: Stopwatch::new(),
            planned_hours,
            elevation: elevation.clamp(ELEVATION_MIN, ELEVATION_MAX),
            samples: Vec::new(),
            last_sample_at: 0,
        }
    }

    /// Planned duration; anything non-positive or NaN counts as one hour.
    pub fn planned_hours(&self) -> f64 {
        match self.planned_hours {
            Some(h) if h > 0.0 => h,
            _ => DEFAULT_PLANNED_HOURS,
        }
    }

    /// Move the simulated elevation input, clamped to its range.
    pub fn set_elevation(&mut self, meters: f64) {
        self.elevation = meters.clamp(ELEVATION_MIN, ELEVATION_MAX);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn start(&mut self, now_ms: u64) {
        if self.stopwatch.is_running() {
            return;
        }
        self.stopwatch.start(now_ms);
        self.last_sample_at = now_ms;
        if self.samples.is_empty() {
            self.samples.push(Sample {
                t_sec: 0.0,
                elevation: self.elevation,
            });
        }
    }

    pub fn stop(&mut self, now_ms: u64) {
        self.stopwatch.stop(now_ms);
    }

    /// Record one sample per full interval passed since the last one while
    /// the session runs. Frames that arrive late backfill the missed samples.
    ///
    /// Only the latest `MAXIMUM_HIKE_SAMPLES` are kept; a gap longer than
    /// that skips ahead instead of backfilling samples that would be dropped.
    pub fn update_sampling(&mut self, now_ms: u64) {
        if !self.stopwatch.is_running() {
            return;
        }
        let missed = now_ms.saturating_sub(self.last_sample_at) / SAMPLE_INTERVAL_MS;
        let limit = MAXIMUM_HIKE_SAMPLES as u64;
        if missed > limit {
            self.last_sample_at += (missed - limit) * SAMPLE_INTERVAL_MS;
        }
        while now_ms.saturating_sub(self.last_sample_at) >= SAMPLE_INTERVAL_MS {
            self.last_sample_at += SAMPLE_INTERVAL_MS;
            self.samples.push(Sample {
                t_sec: self.stopwatch.elapsed_ms(self.last_sample_at) as f64 / 1000.0,
                elevation: self.elevation,
            });
        }
        if self.samples.len() > MAXIMUM_HIKE_SAMPLES {
            let excess = self.samples.len() - MAXIMUM_HIKE_SAMPLES;
            self.samples.drain(..excess);
        }
    }

    /// Elapsed share of the planned duration in [0, 1].
    pub fn progress(&self, now_ms: u64) -> f32 {
        let planned_ms = self.planned_hours() * 3_600_000.0;
        (self.stopwatch.elapsed_ms(now_ms) as f64 / planned_ms).clamp(0.0, 1.0) as f32
    }

    fn draw_graph(&self, d: &mut DrawCommands, x: f32, y: f32, w: f32, h: f32) {
        d.no_fill().stroke(Rgb::gray(200.0)).stroke_weight(1.0);
        d.rect(x, y, w, h);

        let zero_y = y + h / 2.0;
        d.stroke(Rgb::gray(180.0));
        d.line(x, zero_y, x + w, zero_y);

        let Some(last) = self.samples.last() else {
            return;
        };
        if self.samples.len() < 2 {
            return;
        }

        let visible_sec = last.t_sec.max(MINIMUM_VISIBLE_SECS);
        let to_point = |s: &Sample| {
            (
                x + (s.t_sec / visible_sec) as f32 * w,
                map_range(
                    s.elevation,
                    ELEVATION_MIN,
                    ELEVATION_MAX,
                    (y + h) as f64,
                    y as f64,
                    false,
                ) as f32,
            )
        };

        let points: Vec<(f32, f32)> = self.samples.iter().map(to_point).collect();
        d.stroke(Rgb::new(40.0, 130.0, 220.0)).stroke_weight(2.0).no_fill();
        d.polyline(&points);

        let (lx, ly) = to_point(last);
        d.stroke(Rgb::gray(0.0)).fill(Rgb::new(255.0, 80.0, 80.0));
        d.circle(lx, ly, 14.0);
    }

    fn draw_loading_bar(&self, d: &mut DrawCommands, progress: f32, x: f32, y: f32, w: f32, h: f32) {
        d.no_stroke().fill(Rgb::gray(230.0));
        d.rounded_rect(x, y, w, h, 6.0);

        d.fill(Rgb::new(80.0, 140.0, 220.0));
        d.rounded_rect(x, y, w * progress, h, 6.0);

        d.no_fill().stroke(Rgb::gray(150.0)).stroke_weight(1.0);
        d.rounded_rect(x, y, w, h, 6.0);
    }
}

impl Sketch for HikeTimer {
    fn name(&self) -> &str {
        "hike-timer"
    }

    fn canvas_size(&self) -> (f32, f32) {
        (1000.0, 700.0)
    }

    fn start(&mut self, now_ms: u64) {
        HikeTimer::start(self, now_ms);
    }

    fn render(&mut self, frame: &Frame) -> DrawCommands {
        let mut d = DrawCommands::new();
        d.background(Rgb::gray(250.0));

        let graph_x = HIKE_MARGIN;
        let graph_y = HIKE_MARGIN;
        let graph_w = (frame.width * 0.6).max(400.0);
        let graph_h = frame.height * 0.5;

        let bar_x = graph_x;
        let bar_y = graph_y + graph_h + 40.0;
        let bar_w = graph_w;
        let bar_h = 26.0;

        self.update_sampling(frame.millis);
        self.draw_graph(&mut d, graph_x, graph_y, graph_w, graph_h);
        self.draw_loading_bar(&mut d, self.progress(frame.millis), bar_x, bar_y, bar_w, bar_h);

        d.no_stroke()
            .fill(Rgb::gray(80.0))
            .text_size(14.0)
            .text_align(TextAlign::Left);
        d.text("user exercising...", bar_x, bar_y + bar_h + 22.0);

        let panel_x = frame.width - 320.0;
        d.fill(Rgb::gray(30.0)).text_size(16.0);
        d.text("Hike Timer - Stage 1", panel_x, 56.0);
        d.text_size(14.0);
        d.text(
            format!("Planned time (hr): {}", self.planned_hours()),
            panel_x,
            92.0,
        );
        d.text(
            format!("Simulated elevation (m): {}", self.elevation),
            panel_x,
            128.0,
        );
        d.text(
            format!("Elapsed: {}", format_elapsed(self.stopwatch.elapsed_ms(frame.millis))),
            panel_x,
            214.0,
        );

        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Shape;
    use chrono::NaiveDate;

    fn frame(millis: u64) -> Frame {
        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Frame::new(now, 1000.0, 700.0).with_millis(millis)
    }

    #[test]
    fn test_planned_hours_fallback() {
        assert_eq!(HikeTimer::new(None, 0.0).planned_hours(), 1.0);
        assert_eq!(HikeTimer::new(Some(-2.0), 0.0).planned_hours(), 1.0);
        assert_eq!(HikeTimer::new(Some(f64::NAN), 0.0).planned_hours(), 1.0);
        assert_eq!(HikeTimer::new(Some(2.5), 0.0).planned_hours(), 2.5);
    }

    #[test]
    fn test_first_start_records_initial_sample() {
        let mut hike = HikeTimer::new(None, 12.0);
        hike.start(500);
        hike.start(900);
        assert_eq!(
            hike.samples(),
            &[Sample {
                t_sec: 0.0,
                elevation: 12.0
            }]
        );
    }

    #[test]
    fn test_sampling_interval() {
        let mut hike = HikeTimer::new(None, 0.0);
        hike.start(0);
        hike.update_sampling(999);
        assert_eq!(hike.samples().len(), 1);

        hike.set_elevation(5.0);
        hike.update_sampling(1000);
        assert_eq!(hike.samples().len(), 2);
        assert_eq!(hike.samples()[1], Sample { t_sec: 1.0, elevation: 5.0 });

        hike.update_sampling(1500);
        assert_eq!(hike.samples().len(), 2);
    }

    #[test]
    fn test_late_frame_backfills_samples() {
        let mut hike = HikeTimer::new(None, 3.0);
        hike.start(0);
        hike.update_sampling(3500);
        let times: Vec<f64> = hike.samples().iter().map(|s| s.t_sec).collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_no_sampling_while_stopped() {
        let mut hike = HikeTimer::new(None, 0.0);
        hike.start(0);
        hike.stop(2000);
        hike.update_sampling(10_000);
        assert_eq!(hike.samples().len(), 1);
    }

    #[test]
    fn test_elevation_is_clamped() {
        let mut hike = HikeTimer::new(None, 100.0);
        hike.start(0);
        assert_eq!(hike.samples()[0].elevation, ELEVATION_MAX);
        hike.set_elevation(-100.0);
        hike.update_sampling(1000);
        assert_eq!(hike.samples()[1].elevation, ELEVATION_MIN);
    }

    #[test]
    fn test_progress_clamps() {
        let mut hike = HikeTimer::new(Some(1.0), 0.0);
        assert_eq!(hike.progress(0), 0.0);
        hike.start(0);
        assert_eq!(hike.progress(1_800_000), 0.5);
        assert_eq!(hike.progress(10_000_000), 1.0);
    }

    #[test]
    fn test_render_draws_graph_after_two_samples() {
        let mut hike = HikeTimer::new(None, 0.0);
        let d = hike.render(&frame(0));
        assert!(!d.commands().iter().any(|c| matches!(c.shape, Shape::Polyline(_))));

        hike.start(0);
        let d = hike.render(&frame(1000));
        assert!(d.commands().iter().any(|c| matches!(c.shape, Shape::Polyline(_))));
        assert!(d.texts().contains(&"Elapsed: 0:00:01"));
    }

    #[test]
    fn test_graph_maps_zero_elevation_to_midline() {
        let mut hike = HikeTimer::new(None, 0.0);
        hike.start(0);
        let d = hike.render(&frame(1000));
        let points = d
            .commands()
            .iter()
            .find_map(|c| match &c.shape {
                Shape::Polyline(points) => Some(points.clone()),
                _ => None,
            })
            .unwrap();
        let mid = HIKE_MARGIN + 700.0 * 0.5 / 2.0;
        assert!(points.iter().all(|&(_, y)| (y - mid).abs() < 1e-3));
        // 1 second of a 5 second minimum window
        let graph_w = 1000.0 * 0.6;
        assert!((points[1].0 - (HIKE_MARGIN + graph_w / 5.0)).abs() < 1e-3);
    }

    #[test]
    fn test_long_gap_keeps_latest_samples_only() {
        let mut hike = HikeTimer::new(None, 0.0);
        hike.start(0);
        let week_ms = 7 * 24 * 3_600_000;
        hike.update_sampling(week_ms);

        let samples = hike.samples();
        assert_eq!(samples.len(), MAXIMUM_HIKE_SAMPLES);
        assert_eq!(samples.last().unwrap().t_sec, (week_ms / 1000) as f64);
        assert_eq!(
            samples[0].t_sec,
            (week_ms / 1000 - MAXIMUM_HIKE_SAMPLES as u64 + 1) as f64
        );

        // steady sampling afterwards stays at the cap
        hike.update_sampling(week_ms + 3000);
        assert_eq!(hike.samples().len(), MAXIMUM_HIKE_SAMPLES);
        assert_eq!(hike.samples().last().unwrap().t_sec, (week_ms / 1000 + 3) as f64);
    }

    #[test]
    fn test_render_size_is_bounded_for_long_sessions() {
        let mut hike = HikeTimer::new(None, 0.0);
        hike.start(0);
        let d = hike.render(&frame(u64::MAX));
        let points = d
            .commands()
            .iter()
            .find_map(|c| match &c.shape {
                Shape::Polyline(points) => Some(points.len()),
                _ => None,
            })
            .unwrap();
        assert_eq!(points, MAXIMUM_HIKE_SAMPLES);
    }
}
