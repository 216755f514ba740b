//! Earthquake map: historical quakes plotted on an equirectangular world map,
//! colored by magnitude and sized by death toll, with a hover tooltip, legends
//! and a ranked table.

use anyhow::{Result, bail};
use serde::Deserialize;

use crate::color::Rgb;
use crate::constants::*;
use crate::draw::{DrawCommands, TextAlign};
use crate::sketches::{Frame, Sketch};
use crate::utils::{format_thousands, map_range};

const TITLE: &str = "10 Deadliest Earthquakes in the 21st Century";
const SUBTITLE: &str = "The 10 deadliest earthquakes in the 21st century took a collective death toll of over 610,000 people.\nNine of these earthquakes took place in Asia.";
const SOURCE: &str = "Data Source: National Oceanic and Atmospheric Administration (NOAA)";

const LEGEND_TOP: f32 = 670.0;
const TABLE_TOP: f32 = 800.0;
const TABLE_ROW_HEIGHT: f32 = 30.0;
const TABLE_BAR_X: f32 = 480.0;
const TABLE_BAR_WIDTH: f32 = 330.0;

/// One row of the quake table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuakeRecord {
    pub location: String,
    /// Event date-time, displayed as written.
    pub time: String,
    pub latitude: f64,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Some source rows carry the longitude in this column instead.
    #[serde(default)]
    pub altitude: Option<f64>,
    pub magnitude: f64,
    pub deaths: f64,
}

impl QuakeRecord {
    pub fn new(
        location: &str,
        time: &str,
        latitude: f64,
        longitude: f64,
        magnitude: f64,
        deaths: f64,
    ) -> Self {
        Self {
            location: location.to_string(),
            time: time.to_string(),
            latitude,
            longitude: Some(longitude),
            altitude: None,
            magnitude,
            deaths,
        }
    }

    /// Longitude, falling back to the altitude column when it is missing.
    pub fn resolved_longitude(&self) -> Option<f64> {
        self.longitude.or(self.altitude)
    }

    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            bail!("Latitude {} must be between -90 and 90", self.latitude);
        }
        match self.resolved_longitude() {
            Some(lon) if (-180.0..=180.0).contains(&lon) => {}
            Some(lon) => bail!("Longitude {} must be between -180 and 180", lon),
            None => bail!("Missing longitude"),
        }
        if !self.magnitude.is_finite() {
            bail!("Magnitude must be a number");
        }
        if !self.deaths.is_finite() || self.deaths < 0.0 {
            bail!("Deaths must be a non-negative number, got {}", self.deaths);
        }
        Ok(())
    }

    pub fn tooltip_text(&self) -> String {
        format!(
            "{}\n{}\nMagnitude: {}\nDeaths: {}",
            self.location,
            self.time,
            self.magnitude,
            format_thousands(self.deaths)
        )
    }
}

/// The ten deadliest quakes since 2001, used when the config lists none.
pub fn builtin_quakes() -> Vec<QuakeRecord> {
    vec![
        QuakeRecord::new("Sumatra, Indonesia", "2004-12-26 00:58", 3.295, 95.982, 9.1, 227_898.0),
        QuakeRecord::new("Port-au-Prince, Haiti", "2010-01-12 21:53", 18.443, -72.571, 7.0, 160_000.0),
        QuakeRecord::new("Sichuan, China", "2008-05-12 06:28", 31.002, 103.322, 7.9, 87_587.0),
        QuakeRecord::new("Kashmir, Pakistan", "2005-10-08 03:50", 34.539, 73.588, 7.6, 86_000.0),
        QuakeRecord::new("Kahramanmaras, Turkey", "2023-02-06 01:17", 37.226, 37.014, 7.8, 59_259.0),
        QuakeRecord::new("Bam, Iran", "2003-12-26 01:56", 28.995, 58.311, 6.6, 31_000.0),
        QuakeRecord::new("Gujarat, India", "2001-01-26 03:16", 23.419, 70.232, 7.7, 20_085.0),
        QuakeRecord::new("Tohoku, Japan", "2011-03-11 05:46", 38.297, 142.373, 9.1, 18_428.0),
        QuakeRecord::new("Gorkha, Nepal", "2015-04-25 06:11", 28.231, 84.731, 7.8, 8_964.0),
        QuakeRecord::new("Java, Indonesia", "2006-05-26 22:53", -7.961, 110.446, 6.3, 5_749.0),
    ]
}

/// Equirectangular projection onto the map band of the canvas.
pub fn project(lat: f64, lon: f64) -> (f32, f32) {
    let x = map_range(lon, -180.0, 180.0, 0.0, QUAKE_CANVAS_WIDTH as f64, false);
    let y = map_range(
        lat,
        90.0,
        -90.0,
        MAP_TOP as f64,
        (MAP_TOP + MAP_HEIGHT) as f64,
        false,
    );
    (x as f32, y as f32)
}

pub fn mag_color(magnitude: f64) -> Rgb {
    let t = map_range(magnitude, MAG_RANGE.0, MAG_RANGE.1, 0.0, 1.0, true);
    MAG_COLOR_LOW.lerp(&MAG_COLOR_HIGH, t as f32)
}

/// Circle diameter for a death toll.
pub fn death_size(deaths: f64) -> f32 {
    map_range(
        deaths,
        DEATHS_RANGE.0,
        DEATHS_RANGE.1,
        POINT_SIZE_RANGE.0 as f64,
        POINT_SIZE_RANGE.1 as f64,
        true,
    ) as f32
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PlottedPoint {
    index: usize,
    x: f32,
    y: f32,
    size: f32,
}

pub struct QuakeMap {
    records: Vec<QuakeRecord>,
    points: Vec<PlottedPoint>,
}

impl QuakeMap {
    /// Records without a usable longitude are not plotted but still ranked.
    pub fn new(records: Vec<QuakeRecord>) -> Self {
        let records = if records.is_empty() {
            builtin_quakes()
        } else {
            records
        };
        let points = records
            .iter()
            .enumerate()
            .filter_map(|(index, r)| {
                let (x, y) = project(r.latitude, r.resolved_longitude()?);
                Some(PlottedPoint {
                    index,
                    x,
                    y,
                    size: death_size(r.deaths),
                })
            })
            .collect();
        Self { records, points }
    }

    pub fn records(&self) -> &[QuakeRecord] {
        &self.records
    }

    /// The record under the mouse. Later records are drawn on top, so the
    /// last hit wins.
    pub fn hovered(&self, mouse: Option<(f32, f32)>) -> Option<&QuakeRecord> {
        let (mx, my) = mouse?;
        self.points
            .iter()
            .rev()
            .find(|p| (mx - p.x).hypot(my - p.y) < p.size / 2.0)
            .map(|p| &self.records[p.index])
    }

    /// Record indices by death toll, largest first.
    pub fn ranking(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.records.len()).collect();
        order.sort_by(|&a, &b| self.records[b].deaths.total_cmp(&self.records[a].deaths));
        order
    }

    fn draw_title(&self, d: &mut DrawCommands) {
        let center = QUAKE_CANVAS_WIDTH / 2.0;
        d.no_stroke().text_align(TextAlign::Center);
        d.fill(Rgb::gray(30.0)).text_size(36.0);
        d.text(TITLE, center, 60.0);
        d.fill(Rgb::gray(80.0)).text_size(16.0);
        d.text(SUBTITLE, center, 95.0);
    }

    fn draw_points(&self, d: &mut DrawCommands) {
        d.no_stroke();
        for p in &self.points {
            d.fill(mag_color(self.records[p.index].magnitude));
            d.circle(p.x, p.y, p.size);
        }
    }

    fn draw_legends(&self, d: &mut DrawCommands) {
        let left = 60.0;
        d.no_stroke()
            .fill(Rgb::gray(30.0))
            .text_size(14.0)
            .text_align(TextAlign::Left);
        d.text("Magnitude", left, LEGEND_TOP);

        let steps = 8;
        let swatch = 24.0;
        for i in 0..steps {
            let m = MAG_RANGE.0 + (MAG_RANGE.1 - MAG_RANGE.0) * i as f64 / (steps - 1) as f64;
            d.fill(mag_color(m));
            d.rect(left + i as f32 * swatch, LEGEND_TOP + 12.0, swatch, 16.0);
        }
        d.fill(Rgb::gray(80.0)).text_size(12.0);
        d.text(format!("{:.1}", MAG_RANGE.0), left, LEGEND_TOP + 46.0);
        d.text_align(TextAlign::Right);
        d.text(
            format!("{:.1}", MAG_RANGE.1),
            left + steps as f32 * swatch,
            LEGEND_TOP + 46.0,
        );

        let size_left = 480.0;
        d.fill(Rgb::gray(30.0))
            .text_size(14.0)
            .text_align(TextAlign::Left);
        d.text("Deaths", size_left, LEGEND_TOP);

        let mut x = size_left + 10.0;
        for deaths in [10_000.0, 100_000.0, DEATHS_RANGE.1] {
            let size = death_size(deaths);
            let cy = LEGEND_TOP + 40.0;
            d.no_fill().stroke(Rgb::gray(120.0)).stroke_weight(1.0);
            d.circle(x + size / 2.0, cy, size);
            d.no_stroke()
                .fill(Rgb::gray(80.0))
                .text_size(12.0)
                .text_align(TextAlign::Center);
            d.text(format_thousands(deaths), x + size / 2.0, cy + POINT_SIZE_RANGE.1 / 2.0 + 16.0);
            x += size + 60.0;
        }
    }

    fn draw_table(&self, d: &mut DrawCommands) {
        let max_deaths = self
            .records
            .iter()
            .map(|r| r.deaths)
            .fold(0.0_f64, f64::max);

        d.no_stroke()
            .fill(Rgb::gray(30.0))
            .text_size(14.0)
            .text_align(TextAlign::Left);
        d.text("Rank", 60.0, TABLE_TOP);
        d.text("Location", 110.0, TABLE_TOP);
        d.text("Deaths", 360.0, TABLE_TOP);

        for (rank, &index) in self.ranking().iter().enumerate() {
            let record = &self.records[index];
            let y = TABLE_TOP + (rank + 1) as f32 * TABLE_ROW_HEIGHT;

            d.fill(Rgb::gray(50.0)).text_size(13.0);
            d.text(format!("{}", rank + 1), 60.0, y);
            d.text(record.location.clone(), 110.0, y);
            d.text(format_thousands(record.deaths), 360.0, y);

            let share = if max_deaths > 0.0 {
                (record.deaths / max_deaths) as f32
            } else {
                0.0
            };
            d.fill(mag_color(record.magnitude));
            d.rect(TABLE_BAR_X, y - 14.0, TABLE_BAR_WIDTH * share, 18.0);
        }
    }

    fn draw_tooltip(&self, d: &mut DrawCommands, mouse: Option<(f32, f32)>) {
        let (Some(record), Some((mx, my))) = (self.hovered(mouse), mouse) else {
            return;
        };
        let x = mx + TOOLTIP_OFFSET;
        let y = my + TOOLTIP_OFFSET;

        d.fill(Rgb::gray(255.0)).stroke(Rgb::gray(0.0)).stroke_weight(1.0);
        d.rounded_rect(x, y, TOOLTIP_WIDTH, TOOLTIP_HEIGHT, 6.0);

        d.no_stroke()
            .fill(Rgb::gray(0.0))
            .text_align(TextAlign::Left)
            .text_size(12.0);
        d.text(record.tooltip_text(), x + 8.0, y + 16.0);
    }
}

impl Sketch for QuakeMap {
    fn name(&self) -> &str {
        "quake-map"
    }

    fn canvas_size(&self) -> (f32, f32) {
        (QUAKE_CANVAS_WIDTH, QUAKE_CANVAS_HEIGHT)
    }

    fn render(&mut self, frame: &Frame) -> DrawCommands {
        let mut d = DrawCommands::new();
        d.background(Rgb::gray(255.0));

        self.draw_title(&mut d);
        d.image(MAP_IMAGE, 0.0, MAP_TOP, QUAKE_CANVAS_WIDTH, MAP_HEIGHT);
        self.draw_points(&mut d);
        self.draw_legends(&mut d);
        self.draw_table(&mut d);
        self.draw_tooltip(&mut d, frame.mouse);

        d.no_stroke()
            .fill(Rgb::gray(100.0))
            .text_align(TextAlign::Center)
            .text_size(12.0);
        d.text(SOURCE, QUAKE_CANVAS_WIDTH / 2.0, QUAKE_CANVAS_HEIGHT - 20.0);

        d
    }
}
