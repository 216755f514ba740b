//! Configuration system for daydial.
//!
//! The settings that the browser sketches kept in sliders and checkboxes live
//! here as a TOML file, loaded once and passed into each render.
//!
//! ## Configuration Source
//!
//! `daydial.toml` is looked up in **XDG_CONFIG_HOME**/daydial/ unless a path is
//! given with `--config`. A commented default file is written when none exists.
//!
//! ## Configuration Structure
//!
//! ```toml
//! # Sun times (manual mode)
//! sunrise = "07:00:00"
//! sunset = "18:30:00"
//! time_mode = "manual"              # "manual" or "geo"
//!
//! # Geo mode
//! latitude = 40.7128
//! longitude = -74.0060
//!
//! # Clock source
//! use_system_time = true            # false renders demo_time instead
//! demo_time = 12.0                  # hours, 13.5 = 13:30
//!
//! # Colors
//! day_color = "#ffb93c"
//! night_color = "#14235a"
//!
//! # Canvas and timers
//! canvas_width = 760
//! canvas_height = 520
//! planned_hours = 1.0
//! elevation = 0.0
//! center_image = "images/center.jpg"
//!
//! [[quakes]]
//! location = "Sumatra, Indonesia"
//! time = "2004-12-26 00:58"
//! latitude = 3.3
//! longitude = 95.98
//! magnitude = 9.1
//! deaths = 227898
//! ```
//!
//! ## Validation
//!
//! Times must parse as `HH:MM:SS` and their transition windows must not
//! overlap, colors must be `#rrggbb`, and numeric settings are range checked.

use anyhow::{Context, Result};
use chrono::NaiveTime;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::color::{HexColor, Palette, Rgb};
use crate::constants::*;
use crate::logger::Log;
use crate::sketches::day_dial::DialSettings;
use crate::sketches::quake_map::QuakeRecord;
use crate::time_state::{hours_from_time, normalize_hour};

/// How the sunrise/sunset hours are obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeMode {
    /// Use the configured `sunrise`/`sunset` strings.
    Manual,
    /// Compute today's sunrise/sunset from `latitude`/`longitude`.
    Geo,
}

impl TimeMode {
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "manual" => Some(TimeMode::Manual),
            "geo" => Some(TimeMode::Geo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeMode::Manual => "manual",
            TimeMode::Geo => "geo",
        }
    }
}

fn default_sunrise() -> String {
    DEFAULT_SUNRISE.to_string()
}

fn default_sunset() -> String {
    DEFAULT_SUNSET.to_string()
}

/// Configuration structure for daydial settings.
///
/// Most fields are optional and fall back to the defaults in
/// [`crate::constants`].
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_sunrise")]
    pub sunrise: String,
    #[serde(default = "default_sunset")]
    pub sunset: String,
    pub time_mode: Option<String>, // "manual" or "geo"
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// When false, the dial shows `demo_time` instead of the wall clock.
    pub use_system_time: Option<bool>,
    pub demo_time: Option<f64>, // hours

    pub day_color: Option<HexColor>,
    pub night_color: Option<HexColor>,

    pub canvas_width: Option<f32>,
    pub canvas_height: Option<f32>,

    pub planned_hours: Option<f64>, // hike timer target
    pub elevation: Option<f64>,     // meters, hike timer input

    pub center_image: Option<String>, // calendar rings center picture

    #[serde(default)]
    pub quakes: Vec<QuakeRecord>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sunrise: default_sunrise(),
            sunset: default_sunset(),
            time_mode: None,
            latitude: None,
            longitude: None,
            use_system_time: None,
            demo_time: None,
            day_color: None,
            night_color: None,
            canvas_width: None,
            canvas_height: None,
            planned_hours: None,
            elevation: None,
            center_image: None,
            quakes: Vec::new(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("daydial").join("daydial.toml"))
    }

    /// Write a commented default configuration to `path`.
    pub fn create_default_config(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_content = ConfigBuilder::new()
            .add_section("Sun times")
            .add_setting(
                "sunrise",
                &format!("\"{}\"", DEFAULT_SUNRISE),
                "Center of the sunrise transition (HH:MM:SS)",
            )
            .add_setting(
                "sunset",
                &format!("\"{}\"", DEFAULT_SUNSET),
                "Center of the sunset transition (HH:MM:SS)",
            )
            .add_setting(
                "time_mode",
                &format!("\"{}\"", DEFAULT_TIME_MODE),
                "\"manual\" or \"geo\" (needs latitude/longitude)",
            )
            .add_section("Clock source")
            .add_setting(
                "use_system_time",
                &DEFAULT_USE_SYSTEM_TIME.to_string(),
                "Set false to render demo_time instead of the clock",
            )
            .add_setting(
                "demo_time",
                &format!("{:.1}", DEFAULT_DEMO_TIME),
                "Hours, e.g. 13.5 = 13:30",
            )
            .add_section("Colors")
            .add_setting(
                "day_color",
                &format!("\"{}\"", DAY_COLOR.to_hex()),
                "Dial color in full daylight",
            )
            .add_setting(
                "night_color",
                &format!("\"{}\"", NIGHT_COLOR.to_hex()),
                "Dial color at night",
            )
            .add_section("Timers")
            .add_setting(
                "planned_hours",
                &format!("{:.1}", DEFAULT_PLANNED_HOURS),
                "Hike timer target duration",
            )
            .add_setting(
                "elevation",
                &format!("{:.1}", DEFAULT_ELEVATION),
                "Simulated elevation in meters (-30 to 30)",
            )
            .build();

        fs::write(path, config_content)
            .with_context(|| format!("Failed to write default config to {}", path.display()))?;

        Log::log_decorated(&format!(
            "Created default config at {}",
            crate::utils::path_for_display(path)
        ));
        Ok(())
    }

    /// Load from a specific path. Does NOT create a default config if the
    /// path doesn't exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Log::log_debug(&format!("Loaded config from {}", path.display()));
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load from the default location, creating it first if missing.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)
                .context("Failed to create default config during load")?;
        }

        Self::load_from_path(&config_path).with_context(|| {
            format!(
                "Failed to load configuration from {}",
                config_path.display()
            )
        })
    }

    pub fn time_mode(&self) -> TimeMode {
        self.time_mode
            .as_deref()
            .and_then(TimeMode::parse)
            .unwrap_or(TimeMode::Manual)
    }

    /// Configured sunrise as decimal hours.
    pub fn sunrise_hours(&self) -> Result<f64> {
        parse_hours(&self.sunrise).context("Invalid sunrise time format")
    }

    /// Configured sunset as decimal hours.
    pub fn sunset_hours(&self) -> Result<f64> {
        parse_hours(&self.sunset).context("Invalid sunset time format")
    }

    /// Sunrise and sunset hours for the active time mode.
    ///
    /// Geo mode falls back to the manual times when the solar calculation
    /// fails.
    pub fn resolve_sun_hours(&self) -> Result<(f64, f64)> {
        if self.time_mode() == TimeMode::Geo {
            if let (Some(lat), Some(lon)) = (self.latitude, self.longitude) {
                match crate::solar::today_sunrise_sunset_hours(lat, lon) {
                    Ok(hours) => return Ok(hours),
                    Err(e) => {
                        Log::log_warning(&format!(
                            "Solar calculation failed ({}), using manual sun times",
                            e
                        ));
                    }
                }
            }
        }
        Ok((self.sunrise_hours()?, self.sunset_hours()?))
    }

    pub fn palette(&self) -> Palette {
        let defaults = Palette::default();
        Palette {
            day: self
                .day_color
                .as_ref()
                .and_then(HexColor::parse)
                .unwrap_or(defaults.day),
            night: self
                .night_color
                .as_ref()
                .and_then(HexColor::parse)
                .unwrap_or(defaults.night),
        }
    }

    /// Settings for the day dial sketch, with sun hours resolved.
    pub fn dial_settings(&self) -> Result<DialSettings> {
        let (sunrise, sunset) = self.resolve_sun_hours()?;
        Ok(DialSettings {
            sunrise,
            sunset,
            use_system_time: self.use_system_time.unwrap_or(DEFAULT_USE_SYSTEM_TIME),
            demo_time: self.demo_time.unwrap_or(DEFAULT_DEMO_TIME),
            palette: self.palette(),
        })
    }

    pub fn canvas_size(&self) -> (f32, f32) {
        (
            self.canvas_width.unwrap_or(DEFAULT_CANVAS_WIDTH),
            self.canvas_height.unwrap_or(DEFAULT_CANVAS_HEIGHT),
        )
    }

    pub fn log_config(&self, path: Option<&Path>) {
        match path {
            Some(p) => Log::log_block_start(&format!(
                "Loaded configuration from {}",
                crate::utils::path_for_display(p)
            )),
            None => Log::log_block_start("Using built-in defaults"),
        }

        let mode = self.time_mode();
        Log::log_indented(&format!("Time mode: {}", mode.as_str()));
        if mode == TimeMode::Geo {
            if let (Some(lat), Some(lon)) = (self.latitude, self.longitude) {
                let lat_dir = if lat >= 0.0 { "N" } else { "S" };
                let lon_dir = if lon >= 0.0 { "E" } else { "W" };
                Log::log_indented(&format!(
                    "Location: {:.4}°{}, {:.4}°{}",
                    lat.abs(),
                    lat_dir,
                    lon.abs(),
                    lon_dir
                ));
            }
        }
        Log::log_indented(&format!("Sunrise time: {}", self.sunrise));
        Log::log_indented(&format!("Sunset time: {}", self.sunset));
        Log::log_indented(&format!(
            "Use system time: {}",
            self.use_system_time.unwrap_or(DEFAULT_USE_SYSTEM_TIME)
        ));
        let palette = self.palette();
        Log::log_indented(&format!("Day color: {}", palette.day.to_hex()));
        Log::log_indented(&format!("Night color: {}", palette.night.to_hex()));
        if !self.quakes.is_empty() {
            Log::log_indented(&format!("Quake records: {}", self.quakes.len()));
        }
    }
}

/// Parse `HH:MM:SS` into decimal hours.
pub fn parse_hours(value: &str) -> Result<f64> {
    let time = NaiveTime::parse_from_str(value, "%H:%M:%S")
        .with_context(|| format!("Expected HH:MM:SS, got \"{}\"", value))?;
    Ok(hours_from_time(time))
}

/// Comprehensive configuration validation.
pub fn validate_config(config: &Config) -> Result<()> {
    let sunrise = config.sunrise_hours()?;
    let sunset = config.sunset_hours()?;

    // Both windows are 2 * TRANSITION_HALF_WIDTH wide; closer centers overlap
    let gap = normalize_hour(sunset - sunrise).min(normalize_hour(sunrise - sunset));
    if gap < TRANSITION_HALF_WIDTH * 2.0 {
        anyhow::bail!(
            "Sunrise ({}) and sunset ({}) are too close: their {}-minute transitions would overlap",
            config.sunrise,
            config.sunset,
            (TRANSITION_HALF_WIDTH * 120.0) as u32
        );
    }

    if let Some(ref mode) = config.time_mode {
        match TimeMode::parse(mode) {
            Some(TimeMode::Geo) => {
                let (Some(lat), Some(lon)) = (config.latitude, config.longitude) else {
                    anyhow::bail!("time_mode = \"geo\" requires latitude and longitude");
                };
                crate::solar::validate_coordinates(lat, lon)?;
            }
            Some(TimeMode::Manual) => {}
            None => anyhow::bail!("Time mode must be 'manual' or 'geo' (got '{}')", mode),
        }
    }

    if let Some(demo) = config.demo_time {
        if !(MINIMUM_HOUR..=MAXIMUM_DEMO_HOUR).contains(&demo) {
            anyhow::bail!(
                "Demo time ({}) must be between {} and {} hours",
                demo,
                MINIMUM_HOUR,
                MAXIMUM_DEMO_HOUR
            );
        }
    }

    for (key, color) in [("day_color", &config.day_color), ("night_color", &config.night_color)] {
        if let Some(hex) = color {
            if Rgb::from_hex(&hex.0).is_none() {
                anyhow::bail!("{} must be a #rrggbb color (got \"{}\")", key, hex.0);
            }
        }
    }

    for (key, size) in [("canvas_width", config.canvas_width), ("canvas_height", config.canvas_height)] {
        if let Some(size) = size {
            if !(MINIMUM_CANVAS_SIZE..=MAXIMUM_CANVAS_SIZE).contains(&size) {
                anyhow::bail!(
                    "{} ({}) must be between {} and {} pixels",
                    key,
                    size,
                    MINIMUM_CANVAS_SIZE,
                    MAXIMUM_CANVAS_SIZE
                );
            }
        }
    }

    if let Some(hours) = config.planned_hours {
        if !(hours > 0.0 && hours <= MAXIMUM_PLANNED_HOURS) {
            anyhow::bail!(
                "Planned hours ({}) must be above 0 and at most {}",
                hours,
                MAXIMUM_PLANNED_HOURS
            );
        }
    }

    if let Some(elevation) = config.elevation {
        if !(ELEVATION_MIN..=ELEVATION_MAX).contains(&elevation) {
            anyhow::bail!(
                "Elevation ({}) must be between {} and {} meters",
                elevation,
                ELEVATION_MIN,
                ELEVATION_MAX
            );
        }
    }

    for (i, quake) in config.quakes.iter().enumerate() {
        quake
            .validate()
            .with_context(|| format!("Invalid quake record #{} ({})", i + 1, quake.location))?;
    }

    Ok(())
}

/// Builds the commented default config with aligned comments.
struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

#[derive(Clone)]
struct ConfigEntry {
    content: String,
    entry_type: EntryType,
}

#[derive(Clone)]
enum EntryType {
    Section,
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry {
            content: format!("#[{}]", title),
            entry_type: EntryType::Section,
        });
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        let line = format!("{} = {}", key, value);
        self.entries.push(ConfigEntry {
            content: line.clone(),
            entry_type: EntryType::Setting {
                line,
                comment: format!("# {}", comment),
            },
        });
        self
    }

    fn build(self) -> String {
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match &entry.entry_type {
                EntryType::Setting { line, .. } => Some(line.len()),
                EntryType::Section => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut result = Vec::new();
        let mut first_section = true;

        for entry in self.entries {
            match entry.entry_type {
                EntryType::Section => {
                    if !first_section {
                        result.push(String::new());
                    }
                    result.push(entry.content);
                    first_section = false;
                }
                EntryType::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{}{}{}", line, padding, comment));
                }
            }
        }

        result.push(String::new());
        result.join("\n")
    }
}
