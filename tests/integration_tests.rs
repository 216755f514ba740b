use serial_test::serial;
use std::fs;
use tempfile::tempdir;

use chrono::NaiveDate;
use daydial::constants::{DAY_COLOR, NIGHT_COLOR};
use daydial::sketches::quake_map::project;
use daydial::{Config, Frame, SketchRegistry, color_for_time, is_daytime};

fn create_test_config_file(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("daydial").join("daydial.toml");

    // Create directory structure
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, content).unwrap();

    (temp_dir, config_path)
}

fn frame_at(h: u32, m: u32, width: f32, height: f32) -> Frame {
    let now = NaiveDate::from_ymd_opt(2024, 3, 20)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap();
    Frame::new(now, width, height)
}

#[test]
#[serial]
fn test_integration_normal_day_night_cycle() {
    let config_content = r#"
sunrise = "06:00:00"
sunset = "19:00:00"
use_system_time = true
"#;

    let (_temp_dir, config_path) = create_test_config_file(config_content);
    let config = Config::load_from_path(&config_path).unwrap();

    assert_eq!(config.sunrise, "06:00:00");
    assert_eq!(config.sunset, "19:00:00");

    let dial = config.dial_settings().unwrap();
    assert_eq!((dial.sunrise, dial.sunset), (6.0, 19.0));
    assert_eq!(color_for_time(3.0, dial.sunrise, dial.sunset), NIGHT_COLOR);
    assert_eq!(color_for_time(12.0, dial.sunrise, dial.sunset), DAY_COLOR);
    assert!(is_daytime(6.5, dial.sunrise, dial.sunset));
    assert!(!is_daytime(6.49, dial.sunrise, dial.sunset));
}

#[test]
#[serial]
fn test_integration_extreme_arctic_summer() {
    // Very short night: sunset 23:30, sunrise 01:30
    let config_content = r#"
sunrise = "01:30:00"
sunset = "23:30:00"
"#;

    let (_temp_dir, config_path) = create_test_config_file(config_content);
    let config = Config::load_from_path(&config_path).unwrap();
    let dial = config.dial_settings().unwrap();

    assert_eq!(color_for_time(0.5, dial.sunrise, dial.sunset), NIGHT_COLOR);
    assert_eq!(color_for_time(12.0, dial.sunrise, dial.sunset), DAY_COLOR);
    // 23:45 is three quarters into the sunset window (23:00 to 00:00)
    let c = color_for_time(23.75, dial.sunrise, dial.sunset);
    assert!(c.r < DAY_COLOR.r && c.r > NIGHT_COLOR.r);
}

#[test]
#[serial]
fn test_integration_overlapping_windows_rejected() {
    let (_temp_dir, config_path) = create_test_config_file(
        r#"
sunrise = "12:00:00"
sunset = "12:20:00"
"#,
    );
    let err = Config::load_from_path(&config_path).unwrap_err();
    assert!(format!("{:#}", err).contains("too close"));
}

#[test]
#[serial]
fn test_integration_missing_file_is_an_error() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("nope.toml");
    assert!(Config::load_from_path(&missing).is_err());
}

#[test]
#[serial]
fn test_integration_default_config_roundtrip() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("daydial").join("daydial.toml");

    Config::create_default_config(&config_path).unwrap();
    let written = fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("#[Sun times]"));
    assert!(written.contains("sunrise = \"07:00:00\""));

    let config = Config::load_from_path(&config_path).unwrap();
    let defaults = Config::default();
    assert_eq!(config.sunrise, defaults.sunrise);
    assert_eq!(config.sunset, defaults.sunset);
    assert_eq!(config.palette(), defaults.palette());
    assert_eq!(
        config.dial_settings().unwrap(),
        defaults.dial_settings().unwrap()
    );
}

#[test]
#[serial]
fn test_integration_demo_time_drives_dial() {
    let config_content = r#"
use_system_time = false
demo_time = 20.25
canvas_width = 800
canvas_height = 600
"#;
    let (_temp_dir, config_path) = create_test_config_file(config_content);
    let config = Config::load_from_path(&config_path).unwrap();

    let mut registry = SketchRegistry::with_defaults(&config).unwrap();
    let dial = registry.get_mut("day-dial").unwrap();
    assert_eq!(dial.canvas_size(), (800.0, 600.0));

    // The wall clock says morning, the dial shows the demo time
    let d = dial.render(&frame_at(9, 0, 800.0, 600.0));
    assert_eq!(
        d.texts()[0],
        "Current time (hours, decimal): 20.250   Sunrise: 07:00   Sunset: 18:30   Display: PM dial"
    );
}

#[test]
#[serial]
fn test_integration_custom_quakes_and_hover() {
    let config_content = r#"
[[quakes]]
location = "Somewhere"
time = "2020-01-01 00:00"
latitude = 10.0
longitude = 20.0
magnitude = 7.5
deaths = 120000

[[quakes]]
location = "Elsewhere"
time = "2021-06-01 12:00"
latitude = -30.0
altitude = -60.0
magnitude = 6.1
deaths = 2000
"#;
    let (_temp_dir, config_path) = create_test_config_file(config_content);
    let config = Config::load_from_path(&config_path).unwrap();
    assert_eq!(config.quakes.len(), 2);

    let mut registry = SketchRegistry::with_defaults(&config).unwrap();
    let map = registry.get_mut("quake-map").unwrap();
    let (w, h) = map.canvas_size();

    let (x, y) = project(-30.0, -60.0);
    let d = map.render(&frame_at(12, 0, w, h).with_mouse(x, y));
    assert!(
        d.texts()
            .contains(&"Elsewhere\n2021-06-01 12:00\nMagnitude: 6.1\nDeaths: 2,000")
    );
    // ranked table lists the larger toll first
    let texts = d.texts();
    let first = texts.iter().position(|t| *t == "Somewhere").unwrap();
    let second = texts.iter().position(|t| *t == "Elsewhere").unwrap();
    assert!(first < second);
}

#[test]
#[serial]
fn test_integration_invalid_quake_names_record() {
    let config_content = r#"
[[quakes]]
location = "Nowhere"
time = "2020"
latitude = 120.0
longitude = 0.0
magnitude = 7.0
deaths = 10
"#;
    let (_temp_dir, config_path) = create_test_config_file(config_content);
    let err = Config::load_from_path(&config_path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("#1 (Nowhere)"));
    assert!(message.contains("Latitude"));
}

#[test]
fn test_integration_every_sketch_renders_svg() {
    let mut registry = SketchRegistry::with_defaults(&Config::default()).unwrap();
    let names: Vec<String> = registry.names().iter().map(|s| s.to_string()).collect();
    for name in names {
        let sketch = registry.get_mut(&name).unwrap();
        let (w, h) = sketch.canvas_size();
        sketch.start(0);
        let d = sketch.render(&frame_at(18, 30, w, h).with_millis(90_000));
        assert!(!d.is_empty(), "{} drew nothing", name);
        let svg = d.to_svg(w, h);
        assert!(svg.starts_with("<svg"), "{} produced bad svg", name);
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
