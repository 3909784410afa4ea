// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use shutter_button::Config;
use std::time::Duration;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(
        config.progress_duration_secs, 15,
        "Default sweep duration should be 15 seconds"
    );
    assert_eq!(
        config.min_record_secs, 3,
        "Default minimum record time should be 3 seconds"
    );
}

#[test]
fn test_shutter_style_from_config() {
    let config = Config {
        progress_duration_secs: 30,
        min_record_secs: 5,
        ..Config::default()
    };

    let style = config.shutter_style("s".to_string());

    assert_eq!(style.progress_duration, Duration::from_secs(30));
    assert_eq!(style.min_record_time, Duration::from_secs(5));
    assert_eq!(style.timer_unit, "s");
    assert!(style.validate().is_ok());
}

#[test]
fn test_shutter_style_clamps_bad_values() {
    // Values left behind by hand-edited or older config files
    let config = Config {
        progress_duration_secs: 0,
        min_record_secs: 10,
        ..Config::default()
    };

    let style = config.shutter_style("s".to_string());

    assert_eq!(
        style.progress_duration,
        Duration::from_secs(1),
        "Zero duration should clamp to one second"
    );
    assert!(
        style.min_record_time <= style.progress_duration,
        "Minimum should never exceed the duration"
    );
    assert!(style.validate().is_ok());
}
