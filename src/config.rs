// SPDX-License-Identifier: GPL-3.0-only

use crate::button::ShutterStyle;
use crate::constants::timing;
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic::{Theme, theme};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application theme preference
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum AppTheme {
    /// Follow system theme (dark or light based on system setting)
    #[default]
    System,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl AppTheme {
    /// Get the COSMIC theme for this app theme preference
    pub fn theme(&self) -> Theme {
        match self {
            Self::Dark => {
                let mut theme = theme::system_dark();
                theme.theme_type.prefer_dark(Some(true));
                theme
            }
            Self::Light => {
                let mut theme = theme::system_light();
                theme.theme_type.prefer_dark(Some(false));
                theme
            }
            Self::System => theme::system_preference(),
        }
    }
}

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq, Serialize, Deserialize)]
#[version = 1]
pub struct Config {
    /// Application theme preference (System, Dark, Light)
    pub app_theme: AppTheme,
    /// Full progress sweep duration in seconds
    pub progress_duration_secs: u32,
    /// Minimum recording time in seconds before a stop is accepted
    pub min_record_secs: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(),
            progress_duration_secs: timing::DEFAULT_PROGRESS_DURATION.as_secs() as u32,
            min_record_secs: timing::DEFAULT_MIN_RECORD_TIME.as_secs() as u32,
        }
    }
}

impl Config {
    /// Build a shutter style from the persisted timing settings.
    ///
    /// Out-of-range values left behind by older config files are clamped
    /// instead of rejected: a zero duration becomes one second and the
    /// minimum never exceeds the duration.
    pub fn shutter_style(&self, timer_unit: String) -> ShutterStyle {
        let duration_secs = self.progress_duration_secs.max(1);
        let min_secs = self.min_record_secs.min(duration_secs);

        ShutterStyle {
            progress_duration: Duration::from_secs(u64::from(duration_secs)),
            min_record_time: Duration::from_secs(u64::from(min_secs)),
            timer_unit,
            ..ShutterStyle::default()
        }
    }
}
