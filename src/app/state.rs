// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::button::{ButtonMode, PointerEvent, ShutterButton};
use crate::config::Config;
use cosmic::cosmic_config;
use cosmic::widget::about::About;
use std::time::Instant;

/// Transient status line shown below the button
#[derive(Debug, Clone)]
pub struct StatusNotice {
    /// Localized text of the notice
    pub text: String,
    /// When the notice disappears
    pub expires_at: Instant,
}

/// Identifies a page in the context drawer
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
    Settings,
}

/// Main application state
pub struct AppModel {
    /// COSMIC runtime core
    pub core: cosmic::Core,
    /// Which context drawer page is open
    pub context_page: ContextPage,
    /// About page widget
    pub about: About,
    /// Persisted configuration
    pub config: Config,
    /// Handle for writing config changes back
    pub config_handler: Option<cosmic_config::Config>,
    /// The shutter button control
    pub shutter: ShutterButton,
    /// Transient status line, if one is showing
    pub status: Option<StatusNotice>,
    /// Photos taken this run
    pub photos_taken: u32,
    /// Recording sessions that ran to completion this run
    pub sessions_completed: u32,
    /// Dropdown labels for the theme setting
    pub theme_dropdown_options: Vec<String>,
    /// Dropdown labels for the sweep duration setting
    pub duration_dropdown_options: Vec<String>,
    /// Dropdown labels for the minimum record time setting
    pub min_record_dropdown_options: Vec<String>,
}

/// All possible user interactions and system events
#[derive(Debug, Clone)]
pub enum Message {
    /// Raw pointer event from the shutter canvas
    Shutter(PointerEvent),
    /// Animation frame tick
    Tick(Instant),
    /// Switch between photo and video mode
    SetMode(ButtonMode),
    /// Open or close a context drawer page
    ToggleContextPage(ContextPage),
    /// Open a URL in the default browser
    LaunchUrl(String),
    /// Config changed on disk
    UpdateConfig(Config),
    /// Theme dropdown selection
    SetAppTheme(usize),
    /// Sweep duration dropdown selection
    SelectProgressDuration(usize),
    /// Minimum record time dropdown selection
    SelectMinRecordTime(usize),
}
