// SPDX-License-Identifier: GPL-3.0-only

//! Crate-wide constants

/// Shape ratios for the shutter button
///
/// All radii are derived from half of the drawable height (the control height
/// minus the space reserved for the timer label).
pub mod shape {
    /// Outer circle radius as a fraction of the drawable half-height
    pub const OUTER_RADIUS_RATIO: f32 = 0.7;

    /// Inner circle radius as a fraction of the drawable half-height
    pub const INNER_RADIUS_RATIO: f32 = 0.55;

    /// Stop-cue square side as a fraction of the inner radius
    pub const INNER_SQUARE_RATIO: f32 = 0.55;

    /// Outer circle growth during the press-scale animation, as a fraction
    /// of the drawable half-height
    pub const OUTER_GROWTH_RATIO: f32 = 0.3;

    /// Space reserved above the button for the timer label, as a multiple
    /// of the timer text size
    pub const LABEL_SPACE_RATIO: f32 = 1.5;
}

/// Timing constants
pub mod timing {
    use std::time::Duration;

    /// Press-scale and reverse-scale animation duration
    pub const SCALE_ANIMATION: Duration = Duration::from_millis(300);

    /// Default full progress sweep duration
    pub const DEFAULT_PROGRESS_DURATION: Duration = Duration::from_secs(15);

    /// Default minimum recording time before a stop is accepted
    pub const DEFAULT_MIN_RECORD_TIME: Duration = Duration::from_secs(3);

    /// Animation tick interval (~60 fps)
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

    /// How long a status notice stays on screen
    pub const STATUS_NOTICE: Duration = Duration::from_secs(4);
}

/// UI constants for the demo application
pub mod ui {
    /// Default edge length of the square button area (the canvas adds the
    /// label space on top of this)
    pub const DEFAULT_BUTTON_SIZE: f32 = 300.0;

    /// Default timer text size
    pub const DEFAULT_TIMER_TEXT_SIZE: f32 = 14.0;

    /// Status label text size
    pub const STATUS_TEXT_SIZE: u16 = 14;
}

/// Choices offered by the settings drawer for the sweep duration, in seconds
pub const SWEEP_DURATION_CHOICES: [u32; 5] = [5, 10, 15, 30, 60];

/// Choices offered by the settings drawer for the minimum record time, in seconds
pub const MIN_RECORD_CHOICES: [u32; 4] = [1, 2, 3, 5];

/// Application information utilities
pub mod app_info {
    /// Get the application version from build-time environment
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_ratios_ordered() {
        assert!(shape::OUTER_RADIUS_RATIO > shape::INNER_RADIUS_RATIO);
        assert!(shape::INNER_RADIUS_RATIO > 0.0);
    }

    #[test]
    fn test_default_minimum_below_duration() {
        assert!(timing::DEFAULT_MIN_RECORD_TIME < timing::DEFAULT_PROGRESS_DURATION);
    }
}
