// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the shutter button crate

use std::fmt;
use std::time::Duration;

/// Errors raised when constructing a shutter button from an invalid style
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The progress sweep duration is zero
    ZeroProgressDuration,
    /// The minimum recording time exceeds the full sweep duration
    MinimumExceedsDuration {
        /// Configured minimum recording time
        minimum: Duration,
        /// Configured sweep duration
        duration: Duration,
    },
    /// The timer text size is zero or negative
    InvalidTextSize(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroProgressDuration => {
                write!(f, "Progress sweep duration must be greater than zero")
            }
            ConfigError::MinimumExceedsDuration { minimum, duration } => write!(
                f,
                "Minimum recording time ({:?}) exceeds the sweep duration ({:?})",
                minimum, duration
            ),
            ConfigError::InvalidTextSize(size) => {
                write!(f, "Timer text size must be positive, got {}", size)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
