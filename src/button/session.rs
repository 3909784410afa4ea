// SPDX-License-Identifier: GPL-3.0-only

//! Recording session state
//!
//! `SessionState` is the only mutable state of the control. It is owned by
//! [`ShutterButton`](super::ShutterButton) and mutated exclusively by the
//! animation driver and the pointer state machine, which invalidate the
//! drawing cache after every visible change.

use super::animation::Animation;
use std::time::Duration;

/// Press/record lifecycle phase
///
/// The running phases own their timeline, so at most one scale animation and
/// one progress sweep can exist at a time.
#[derive(Debug)]
pub(crate) enum Phase {
    /// Nothing in flight
    Idle,
    /// Pointer went down inside the hit box, waiting for the release
    PressArmed,
    /// Press-scale animation running
    Scaling(Animation),
    /// Progress sweep running
    Recording(Animation),
    /// Reverse-scale animation running
    Stopping(Animation),
}

impl Phase {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::PressArmed => "press-armed",
            Phase::Scaling(_) => "scaling",
            Phase::Recording(_) => "recording",
            Phase::Stopping(_) => "stopping",
        }
    }
}

/// Mutable per-session state of the control
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Whether a recording session is live
    pub is_recording: bool,
    /// Whether a scale animation (press or reverse) is running
    pub is_scaling: bool,
    /// Latched once the elapsed time passes the minimum record time;
    /// never reset before the session ends
    pub over_minimum: bool,
    /// Swept angle of the progress arc, degrees in `[0, 360]`,
    /// monotonically non-decreasing within a session
    pub progress_degrees: f32,
    /// Elapsed-time label shown above the button while recording
    pub timer_label: String,
    /// Morph fraction of the scale animation: 0 at rest, 1 fully morphed
    /// (inner circle vanished, outer circle grown)
    pub scale: f32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            is_recording: false,
            is_scaling: false,
            over_minimum: false,
            progress_degrees: 0.0,
            timer_label: String::from("0"),
            scale: 0.0,
        }
    }
}

impl SessionState {
    /// Reset all per-session fields at the start of a recording session.
    pub(crate) fn reset(&mut self, unit: &str) {
        self.is_recording = true;
        self.over_minimum = false;
        self.progress_degrees = 0.0;
        self.timer_label = format!("0{unit}");
    }

    /// Advance the progress arc, clamped to a full circle.
    ///
    /// The sweep is monotonic: a stale tick can never move the arc backwards.
    pub(crate) fn advance_progress(&mut self, degrees: f32) {
        self.progress_degrees = self.progress_degrees.max(degrees.min(360.0));
    }

    /// Update the timer label: elapsed seconds floored to one decimal place
    /// plus the unit marker.
    pub(crate) fn update_timer(&mut self, elapsed: Duration, unit: &str) {
        let tenths = (elapsed.as_secs_f64() * 10.0).floor() / 10.0;
        self.timer_label = format!("{tenths:.1}{unit}");
    }

    /// Latch the over-minimum flag once the elapsed time passes the minimum.
    pub(crate) fn latch_minimum(&mut self, elapsed: Duration, minimum: Duration) {
        if elapsed >= minimum {
            self.over_minimum = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_session_fields() {
        let mut session = SessionState {
            progress_degrees: 200.0,
            over_minimum: true,
            ..SessionState::default()
        };

        session.reset("s");

        assert!(session.is_recording);
        assert!(!session.over_minimum);
        assert_eq!(session.progress_degrees, 0.0);
        assert_eq!(session.timer_label, "0s");
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut session = SessionState::default();

        session.advance_progress(90.0);
        session.advance_progress(45.0);
        assert_eq!(session.progress_degrees, 90.0);

        session.advance_progress(400.0);
        assert_eq!(session.progress_degrees, 360.0);
    }

    #[test]
    fn test_timer_label_truncates() {
        let mut session = SessionState::default();

        session.update_timer(Duration::from_millis(1370), "s");
        assert_eq!(session.timer_label, "1.3s");

        session.update_timer(Duration::from_millis(1999), "s");
        assert_eq!(session.timer_label, "1.9s");
    }

    #[test]
    fn test_minimum_latch_is_one_way() {
        let mut session = SessionState::default();
        let minimum = Duration::from_secs(3);

        session.latch_minimum(Duration::from_secs(2), minimum);
        assert!(!session.over_minimum);

        session.latch_minimum(Duration::from_secs(3), minimum);
        assert!(session.over_minimum);

        // A stale earlier tick must not clear the latch.
        session.latch_minimum(Duration::from_secs(1), minimum);
        assert!(session.over_minimum);
    }
}
