// SPDX-License-Identifier: GPL-3.0-only

//! Linear animation timelines
//!
//! Animations are time-interpolated state updates delivered on a periodic
//! tick, not real concurrency. Each timeline reports its lifecycle through a
//! single tagged event stream; time always arrives as an explicit `Instant`
//! so the driver is deterministic under test.

use std::time::{Duration, Instant};

/// Lifecycle event reported by a timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationEvent {
    /// The timeline was started
    Started,
    /// The timeline advanced; carries linear progress in `[0, 1)`
    Tick(f32),
    /// The timeline reached its full duration
    Completed,
    /// The timeline was cancelled before completing
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Running,
    Completed,
    Cancelled,
}

/// A linear, fixed-duration timeline
#[derive(Debug, Clone)]
pub struct Animation {
    started_at: Instant,
    duration: Duration,
    lifecycle: Lifecycle,
}

impl Animation {
    /// Start a timeline, reporting the `Started` event to the caller.
    pub fn start(duration: Duration, now: Instant) -> (Self, AnimationEvent) {
        (
            Self {
                started_at: now,
                duration,
                lifecycle: Lifecycle::Running,
            },
            AnimationEvent::Started,
        )
    }

    /// Linear progress in `[0, 1]` at the given instant
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Elapsed play time, capped at the full duration
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
            .min(self.duration)
    }

    /// Advance the timeline to `now`.
    ///
    /// A running timeline reports `Tick(progress)` until the duration is
    /// reached, then `Completed` exactly once; the terminal state is sticky.
    pub fn tick(&mut self, now: Instant) -> AnimationEvent {
        match self.lifecycle {
            Lifecycle::Cancelled => AnimationEvent::Cancelled,
            Lifecycle::Completed => AnimationEvent::Completed,
            Lifecycle::Running => {
                let progress = self.progress(now);
                if progress >= 1.0 {
                    self.lifecycle = Lifecycle::Completed;
                    AnimationEvent::Completed
                } else {
                    AnimationEvent::Tick(progress)
                }
            }
        }
    }

    /// Cancel the timeline.
    ///
    /// Idempotent: cancelling a timeline that already completed or was
    /// already cancelled leaves it unchanged.
    pub fn cancel(&mut self) -> AnimationEvent {
        if self.lifecycle == Lifecycle::Running {
            self.lifecycle = Lifecycle::Cancelled;
        }
        AnimationEvent::Cancelled
    }

    /// Whether the timeline is still running
    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }
}

/// Linear interpolation between two values
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}
