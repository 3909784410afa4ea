// SPDX-License-Identifier: GPL-3.0-only

//! Camera shutter button control
//!
//! A single custom-drawn control that behaves like a camera shutter button:
//! tap to photograph, tap again to record video with a countdown progress
//! ring and elapsed-time label.
//!
//! # Architecture
//!
//! - `geometry`: derives all radii and positions from the layout size
//! - `animation`: linear timelines driven by explicit frame instants
//! - `session`: the mutable per-session state and lifecycle phases
//! - `widget`: the canvas renderer and raw pointer event translation
//!
//! The control itself owns no clock and spawns no tasks: the host feeds it
//! pointer events through [`ShutterButton::handle_pointer`] and frame
//! instants through [`ShutterButton::tick`], and reacts to the returned
//! [`ShutterEvent`]s.

pub mod animation;
pub mod geometry;
pub mod session;
pub mod widget;

use crate::constants::{shape, timing, ui};
use crate::errors::ConfigError;
use animation::{Animation, AnimationEvent, lerp};
use cosmic::iced::{Color, Point, Size};
use cosmic::widget::canvas;
use geometry::Geometry;
use session::{Phase, SessionState};
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// Button variant, fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonMode {
    /// Tap to photograph
    Photo,
    /// Tap to start a timed recording session
    Video,
}

/// Visual and timing configuration, read-only after construction
#[derive(Debug, Clone, PartialEq)]
pub struct ShutterStyle {
    /// Inner circle color in photo mode
    pub inner_color_photo: Color,
    /// Outer circle color in photo mode
    pub outer_color_photo: Color,
    /// Inner circle color in video mode
    pub inner_color_video: Color,
    /// Outer circle color in video mode
    pub outer_color_video: Color,
    /// Progress arc color
    pub progress_color: Color,
    /// Timer label color
    pub timer_text_color: Color,
    /// Timer label text size
    pub timer_text_size: f32,
    /// Unit marker appended to the timer label, localized by the host
    pub timer_unit: String,
    /// Full progress sweep duration
    pub progress_duration: Duration,
    /// Minimum recording time before a stop is accepted
    pub min_record_time: Duration,
}

impl Default for ShutterStyle {
    fn default() -> Self {
        Self {
            inner_color_photo: Color::WHITE,
            outer_color_photo: Color::from_rgba8(0xFF, 0xFF, 0xFF, 0.667),
            inner_color_video: Color::from_rgb8(0xFF, 0x45, 0x00),
            outer_color_video: Color::from_rgba8(0xFF, 0xFF, 0xFF, 0.667),
            progress_color: Color::from_rgb8(0x90, 0xEE, 0x90),
            timer_text_color: Color::WHITE,
            timer_text_size: ui::DEFAULT_TIMER_TEXT_SIZE,
            timer_unit: String::from("s"),
            progress_duration: timing::DEFAULT_PROGRESS_DURATION,
            min_record_time: timing::DEFAULT_MIN_RECORD_TIME,
        }
    }
}

impl ShutterStyle {
    /// Check the style for combinations the control cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.progress_duration.is_zero() {
            return Err(ConfigError::ZeroProgressDuration);
        }
        if self.min_record_time > self.progress_duration {
            return Err(ConfigError::MinimumExceedsDuration {
                minimum: self.min_record_time,
                duration: self.progress_duration,
            });
        }
        if self.timer_text_size <= 0.0 {
            return Err(ConfigError::InvalidTextSize(self.timer_text_size));
        }
        Ok(())
    }
}

/// Event emitted by the control towards its host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShutterEvent {
    /// The button was activated: a photo tap, or the click that starts a
    /// video session
    Activated,
    /// A recording session ran its full duration.
    ///
    /// Emitted exactly once per session and never for a user-cancelled stop.
    SessionComplete,
    /// A stop was requested before the minimum recording time elapsed;
    /// the session keeps running
    MinimumNotMet {
        /// Elapsed recording time at the moment of the rejected stop
        elapsed: Duration,
    },
}

/// Raw pointer gesture kind, in control-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerKind {
    /// Pointer or finger went down
    Pressed(Point),
    /// Pointer or finger was released
    Released(Point),
    /// The gesture was cancelled by the windowing system
    Cancelled,
}

/// A pointer event together with the control bounds it was measured against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What the pointer did
    pub kind: PointerKind,
    /// Layout size of the control when the event arrived
    pub bounds: Size,
}

impl PointerEvent {
    pub fn pressed(position: Point, bounds: Size) -> Self {
        Self {
            kind: PointerKind::Pressed(position),
            bounds,
        }
    }

    pub fn released(position: Point, bounds: Size) -> Self {
        Self {
            kind: PointerKind::Released(position),
            bounds,
        }
    }

    pub fn cancelled(bounds: Size) -> Self {
        Self {
            kind: PointerKind::Cancelled,
            bounds,
        }
    }
}

/// The shutter button control
///
/// Owns the session state exclusively; the host renders it through
/// [`ShutterButton::view`] and drives it with pointer events and frame ticks.
pub struct ShutterButton {
    mode: ButtonMode,
    style: ShutterStyle,
    session: SessionState,
    phase: Phase,
    cache: canvas::Cache<cosmic::Renderer>,
}

impl ShutterButton {
    /// Create a control in the given mode.
    pub fn new(mode: ButtonMode, style: ShutterStyle) -> Result<Self, ConfigError> {
        style.validate()?;

        Ok(Self {
            mode,
            style,
            session: SessionState::default(),
            phase: Phase::Idle,
            cache: canvas::Cache::new(),
        })
    }

    /// Create a control with the default style. The defaults always
    /// validate, so this cannot fail.
    pub fn with_defaults(mode: ButtonMode) -> Self {
        Self {
            mode,
            style: ShutterStyle::default(),
            session: SessionState::default(),
            phase: Phase::Idle,
            cache: canvas::Cache::new(),
        }
    }

    pub fn mode(&self) -> ButtonMode {
        self.mode
    }

    /// Switch between photo and video. Ignored while a session or any of its
    /// animations is in flight.
    pub fn set_mode(&mut self, mode: ButtonMode) {
        if !matches!(self.phase, Phase::Idle) {
            warn!(phase = self.phase.name(), "Ignoring mode switch mid-session");
            return;
        }
        if self.mode != mode {
            self.mode = mode;
            self.request_redraw();
        }
    }

    pub fn style(&self) -> &ShutterStyle {
        &self.style
    }

    /// Replace the style. Ignored while a session or any of its animations
    /// is in flight, so a live sweep keeps its original duration.
    pub fn set_style(&mut self, style: ShutterStyle) -> Result<(), ConfigError> {
        style.validate()?;

        if !matches!(self.phase, Phase::Idle) {
            warn!(
                phase = self.phase.name(),
                "Ignoring style update mid-session"
            );
            return Ok(());
        }
        if self.style != style {
            self.style = style;
            self.request_redraw();
        }
        Ok(())
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Whether a recording session is live
    pub fn is_recording(&self) -> bool {
        self.session.is_recording
    }

    /// Whether any timeline is in flight and frame ticks are needed
    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            Phase::Scaling(_) | Phase::Recording(_) | Phase::Stopping(_)
        )
    }

    /// Height reserved above the button for the timer label
    pub fn extra_height(&self) -> f32 {
        self.style.timer_text_size * shape::LABEL_SPACE_RATIO
    }

    /// Preferred layout size: a square button area plus the label strip
    pub fn preferred_size(&self) -> Size {
        Size::new(
            ui::DEFAULT_BUTTON_SIZE,
            ui::DEFAULT_BUTTON_SIZE + self.extra_height(),
        )
    }

    /// Geometry snapshot for a layout size
    pub fn geometry(&self, bounds: Size) -> Geometry {
        Geometry::from_size(bounds.width, bounds.height, self.extra_height())
    }

    /// Effective (inner, outer) radii for a layout size, with the current
    /// scale morph applied
    pub fn radii(&self, bounds: Size) -> (f32, f32) {
        let geo = self.geometry(bounds);
        (
            lerp(geo.inner_radius, 0.0, self.session.scale),
            geo.outer_radius + geo.scale_growth() * self.session.scale,
        )
    }

    /// Invalidate the drawing cache so the next frame repaints.
    fn request_redraw(&self) {
        self.cache.clear();
    }

    pub(crate) fn cache(&self) -> &canvas::Cache<cosmic::Renderer> {
        &self.cache
    }

    /// Interpret a pointer event.
    ///
    /// Total over all phases: unexpected events are consumed without a state
    /// change. Returns the event the host should react to, if any.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) -> Option<ShutterEvent> {
        match self.mode {
            ButtonMode::Photo => self.handle_photo_pointer(event),
            ButtonMode::Video => self.handle_video_pointer(event, now),
        }
    }

    fn handle_photo_pointer(&mut self, event: PointerEvent) -> Option<ShutterEvent> {
        let PointerKind::Released(position) = event.kind else {
            return None;
        };

        let geo = self.geometry(event.bounds);
        if geo.contains(position.x, position.y) {
            debug!("Photo shutter activated");
            Some(ShutterEvent::Activated)
        } else {
            None
        }
    }

    fn handle_video_pointer(&mut self, event: PointerEvent, now: Instant) -> Option<ShutterEvent> {
        let geo = self.geometry(event.bounds);

        match event.kind {
            PointerKind::Pressed(position) => {
                // Only an idle button arms; a press during recording or a
                // scale animation is consumed without effect.
                if matches!(self.phase, Phase::Idle) && geo.hits_button(position.x, position.y) {
                    trace!("Press armed");
                    self.phase = Phase::PressArmed;
                }
                None
            }
            PointerKind::Released(position) => self.handle_video_release(position, geo, now),
            PointerKind::Cancelled => {
                // Pass-through: in-flight animations keep running.
                trace!(phase = self.phase.name(), "Pointer cancel ignored");
                None
            }
        }
    }

    fn handle_video_release(
        &mut self,
        position: Point,
        geo: Geometry,
        now: Instant,
    ) -> Option<ShutterEvent> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => None,
            // The scale animations own the transition out of their phase;
            // releases during them are consumed.
            Phase::Scaling(anim) => {
                self.phase = Phase::Scaling(anim);
                None
            }
            Phase::Stopping(anim) => {
                self.phase = Phase::Stopping(anim);
                None
            }
            Phase::PressArmed => {
                if geo.hits_button(position.x, position.y) {
                    self.begin_session(now);
                    Some(ShutterEvent::Activated)
                } else {
                    trace!("Release outside hit box, disarming");
                    None
                }
            }
            Phase::Recording(mut sweep) => {
                // The stop gesture is accepted anywhere inside the control,
                // not just the circle.
                if !geo.contains(position.x, position.y) {
                    self.phase = Phase::Recording(sweep);
                    return None;
                }

                if self.session.over_minimum {
                    let _ = sweep.cancel();
                    debug!(
                        progress = self.session.progress_degrees,
                        "Recording stopped by user"
                    );
                    // A user stop truncates the sweep where it is and never
                    // counts as a finished recording.
                    self.session.is_recording = false;
                    self.start_reverse_scale(now);
                    None
                } else {
                    let elapsed = sweep.elapsed(now);
                    self.phase = Phase::Recording(sweep);
                    debug!(?elapsed, "Stop rejected, minimum not met");
                    Some(ShutterEvent::MinimumNotMet { elapsed })
                }
            }
        }
    }

    /// Reset the session fields and start the press-scale animation.
    fn begin_session(&mut self, now: Instant) {
        self.session.reset(&self.style.timer_unit);
        self.session.scale = 0.0;

        let (anim, event) = Animation::start(timing::SCALE_ANIMATION, now);
        if event == AnimationEvent::Started {
            self.session.is_scaling = true;
        }
        self.phase = Phase::Scaling(anim);
        debug!("Recording session started");
        self.request_redraw();
    }

    fn start_reverse_scale(&mut self, now: Instant) {
        let (anim, event) = Animation::start(timing::SCALE_ANIMATION, now);
        if event == AnimationEvent::Started {
            self.session.is_scaling = true;
        }
        self.phase = Phase::Stopping(anim);
        self.request_redraw();
    }

    /// Advance the in-flight animation to the given frame instant.
    ///
    /// Returns [`ShutterEvent::SessionComplete`] on the tick where the sweep
    /// reaches its full duration.
    pub fn tick(&mut self, now: Instant) -> Option<ShutterEvent> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => None,
            Phase::PressArmed => {
                self.phase = Phase::PressArmed;
                None
            }
            Phase::Scaling(mut anim) => {
                match anim.tick(now) {
                    AnimationEvent::Tick(t) => {
                        self.session.scale = t;
                        self.phase = Phase::Scaling(anim);
                    }
                    AnimationEvent::Completed => {
                        self.session.scale = 1.0;
                        self.session.is_scaling = false;
                        let (sweep, _) = Animation::start(self.style.progress_duration, now);
                        self.phase = Phase::Recording(sweep);
                        debug!("Press-scale complete, sweep started");
                    }
                    AnimationEvent::Cancelled => {
                        // Cancellation only clears the scaling flag.
                        self.session.is_scaling = false;
                    }
                    AnimationEvent::Started => self.phase = Phase::Scaling(anim),
                }
                self.request_redraw();
                None
            }
            Phase::Recording(mut sweep) => {
                let emitted = match sweep.tick(now) {
                    AnimationEvent::Tick(t) => {
                        let elapsed = sweep.elapsed(now);
                        self.session.advance_progress(360.0 * t);
                        self.session.update_timer(elapsed, &self.style.timer_unit);
                        self.session
                            .latch_minimum(elapsed, self.style.min_record_time);
                        self.phase = Phase::Recording(sweep);
                        None
                    }
                    AnimationEvent::Completed => {
                        self.session.advance_progress(360.0);
                        self.session
                            .update_timer(self.style.progress_duration, &self.style.timer_unit);
                        self.session
                            .latch_minimum(self.style.progress_duration, self.style.min_record_time);
                        self.session.is_recording = false;
                        self.start_reverse_scale(now);
                        debug!("Recording session ran to completion");
                        Some(ShutterEvent::SessionComplete)
                    }
                    AnimationEvent::Cancelled | AnimationEvent::Started => {
                        // A cancelled sweep never stays in the phase, so this
                        // is unreachable in practice; end the session cleanly
                        // rather than leave it stuck.
                        self.session.is_recording = false;
                        None
                    }
                };
                self.request_redraw();
                emitted
            }
            Phase::Stopping(mut anim) => {
                match anim.tick(now) {
                    AnimationEvent::Tick(t) => {
                        self.session.scale = 1.0 - t;
                        self.phase = Phase::Stopping(anim);
                    }
                    AnimationEvent::Completed => {
                        self.session.scale = 0.0;
                        self.session.is_scaling = false;
                        debug!("Reverse-scale complete, back to idle");
                    }
                    AnimationEvent::Cancelled => {
                        self.session.is_scaling = false;
                    }
                    AnimationEvent::Started => self.phase = Phase::Stopping(anim),
                }
                self.request_redraw();
                None
            }
        }
    }
}
