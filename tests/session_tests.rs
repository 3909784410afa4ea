// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the shutter button press/record lifecycle
//!
//! Every test drives the control with explicit `Instant` arithmetic, so the
//! timelines are fully deterministic.

use cosmic::iced::{Point, Size};
use shutter_button::{ButtonMode, PointerEvent, ShutterButton, ShutterEvent, ShutterStyle};
use std::time::{Duration, Instant};

const BOUNDS: Size = Size::new(300.0, 321.0);
const CENTER: Point = Point::new(150.0, 171.0);
const SCALE: Duration = Duration::from_millis(300);

fn video_button() -> ShutterButton {
    ShutterButton::new(ButtonMode::Video, ShutterStyle::default())
        .unwrap_or_else(|err| panic!("default style must validate: {err}"))
}

fn press(button: &mut ShutterButton, at: Point, now: Instant) -> Option<ShutterEvent> {
    button.handle_pointer(PointerEvent::pressed(at, BOUNDS), now)
}

fn release(button: &mut ShutterButton, at: Point, now: Instant) -> Option<ShutterEvent> {
    button.handle_pointer(PointerEvent::released(at, BOUNDS), now)
}

/// Click the button and run the press-scale animation to completion, leaving
/// the sweep started at `t0 + 300ms`.
fn start_recording(button: &mut ShutterButton, t0: Instant) {
    assert_eq!(press(button, CENTER, t0), None);
    assert_eq!(release(button, CENTER, t0), Some(ShutterEvent::Activated));
    assert_eq!(button.tick(t0 + SCALE), None);
}

#[test]
fn test_photo_tap_activates_once() {
    let mut button = ShutterButton::new(ButtonMode::Photo, ShutterStyle::default())
        .unwrap_or_else(|err| panic!("default style must validate: {err}"));
    let t0 = Instant::now();

    assert_eq!(press(&mut button, CENTER, t0), None);
    assert_eq!(
        release(&mut button, CENTER, t0),
        Some(ShutterEvent::Activated)
    );

    // A photo tap never touches the session state.
    assert!(!button.is_recording());
    assert!(!button.is_animating());
    assert_eq!(button.session().progress_degrees, 0.0);
}

#[test]
fn test_video_click_starts_session() {
    let mut button = video_button();
    let t0 = Instant::now();

    assert_eq!(press(&mut button, CENTER, t0), None);
    assert_eq!(
        release(&mut button, CENTER, t0),
        Some(ShutterEvent::Activated)
    );

    assert!(button.is_recording());
    assert!(button.is_animating());
    assert_eq!(button.session().timer_label, "0s");
    assert_eq!(button.session().progress_degrees, 0.0);
}

#[test]
fn test_press_outside_hit_box_is_ignored() {
    let mut button = video_button();
    let t0 = Instant::now();

    assert_eq!(press(&mut button, Point::new(2.0, 2.0), t0), None);
    // Not armed, so the release does nothing either.
    assert_eq!(release(&mut button, CENTER, t0), None);
    assert!(!button.is_recording());
}

#[test]
fn test_release_outside_hit_box_disarms() {
    let mut button = video_button();
    let t0 = Instant::now();

    assert_eq!(press(&mut button, CENTER, t0), None);
    assert_eq!(release(&mut button, Point::new(2.0, 2.0), t0), None);

    // The arm was consumed: a later release inside the hit box is a no-op.
    assert_eq!(release(&mut button, CENTER, t0), None);
    assert!(!button.is_recording());
}

#[test]
fn test_press_scale_morphs_radii() {
    let mut button = video_button();
    let t0 = Instant::now();
    let (rest_inner, rest_outer) = button.radii(BOUNDS);

    assert_eq!(press(&mut button, CENTER, t0), None);
    assert_eq!(
        release(&mut button, CENTER, t0),
        Some(ShutterEvent::Activated)
    );

    assert_eq!(button.tick(t0 + Duration::from_millis(150)), None);
    let (mid_inner, mid_outer) = button.radii(BOUNDS);
    assert!(mid_inner < rest_inner);
    assert!(mid_outer > rest_outer);

    assert_eq!(button.tick(t0 + SCALE), None);
    let (end_inner, end_outer) = button.radii(BOUNDS);
    assert_eq!(end_inner, 0.0, "Inner circle vanishes when fully morphed");
    assert!(end_outer > mid_outer);
}

#[test]
fn test_timer_label_truncates_to_tenths() {
    let mut button = video_button();
    let t0 = Instant::now();
    start_recording(&mut button, t0);

    assert_eq!(button.tick(t0 + SCALE + Duration::from_millis(1370)), None);
    assert_eq!(button.session().timer_label, "1.3s");
}

#[test]
fn test_progress_sweeps_with_elapsed_time() {
    let mut button = video_button();
    let t0 = Instant::now();
    start_recording(&mut button, t0);

    assert_eq!(button.tick(t0 + SCALE + Duration::from_millis(7500)), None);
    let halfway = button.session().progress_degrees;
    assert!((halfway - 180.0).abs() < 0.5, "got {halfway}");

    // A stale earlier instant can never move the arc backwards.
    assert_eq!(button.tick(t0 + SCALE + Duration::from_millis(7000)), None);
    assert!(button.session().progress_degrees >= halfway);
}

#[test]
fn test_stop_before_minimum_is_rejected() {
    let mut button = video_button();
    let t0 = Instant::now();
    start_recording(&mut button, t0);

    assert_eq!(button.tick(t0 + SCALE + Duration::from_secs(2)), None);
    assert!(!button.session().over_minimum);

    let rejected = release(&mut button, CENTER, t0 + SCALE + Duration::from_secs(2));
    assert_eq!(
        rejected,
        Some(ShutterEvent::MinimumNotMet {
            elapsed: Duration::from_secs(2)
        })
    );

    // The session keeps running.
    assert!(button.is_recording());
    assert_eq!(button.tick(t0 + SCALE + Duration::from_secs(4)), None);
    assert!(button.session().over_minimum);
}

#[test]
fn test_user_stop_never_completes_session() {
    let mut button = video_button();
    let t0 = Instant::now();
    start_recording(&mut button, t0);

    assert_eq!(button.tick(t0 + SCALE + Duration::from_secs(5)), None);
    assert!(button.session().over_minimum);

    let stop_at = t0 + SCALE + Duration::from_secs(5);
    assert_eq!(release(&mut button, CENTER, stop_at), None);
    assert!(!button.is_recording());

    // Run the reverse scale out; no completion event may ever surface.
    assert_eq!(button.tick(stop_at + Duration::from_millis(150)), None);
    assert_eq!(button.tick(stop_at + SCALE), None);
    assert_eq!(button.tick(stop_at + SCALE + Duration::from_secs(20)), None);
    assert!(!button.is_animating());
}

#[test]
fn test_second_stop_during_reverse_scale_changes_nothing() {
    let mut button = video_button();
    let t0 = Instant::now();
    start_recording(&mut button, t0);

    assert_eq!(button.tick(t0 + SCALE + Duration::from_secs(5)), None);
    let stop_at = t0 + SCALE + Duration::from_secs(5);
    assert_eq!(release(&mut button, CENTER, stop_at), None);

    // Stop again mid reverse-scale: consumed, no event, no state change.
    assert_eq!(button.tick(stop_at + Duration::from_millis(150)), None);
    let session_before = button.session().clone();
    assert_eq!(
        release(&mut button, CENTER, stop_at + Duration::from_millis(150)),
        None
    );
    assert_eq!(button.session(), &session_before);
    assert!(button.is_animating(), "Reverse scale keeps running");

    // The end state is the same as after a single stop.
    assert_eq!(button.tick(stop_at + SCALE), None);
    assert!(!button.is_animating());
    assert!(!button.is_recording());
    assert_eq!(button.radii(BOUNDS), video_button().radii(BOUNDS));
}

#[test]
fn test_natural_completion_emits_exactly_once() {
    let mut button = video_button();
    let t0 = Instant::now();
    let rest_radii = button.radii(BOUNDS);
    start_recording(&mut button, t0);

    let full = t0 + SCALE + Duration::from_secs(15);
    assert_eq!(button.tick(full), Some(ShutterEvent::SessionComplete));
    assert!(!button.is_recording());
    assert_eq!(button.session().progress_degrees, 360.0);

    // Reverse scale runs, then the radii return to their rest values.
    assert_eq!(button.tick(full + Duration::from_millis(150)), None);
    assert_eq!(button.tick(full + SCALE), None);
    assert!(!button.is_animating());
    assert_eq!(button.radii(BOUNDS), rest_radii);
}

#[test]
fn test_resize_mid_session_keeps_radii_ordered() {
    let mut button = video_button();
    let t0 = Instant::now();
    start_recording(&mut button, t0);
    assert_eq!(button.tick(t0 + SCALE + Duration::from_secs(1)), None);

    for size in [
        Size::new(120.0, 141.0),
        Size::new(300.0, 321.0),
        Size::new(800.0, 621.0),
    ] {
        let geo = button.geometry(size);
        let (inner, outer) = button.radii(size);
        assert!(inner >= 0.0);
        assert!(outer > inner);
        assert!(outer <= geo.outer_radius + geo.scale_growth());
    }
}

#[test]
fn test_mode_switch_blocked_mid_session() {
    let mut button = video_button();
    let t0 = Instant::now();
    start_recording(&mut button, t0);

    button.set_mode(ButtonMode::Photo);
    assert_eq!(button.mode(), ButtonMode::Video);

    // Style updates are likewise deferred, keeping the live sweep duration.
    let mut style = ShutterStyle::default();
    style.progress_duration = Duration::from_secs(5);
    assert!(button.set_style(style).is_ok());
    assert_eq!(
        button.style().progress_duration,
        Duration::from_secs(15),
        "Live session keeps its original duration"
    );
}

#[test]
fn test_pointer_cancel_is_a_no_op() {
    let mut button = video_button();
    let t0 = Instant::now();
    start_recording(&mut button, t0);

    assert_eq!(
        button.handle_pointer(PointerEvent::cancelled(BOUNDS), t0 + SCALE),
        None
    );
    assert!(button.is_recording(), "Cancel leaves the session running");
}

#[test]
fn test_invalid_style_rejected_at_construction() {
    let mut style = ShutterStyle::default();
    style.min_record_time = Duration::from_secs(20);

    assert!(ShutterButton::new(ButtonMode::Video, style).is_err());

    let mut zero = ShutterStyle::default();
    zero.progress_duration = Duration::ZERO;
    assert!(ShutterButton::new(ButtonMode::Photo, zero).is_err());
}
