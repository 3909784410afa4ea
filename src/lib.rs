// SPDX-License-Identifier: GPL-3.0-only

//! Shutter Button - a camera shutter button control for the COSMIC desktop
//!
//! The crate ships two things: the [`button`] module, a self-contained
//! custom-drawn control (tap to photograph, tap again to record with a
//! countdown progress ring and elapsed-time label), and a thin demo
//! application in [`app`] that hosts it.
//!
//! # Architecture
//!
//! - [`button`]: the control itself (geometry, animation, session state,
//!   canvas renderer)
//! - [`app`]: demo application state, message handling, and UI
//! - [`config`]: persisted user configuration
//! - [`constants`]: shape ratios, timings, and UI defaults
//! - [`errors`]: construction-time validation errors

pub mod app;
pub mod button;
pub mod config;
pub mod constants;
pub mod errors;
pub mod i18n;

// Re-export commonly used types
pub use app::{AppModel, Message};
pub use button::{
    ButtonMode, PointerEvent, PointerKind, ShutterButton, ShutterEvent, ShutterStyle,
};
pub use config::Config;
pub use errors::ConfigError;
