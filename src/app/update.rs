// SPDX-License-Identifier: GPL-3.0-only

//! Message handling
//!
//! The `update()` dispatcher routes every message to a focused handler
//! method. Shutter events come in two flavors: raw pointer events from the
//! canvas and frame ticks from the subscription; both go through the control
//! and the returned [`ShutterEvent`]s are surfaced as status notices.

use crate::app::state::{AppModel, ContextPage, Message, StatusNotice};
use crate::button::{ButtonMode, PointerEvent, ShutterEvent};
use crate::config::AppTheme;
use crate::constants::{MIN_RECORD_CHOICES, SWEEP_DURATION_CHOICES, timing};
use crate::fl;
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use std::time::Instant;
use tracing::{error, info};

impl AppModel {
    /// Main message handler.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            Message::Shutter(event) => self.handle_shutter(event),
            Message::Tick(now) => self.handle_tick(now),
            Message::SetMode(mode) => self.handle_set_mode(mode),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::UpdateConfig(config) => self.handle_update_config(config),
            Message::SetAppTheme(index) => self.handle_set_app_theme(index),
            Message::SelectProgressDuration(index) => self.handle_select_duration(index),
            Message::SelectMinRecordTime(index) => self.handle_select_min_record(index),
        }
    }

    fn handle_shutter(&mut self, event: PointerEvent) -> Task<cosmic::Action<Message>> {
        let emitted = self.shutter.handle_pointer(event, Instant::now());
        self.handle_shutter_event(emitted);
        Task::none()
    }

    fn handle_tick(&mut self, now: Instant) -> Task<cosmic::Action<Message>> {
        if let Some(notice) = &self.status
            && now >= notice.expires_at
        {
            self.status = None;
        }

        let emitted = self.shutter.tick(now);
        self.handle_shutter_event(emitted);
        Task::none()
    }

    fn handle_shutter_event(&mut self, event: Option<ShutterEvent>) {
        match event {
            Some(ShutterEvent::Activated) => match self.shutter.mode() {
                ButtonMode::Photo => {
                    self.photos_taken += 1;
                    info!(count = self.photos_taken, "Photo captured");
                    self.show_notice(fl!("photo-captured"));
                }
                ButtonMode::Video => {
                    info!("Recording session started");
                }
            },
            Some(ShutterEvent::SessionComplete) => {
                self.sessions_completed += 1;
                info!(count = self.sessions_completed, "Recording finished");
                self.show_notice(fl!("recording-finished"));
            }
            Some(ShutterEvent::MinimumNotMet { elapsed }) => {
                info!(?elapsed, "Stop rejected before minimum record time");
                let min = i64::from(self.shutter.style().min_record_time.as_secs() as u32);
                self.show_notice(fl!("recording-too-short", min = min));
            }
            None => {}
        }
    }

    fn show_notice(&mut self, text: String) {
        self.status = Some(StatusNotice {
            text,
            expires_at: Instant::now() + timing::STATUS_NOTICE,
        });
    }

    fn handle_set_mode(&mut self, mode: ButtonMode) -> Task<cosmic::Action<Message>> {
        self.shutter.set_mode(mode);
        Task::none()
    }

    fn handle_toggle_context_page(
        &mut self,
        context_page: ContextPage,
    ) -> Task<cosmic::Action<Message>> {
        if self.context_page == context_page {
            self.core.window.show_context = !self.core.window.show_context;
        } else {
            self.context_page = context_page;
            self.core.window.show_context = true;
        }
        Task::none()
    }

    fn handle_launch_url(&self, url: String) -> Task<cosmic::Action<Message>> {
        match open::that_detached(&url) {
            Ok(()) => {}
            Err(err) => {
                error!(url = %url, error = %err, "Failed to open URL");
            }
        }
        Task::none()
    }

    fn handle_update_config(
        &mut self,
        config: crate::config::Config,
    ) -> Task<cosmic::Action<Message>> {
        info!("UpdateConfig received");
        self.config = config;
        self.apply_timing_config();
        Task::none()
    }

    fn handle_set_app_theme(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        let app_theme = match index {
            0 => AppTheme::System,
            1 => AppTheme::Dark,
            2 => AppTheme::Light,
            _ => return Task::none(),
        };

        info!(?app_theme, "Setting application theme");
        self.config.app_theme = app_theme;
        self.save_config();

        cosmic::command::set_theme(app_theme.theme())
    }

    fn handle_select_duration(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        let Some(&secs) = SWEEP_DURATION_CHOICES.get(index) else {
            return Task::none();
        };

        info!(secs, "Setting sweep duration");
        self.config.progress_duration_secs = secs;
        // Keep the pair consistent when the new duration undercuts the
        // configured minimum.
        self.config.min_record_secs = self.config.min_record_secs.min(secs);
        self.save_config();
        self.apply_timing_config();
        Task::none()
    }

    fn handle_select_min_record(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        let Some(&secs) = MIN_RECORD_CHOICES.get(index) else {
            return Task::none();
        };

        info!(secs, "Setting minimum record time");
        self.config.min_record_secs = secs.min(self.config.progress_duration_secs);
        self.save_config();
        self.apply_timing_config();
        Task::none()
    }

    fn save_config(&self) {
        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, "Failed to save settings");
        }
    }

    /// Push the configured timings into the control. Ignored by the control
    /// mid-session, so a live sweep keeps its original duration.
    fn apply_timing_config(&mut self) {
        let style = self.config.shutter_style(fl!("timer-unit"));
        if let Err(err) = self.shutter.set_style(style) {
            error!(%err, "Rejected timing settings");
        }
    }
}
