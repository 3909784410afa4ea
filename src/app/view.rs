// SPDX-License-Identifier: GPL-3.0-only

//! Main view rendering and the settings drawer

use crate::app::state::{AppModel, ContextPage, Message};
use crate::button::ButtonMode;
use crate::constants::{MIN_RECORD_CHOICES, SWEEP_DURATION_CHOICES, app_info, ui};
use crate::fl;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

impl AppModel {
    /// Build the main window content: mode switcher on top, the shutter
    /// button in the middle, counters and the status line below.
    pub fn view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let shutter = self.shutter.view().map(Message::Shutter);

        let content = widget::column()
            .push(self.build_mode_switcher())
            .push(widget::vertical_space().height(spacing.space_m))
            .push(shutter)
            .push(widget::vertical_space().height(spacing.space_m))
            .push(self.build_counters())
            .push(widget::vertical_space().height(spacing.space_xs))
            .push(self.build_status_line())
            .align_x(Alignment::Center)
            .spacing(0);

        widget::container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Build the photo/video switcher.
    ///
    /// The active mode is highlighted with a suggested button style. The
    /// buttons lose their action while a session or its animations run, since
    /// the control rejects mode switches mid-session anyway.
    fn build_mode_switcher(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let is_disabled = self.shutter.is_animating() || self.shutter.is_recording();

        let mode_button = |label: String, mode: ButtonMode| {
            let class = if self.shutter.mode() == mode {
                cosmic::theme::Button::Suggested
            } else {
                cosmic::theme::Button::Text
            };

            let button = widget::button::text(label).class(class);
            if is_disabled {
                button
            } else {
                button.on_press(Message::SetMode(mode))
            }
        };

        widget::row()
            .push(mode_button(fl!("mode-photo"), ButtonMode::Photo))
            .push(widget::horizontal_space().width(spacing.space_xs))
            .push(mode_button(fl!("mode-video"), ButtonMode::Video))
            .spacing(spacing.space_xxs)
            .into()
    }

    fn build_counters(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        widget::row()
            .push(
                widget::text(fl!("photos-taken", count = i64::from(self.photos_taken)))
                    .size(ui::STATUS_TEXT_SIZE),
            )
            .push(widget::horizontal_space().width(spacing.space_m))
            .push(
                widget::text(fl!(
                    "sessions-completed",
                    count = i64::from(self.sessions_completed)
                ))
                .size(ui::STATUS_TEXT_SIZE),
            )
            .into()
    }

    /// A single status line that holds its height while empty, so the layout
    /// does not jump when a notice appears.
    fn build_status_line(&self) -> Element<'_, Message> {
        match &self.status {
            Some(notice) => widget::text(notice.text.clone())
                .size(ui::STATUS_TEXT_SIZE)
                .class(cosmic::theme::Text::Accent)
                .into(),
            None => widget::vertical_space()
                .height(Length::Fixed(f32::from(ui::STATUS_TEXT_SIZE)))
                .into(),
        }
    }

    /// Create the settings view for the context drawer.
    pub fn settings_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let theme_index = match self.config.app_theme {
            crate::config::AppTheme::System => 0,
            crate::config::AppTheme::Dark => 1,
            crate::config::AppTheme::Light => 2,
        };
        let theme_dropdown = widget::dropdown(
            &self.theme_dropdown_options,
            Some(theme_index),
            Message::SetAppTheme,
        );

        let duration_index = SWEEP_DURATION_CHOICES
            .iter()
            .position(|&secs| secs == self.config.progress_duration_secs);
        let duration_dropdown = widget::dropdown(
            &self.duration_dropdown_options,
            duration_index,
            Message::SelectProgressDuration,
        );

        let min_record_index = MIN_RECORD_CHOICES
            .iter()
            .position(|&secs| secs == self.config.min_record_secs);
        let min_record_dropdown = widget::dropdown(
            &self.min_record_dropdown_options,
            min_record_index,
            Message::SelectMinRecordTime,
        );

        let settings_column: Element<'_, Message> = widget::column()
            .push(
                widget::text(fl!("appearance"))
                    .size(16)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(theme_dropdown)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(fl!("recording-duration"))
                    .size(16)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(duration_dropdown)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(fl!("minimum-record-time"))
                    .size(16)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(min_record_dropdown)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(format!("Version {}", app_info::version()))
                    .size(12)
                    .class(cosmic::theme::Text::Accent),
            )
            .spacing(0)
            .into();

        context_drawer::context_drawer(
            settings_column,
            Message::ToggleContextPage(ContextPage::Settings),
        )
        .title(fl!("settings"))
    }
}
