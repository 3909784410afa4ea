// SPDX-License-Identifier: GPL-3.0-only

//! Demo application hosting the shutter button
//!
//! A thin COSMIC host around the [`crate::button`] control: it routes canvas
//! pointer events and frame ticks into the control, surfaces the emitted
//! events as status notices, and exposes the timing settings in a context
//! drawer.
//!
//! - `state`: application state types (AppModel, Message, ContextPage)
//! - `update`: message handling
//! - `view`: main view rendering and the settings drawer

mod state;
mod update;
mod view;

use crate::button::ShutterButton;
use crate::config::Config;
use crate::constants::{MIN_RECORD_CHOICES, SWEEP_DURATION_CHOICES, timing};
use crate::fl;
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::widget::{self, about::About};
use cosmic::{Element, Task};
pub use state::{AppModel, ContextPage, Message};
use tracing::error;

const REPOSITORY: &str = "https://github.com/cosmic-utils/shutter-button";
const APP_ICON: &[u8] = include_bytes!(
    "../../resources/icons/hicolor/scalable/apps/io.github.cosmic_utils.shutter_button.svg"
);

impl cosmic::Application for AppModel {
    type Executor = cosmic::executor::Default;

    /// Startup button mode, chosen on the command line.
    type Flags = crate::button::ButtonMode;

    type Message = Message;

    const APP_ID: &'static str = "io.github.cosmic_utils.shutter_button";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    fn init(core: cosmic::Core, flags: Self::Flags) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("GIT_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        let (config_handler, config) =
            match cosmic_config::Config::new(Self::APP_ID, Config::VERSION) {
                Ok(handler) => {
                    let config = match Config::get_entry(&handler) {
                        Ok(config) => config,
                        Err((errors, config)) => {
                            error!(?errors, "Errors loading config");
                            config
                        }
                    };
                    (Some(handler), config)
                }
                Err(err) => {
                    error!(%err, "Failed to create config handler");
                    (None, Config::default())
                }
            };

        let style = config.shutter_style(fl!("timer-unit"));
        let shutter = match ShutterButton::new(flags, style) {
            Ok(shutter) => shutter,
            Err(err) => {
                error!(%err, "Invalid timing settings, falling back to defaults");
                ShutterButton::with_defaults(flags)
            }
        };

        let app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            config,
            config_handler,
            shutter,
            status: None,
            photos_taken: 0,
            sessions_completed: 0,
            theme_dropdown_options: vec![
                fl!("theme-system"),
                fl!("theme-dark"),
                fl!("theme-light"),
            ],
            duration_dropdown_options: SWEEP_DURATION_CHOICES
                .iter()
                .map(|&secs| fl!("seconds-label", secs = i64::from(secs)))
                .collect(),
            min_record_dropdown_options: MIN_RECORD_CHOICES
                .iter()
                .map(|&secs| fl!("seconds-label", secs = i64::from(secs)))
                .collect(),
        };

        (app, Task::none())
    }

    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            widget::button::icon(widget::icon::from_name("help-about-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::About))
                .into(),
            widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::Settings))
                .into(),
        ]
    }

    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
            ContextPage::Settings => self.settings_view(),
        })
    }

    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        let config_sub = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        // Frame ticks only run while something needs them: an in-flight
        // animation, or a status notice waiting to expire.
        if self.shutter.is_animating() || self.status.is_some() {
            let tick_sub = cosmic::iced::time::every(timing::FRAME_INTERVAL).map(Message::Tick);
            Subscription::batch([config_sub, tick_sub])
        } else {
            config_sub
        }
    }

    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}
