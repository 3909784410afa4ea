// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, ValueEnum};
use shutter_button::app::AppModel;
use shutter_button::button::ButtonMode;
use shutter_button::i18n;

#[derive(Parser)]
#[command(name = "shutter-button")]
#[command(about = "Camera shutter button demo for the COSMIC desktop")]
#[command(version)]
struct Cli {
    /// Button mode to start in
    #[arg(short, long, value_enum, default_value = "photo")]
    mode: Mode,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Tap to photograph
    Photo,
    /// Tap to record a timed video session
    Video,
}

impl From<Mode> for ButtonMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Photo => ButtonMode::Photo,
            Mode::Video => ButtonMode::Video,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=shutter_button=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(360.0)
            .min_height(400.0),
    );

    // Starts the application's event loop with the startup mode as flags.
    cosmic::app::run::<AppModel>(settings, cli.mode.into())?;

    Ok(())
}
