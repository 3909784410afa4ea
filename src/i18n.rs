// SPDX-License-Identifier: GPL-3.0-only

//! Localization support via embedded fluent bundles

use i18n_embed::{
    DefaultLocalizer, LanguageLoader, Localizer,
    fluent::{FluentLanguageLoader, fluent_language_loader},
    unic_langid::LanguageIdentifier,
};
use rust_embed::RustEmbed;
use std::sync::LazyLock;

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

pub static LANGUAGE_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    let loader: FluentLanguageLoader = fluent_language_loader!();

    loader
        .load_fallback_language(&Localizations)
        .expect("Error while loading fallback language");

    loader
});

/// Request a localized string by message id.
#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id)
    }};

    ($message_id:literal, $($args:expr),*) => {{
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $message_id, $($args),*)
    }};
}

/// Apply the requested languages at startup.
pub fn init(requested_languages: &[LanguageIdentifier]) {
    if let Err(error) = localize(requested_languages) {
        eprintln!("Error while loading language for Shutter Button {}", error);
    }
}

pub fn localize(
    requested_languages: &[LanguageIdentifier],
) -> Result<(), i18n_embed::I18nEmbedError> {
    let localizer = localizer();
    localizer.select(requested_languages)?;

    Ok(())
}

pub fn localizer() -> Box<dyn Localizer> {
    Box::new(DefaultLocalizer::new(&*LANGUAGE_LOADER, &Localizations))
}
