//! PrefsState - Persisted User Preferences
//!
//! Single source of truth for the theme and language preferences and
//! keeper of the contract that changes are reflected both in persisted
//! storage and in the document's root attributes.

use crate::constants::{LANG_ATTR, LANG_STORAGE_KEY, THEME_ATTR, THEME_STORAGE_KEY};
use crate::dom::Document;
use crate::i18n::Lang;
use crate::services::storage::PreferenceStorage;

/// Visual theme. Dark is the default and the attribute-absent state;
/// light is explicit via the root presentation attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Code as persisted
    pub fn code(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a persisted code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Preference context passed into the feature controllers
#[derive(Clone, Copy, Debug, Default)]
pub struct PrefsState {
    /// Effective theme
    pub theme: Theme,
    /// Active language
    pub lang: Lang,
}

impl PrefsState {
    /// Resolve persisted/default preferences and stamp the root element,
    /// before any component mounts ("before first paint").
    pub fn boot(doc: &mut Document, storage: &dyn PreferenceStorage) -> Self {
        Self::boot_with_hint(doc, storage, system_prefers_dark())
    }

    /// Boot with an explicit system hint (tests simulate the hint here)
    pub fn boot_with_hint(
        doc: &mut Document,
        storage: &dyn PreferenceStorage,
        system_prefers_dark: bool,
    ) -> Self {
        let theme = init_theme_early(doc, storage, system_prefers_dark);
        let lang = init_language_early(doc, storage);
        Self { theme, lang }
    }

    /// Set the effective theme
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Set the active language
    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
    }
}

/// Resolve and stamp the theme. The saved preference always wins; with
/// nothing saved the system hint is read but the effective default stays
/// dark either way (longstanding behavior, kept as-is).
fn init_theme_early(
    doc: &mut Document,
    storage: &dyn PreferenceStorage,
    system_prefers_dark: bool,
) -> Theme {
    let saved = storage.get(THEME_STORAGE_KEY).as_deref().and_then(Theme::from_code);
    tracing::debug!(saved = ?saved, system_prefers_dark, "resolving theme");

    // The hint is read (and logged) but the unset default stays dark.
    let theme = saved.unwrap_or(Theme::Dark);

    if theme == Theme::Light {
        let root = doc.root();
        doc.get_mut(root).set_attribute(THEME_ATTR, "light");
    }
    theme
}

/// Resolve and stamp the language (persisted, else English)
fn init_language_early(doc: &mut Document, storage: &dyn PreferenceStorage) -> Lang {
    let lang = storage
        .get(LANG_STORAGE_KEY)
        .as_deref()
        .and_then(Lang::from_code)
        .unwrap_or_default();
    let root = doc.root();
    doc.get_mut(root).set_attribute(LANG_ATTR, lang.code());
    lang
}

/// System "prefers dark" hint; dark on detection error
pub fn system_prefers_dark() -> bool {
    !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
}
