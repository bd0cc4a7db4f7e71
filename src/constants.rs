//! Runtime Constants
//!
//! Centralized timing, threshold and storage-key constants shared across
//! the feature controllers.

/// Persisted preference slot for the theme ("light" / "dark")
pub const THEME_STORAGE_KEY: &str = "app-theme";

/// Persisted preference slot for the language ("en" / "sr")
pub const LANG_STORAGE_KEY: &str = "app-lang";

/// Root presentation attribute carrying the light theme (absent = dark)
pub const THEME_ATTR: &str = "data-theme";

/// Root language attribute mirroring the active language
pub const LANG_ATTR: &str = "lang";

/// Text binding attribute
pub const I18N_ATTR: &str = "data-i18n";

/// Placeholder binding attribute
pub const I18N_PLACEHOLDER_ATTR: &str = "data-i18n-placeholder";

/// Scale-pulse acknowledgement on toggle controls
pub const PULSE_SCALE: f32 = 0.9;
pub const PULSE_DURATION: f32 = 0.1;

/// Animated text swap: fade/slide out then in, each leg
pub const SWAP_FADE_DURATION: f32 = 0.15;

/// Status message auto-clear delay after a submission completes
pub const STATUS_CLEAR_MS: u64 = 5000;

/// Status fade-out duration when the auto-clear fires
pub const STATUS_FADE_DURATION: f32 = 0.3;

/// Header gains the "scrolled" class past this offset
pub const HEADER_SCROLL_THRESHOLD: f32 = 50.0;

/// Fixed header height compensated by smooth anchor scrolling
pub const SMOOTH_SCROLL_OFFSET: f32 = 80.0;

/// Magnetic pull factor on primary buttons
pub const MAGNETIC_PULL: f32 = 0.2;

/// Input focus scale
pub const INPUT_FOCUS_SCALE: f32 = 1.02;

/// Button hover scale
pub const BUTTON_HOVER_SCALE: f32 = 1.05;

/// Entrance timeline start delay
pub const ENTRANCE_DELAY: f32 = 0.3;

/// Default viewport geometry for the headless document
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 900.0;
