//! State - Runtime State Modules
//!
//! Mutable state owned by the runtime and handed to feature controllers
//! through the page context, instead of living as ambient globals.

pub mod prefs_state;

pub use prefs_state::{PrefsState, Theme};
