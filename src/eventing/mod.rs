//! Eventing - UI Events and Effects

pub mod effect;
pub mod ui_event;

pub use effect::Effect;
pub use ui_event::UiEvent;
