//! Theme Toggle
//!
//! Flips between dark (attribute absent) and light (explicit root
//! attribute), persists the choice, and acknowledges the gesture with a
//! pulse on the control and a rotate-in on the icon of the entered mode.
//! While no preference has ever been persisted, the controller also
//! tracks live system theme changes without persisting them.

use crate::constants::{THEME_ATTR, THEME_STORAGE_KEY};
use crate::dom::NodeId;
use crate::eventing::{Effect, UiEvent};
use crate::features::{pulse_control, Component, PageContext};
use crate::motion::{Easing, Tween, TweenProps};
use crate::state::Theme;

/// Theme toggle controller
#[derive(Debug, Default)]
pub struct ThemeController {
    toggle: Option<NodeId>,
}

impl ThemeController {
    pub fn new() -> Self {
        Self::default()
    }

    fn toggle_theme(&self, ctx: &mut PageContext<'_>) {
        let Some(toggle) = self.toggle else {
            return;
        };

        let root = ctx.doc.root();
        // The presentation attribute is the source of truth, not PrefsState
        let was_dark = ctx.doc.get(root).attribute(THEME_ATTR) != Some("light");

        if was_dark {
            ctx.doc.get_mut(root).set_attribute(THEME_ATTR, "light");
            ctx.storage.set(THEME_STORAGE_KEY, Theme::Light.code());
            ctx.prefs.set_theme(Theme::Light);
        } else {
            ctx.doc.get_mut(root).remove_attribute(THEME_ATTR);
            ctx.storage.set(THEME_STORAGE_KEY, Theme::Dark.code());
            ctx.prefs.set_theme(Theme::Dark);
        }
        tracing::info!(theme = %ctx.prefs.theme.code(), "theme toggled");

        pulse_control(ctx, toggle);

        // Rotate in the icon of the mode being entered
        let icon_class = if was_dark { "icon-sun" } else { "icon-moon" };
        if let Some(icon) = ctx.doc.descendant_with_class(toggle, icon_class) {
            ctx.motion.animate_from_to(
                ctx.doc,
                &[icon],
                &TweenProps::new().rotate(-30.0).scale(0.5),
                Tween::to(TweenProps::new().rotate(0.0).scale(1.0))
                    .duration(0.3)
                    .ease(Easing::BackOut(1.7)),
            );
        }
    }

    fn on_system_theme_change(&self, dark: bool, ctx: &mut PageContext<'_>) {
        // Acts purely as a live default for users who never touched the
        // toggle; an explicit preference always wins.
        if ctx.storage.get(THEME_STORAGE_KEY).is_some() {
            return;
        }
        let root = ctx.doc.root();
        if dark {
            ctx.doc.get_mut(root).remove_attribute(THEME_ATTR);
            ctx.prefs.set_theme(Theme::Dark);
        } else {
            ctx.doc.get_mut(root).set_attribute(THEME_ATTR, "light");
            ctx.prefs.set_theme(Theme::Light);
        }
    }
}

impl Component for ThemeController {
    fn name(&self) -> &'static str {
        "theme"
    }

    fn mount(&mut self, ctx: &mut PageContext<'_>) -> Vec<Effect> {
        self.toggle = ctx.doc.element_by_id("theme-toggle");
        Vec::new()
    }

    fn on_event(&mut self, event: &UiEvent, ctx: &mut PageContext<'_>) -> Vec<Effect> {
        match event {
            UiEvent::Click { target } if Some(*target) == self.toggle => {
                self.toggle_theme(ctx);
            }
            UiEvent::SystemThemeChanged { dark } => {
                self.on_system_theme_change(*dark, ctx);
            }
            _ => {}
        }
        Vec::new()
    }
}
