//! Language Toggle
//!
//! Binary en/sr cycle. Mount applies the active language's translations
//! and stamps the control label; a click flips and persists the
//! language, updates the root attribute, animates the label swap and
//! re-applies translations with the animated swap.

use crate::constants::{LANG_ATTR, LANG_STORAGE_KEY, SWAP_FADE_DURATION};
use crate::dom::NodeId;
use crate::eventing::{Effect, UiEvent};
use crate::features::{pulse_control, Component, PageContext};
use crate::i18n::localizer;
use crate::motion::{Easing, Tween, TweenProps};

/// Language toggle controller
#[derive(Debug, Default)]
pub struct LanguageController {
    toggle: Option<NodeId>,
    label: Option<NodeId>,
}

impl LanguageController {
    pub fn new() -> Self {
        Self::default()
    }

    fn toggle_language(&self, ctx: &mut PageContext<'_>) {
        let (Some(toggle), Some(label)) = (self.toggle, self.label) else {
            return;
        };

        let lang = ctx.prefs.lang.toggled();
        ctx.prefs.set_lang(lang);
        ctx.storage.set(LANG_STORAGE_KEY, lang.code());
        let root = ctx.doc.root();
        ctx.doc.get_mut(root).set_attribute(LANG_ATTR, lang.code());
        tracing::info!(lang = %lang.code(), "language toggled");

        pulse_control(ctx, toggle);

        // Label swap: fade/slide out, replace once hidden, fade back in
        ctx.motion.animate_to(
            ctx.doc,
            &[label],
            Tween::to(TweenProps::new().opacity(0.0).y(-10.0))
                .duration(SWAP_FADE_DURATION)
                .ease(Easing::PowerIn(2)),
            Some(Box::new(move |doc, motion| {
                doc.get_mut(label).set_text(lang.label());
                motion.animate_from_to(
                    doc,
                    &[label],
                    &TweenProps::new().opacity(0.0).y(10.0),
                    Tween::to(TweenProps::new().opacity(1.0).y(0.0))
                        .duration(SWAP_FADE_DURATION)
                        .ease(Easing::PowerOut(2)),
                );
            })),
        );

        localizer::apply(ctx.doc, ctx.motion, lang, true);
    }
}

impl Component for LanguageController {
    fn name(&self) -> &'static str {
        "language"
    }

    fn mount(&mut self, ctx: &mut PageContext<'_>) -> Vec<Effect> {
        self.toggle = ctx.doc.element_by_id("lang-toggle");
        self.label = self
            .toggle
            .and_then(|toggle| ctx.doc.descendant_with_class(toggle, "lang-toggle__text"));

        let (Some(_), Some(label)) = (self.toggle, self.label) else {
            return Vec::new();
        };

        let lang = ctx.prefs.lang;
        ctx.doc.get_mut(label).set_text(lang.label());
        localizer::apply(ctx.doc, ctx.motion, lang, false);
        Vec::new()
    }

    fn on_event(&mut self, event: &UiEvent, ctx: &mut PageContext<'_>) -> Vec<Effect> {
        if let UiEvent::Click { target } = event {
            if Some(*target) == self.toggle {
                self.toggle_language(ctx);
            }
        }
        Vec::new()
    }
}
