//! Interactions
//!
//! Hover acknowledgements (buttons, service-card icons, value-card
//! numbers), the magnetic pull on primary buttons, and the fixed
//! scroll-progress indicator created at mount.

use crate::constants::{BUTTON_HOVER_SCALE, MAGNETIC_PULL};
use crate::dom::{Element, NodeId};
use crate::eventing::{Effect, UiEvent};
use crate::features::{Component, PageContext};
use crate::motion::{Easing, Tween, TweenProps};

/// Hover and pointer interaction controller
#[derive(Debug, Default)]
pub struct InteractionsController {
    progress_bar: Option<NodeId>,
}

impl InteractionsController {
    pub fn new() -> Self {
        Self::default()
    }

    fn on_enter(&self, target: NodeId, ctx: &mut PageContext<'_>) {
        if ctx.doc.get(target).has_class("btn") {
            ctx.motion.animate_to(
                ctx.doc,
                &[target],
                Tween::to(TweenProps::new().scale(BUTTON_HOVER_SCALE))
                    .duration(0.3)
                    .ease(Easing::PowerOut(2)),
                None,
            );
        }

        if ctx.doc.get(target).has_class("service-card") {
            if let Some(icon) = ctx.doc.descendant_with_class(target, "service-card__icon") {
                ctx.motion.animate_to(
                    ctx.doc,
                    &[icon],
                    Tween::to(TweenProps::new().scale(1.1).rotate(5.0))
                        .duration(0.4)
                        .ease(Easing::PowerOut(2)),
                    None,
                );
            }
        }

        if ctx.doc.get(target).has_class("value-card") {
            if let Some(number) = ctx.doc.descendant_with_class(target, "value-card__number") {
                ctx.motion.animate_to(
                    ctx.doc,
                    &[number],
                    Tween::to(TweenProps::new().scale(1.2).opacity(0.2))
                        .duration(0.4)
                        .ease(Easing::PowerOut(2)),
                    None,
                );
            }
        }
    }

    fn on_leave(&self, target: NodeId, ctx: &mut PageContext<'_>) {
        if ctx.doc.get(target).has_class("btn") {
            ctx.motion.animate_to(
                ctx.doc,
                &[target],
                Tween::to(TweenProps::new().scale(1.0))
                    .duration(0.3)
                    .ease(Easing::PowerOut(2)),
                None,
            );
        }

        // Magnetic buttons snap back elastically
        if ctx.doc.get(target).has_class("btn--primary") {
            ctx.motion.animate_to(
                ctx.doc,
                &[target],
                Tween::to(TweenProps::new().x(0.0).y(0.0))
                    .duration(0.5)
                    .ease(Easing::ElasticOut(1.0, 0.5)),
                None,
            );
        }

        if ctx.doc.get(target).has_class("service-card") {
            if let Some(icon) = ctx.doc.descendant_with_class(target, "service-card__icon") {
                ctx.motion.animate_to(
                    ctx.doc,
                    &[icon],
                    Tween::to(TweenProps::new().scale(1.0).rotate(0.0))
                        .duration(0.4)
                        .ease(Easing::PowerOut(2)),
                    None,
                );
            }
        }

        if ctx.doc.get(target).has_class("value-card") {
            if let Some(number) = ctx.doc.descendant_with_class(target, "value-card__number") {
                ctx.motion.animate_to(
                    ctx.doc,
                    &[number],
                    Tween::to(TweenProps::new().scale(1.0).opacity(0.1))
                        .duration(0.4)
                        .ease(Easing::PowerOut(2)),
                    None,
                );
            }
        }
    }

    /// Pull a primary button toward the pointer
    fn on_move(&self, target: NodeId, x: f32, y: f32, ctx: &mut PageContext<'_>) {
        if !ctx.doc.get(target).has_class("btn--primary") {
            return;
        }
        let (center_x, center_y) = ctx.doc.get(target).center();
        ctx.motion.animate_to(
            ctx.doc,
            &[target],
            Tween::to(
                TweenProps::new()
                    .x((x - center_x) * MAGNETIC_PULL)
                    .y((y - center_y) * MAGNETIC_PULL),
            )
            .duration(0.3)
            .ease(Easing::PowerOut(2)),
            None,
        );
    }

    fn on_scroll(&self, y: f32, ctx: &mut PageContext<'_>) {
        let Some(bar) = self.progress_bar else {
            return;
        };
        let track = ctx.doc.scroll_height - ctx.doc.viewport.height;
        let progress = if track > 0.0 { (y / track).clamp(0.0, 1.0) } else { 0.0 };
        ctx.doc
            .get_mut(bar)
            .set_style("transform", format!("scaleX({progress})"));
    }
}

impl Component for InteractionsController {
    fn name(&self) -> &'static str {
        "interactions"
    }

    fn mount(&mut self, ctx: &mut PageContext<'_>) -> Vec<Effect> {
        // The progress indicator is created by the runtime, not the markup
        if let Some(body) = ctx.doc.body() {
            let bar = ctx.doc.append(
                body,
                Element::new("div").with_class("scroll-progress"),
            );
            ctx.doc.get_mut(bar).set_style("transform", "scaleX(0)");
            self.progress_bar = Some(bar);
        }
        Vec::new()
    }

    fn on_event(&mut self, event: &UiEvent, ctx: &mut PageContext<'_>) -> Vec<Effect> {
        match event {
            UiEvent::PointerEnter { target } => self.on_enter(*target, ctx),
            UiEvent::PointerLeave { target } => self.on_leave(*target, ctx),
            UiEvent::PointerMove { target, x, y } => self.on_move(*target, *x, *y, ctx),
            UiEvent::Scroll { y } => self.on_scroll(*y, ctx),
            _ => {}
        }
        Vec::new()
    }
}
