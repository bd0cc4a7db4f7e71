//! Scroll Reveals
//!
//! The declarative scroll-gated entrance set for the services, about,
//! contact and footer sections. Each entry is registered with the scroll
//! watcher at mount (placing its targets in the hidden state) and
//! replayed against every scroll event with play-on-enter /
//! reverse-on-leave-back semantics.

use crate::dom::NodeId;
use crate::eventing::{Effect, UiEvent};
use crate::features::{Component, PageContext};
use crate::motion::{Easing, ScrollReveal, ScrollTrigger, ScrollWatcher, Tween, TweenProps};

/// Scroll reveal controller
#[derive(Debug, Default)]
pub struct RevealController {
    watcher: ScrollWatcher,
}

impl RevealController {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(
        &mut self,
        ctx: &mut PageContext<'_>,
        trigger: Option<NodeId>,
        start_fraction: f32,
        targets: Vec<NodeId>,
        tween: Tween,
    ) {
        let Some(trigger) = trigger else {
            return;
        };
        if targets.is_empty() {
            return;
        }
        self.watcher.add(
            ctx.doc,
            ctx.motion,
            ScrollReveal::new(ScrollTrigger::new(trigger, start_fraction), targets, tween),
        );
    }

    fn section(ctx: &PageContext<'_>, class: &str) -> Option<NodeId> {
        ctx.doc.elements_with_class(class).first().copied()
    }

    fn within(ctx: &PageContext<'_>, scope: Option<NodeId>, class: &str) -> Vec<NodeId> {
        scope
            .map(|node| ctx.doc.descendants_with_class(node, class))
            .unwrap_or_default()
    }

    fn first_within(ctx: &PageContext<'_>, scope: Option<NodeId>, class: &str) -> Option<NodeId> {
        Self::within(ctx, scope, class).first().copied()
    }

    /// Spans inside a section's title element
    fn title_spans(ctx: &PageContext<'_>, scope: Option<NodeId>) -> (Option<NodeId>, Vec<NodeId>) {
        let title = Self::first_within(ctx, scope, "section-title");
        let spans = title
            .map(|t| {
                ctx.doc
                    .descendants(t)
                    .into_iter()
                    .filter(|&id| ctx.doc.get(id).tag == "span")
                    .collect()
            })
            .unwrap_or_default();
        (title, spans)
    }

    fn register_services(&mut self, ctx: &mut PageContext<'_>) {
        let services = Self::section(ctx, "services");
        let tag = Self::first_within(ctx, services, "section-tag");
        self.add(
            ctx,
            services,
            0.8,
            tag.into_iter().collect(),
            Tween::to(TweenProps::new().opacity(0.0).y(30.0))
                .duration(0.6)
                .ease(Easing::PowerOut(3)),
        );

        let (title, spans) = Self::title_spans(ctx, services);
        self.add(
            ctx,
            title,
            0.8,
            spans,
            Tween::to(TweenProps::new().opacity(0.0).y(60.0).rotate_x(-30.0))
                .duration(0.8)
                .stagger(0.15)
                .ease(Easing::PowerOut(3)),
        );

        let description = Self::first_within(ctx, services, "section-description");
        self.add(
            ctx,
            description,
            0.85,
            description.into_iter().collect(),
            Tween::to(TweenProps::new().opacity(0.0).y(40.0))
                .duration(0.6)
                .ease(Easing::PowerOut(3)),
        );

        // Cards enter from alternating directions
        for (index, card) in ctx.doc.elements_with_class("service-card").into_iter().enumerate() {
            let direction = if index % 2 == 0 { -1.0 } else { 1.0 };
            self.add(
                ctx,
                Some(card),
                0.85,
                vec![card],
                Tween::to(
                    TweenProps::new()
                        .opacity(0.0)
                        .x(direction * 80.0)
                        .rotate_y(direction * 10.0),
                )
                .duration(0.8)
                .delay((index % 2) as f32 * 0.15)
                .ease(Easing::PowerOut(3)),
            );
        }
    }

    fn register_about(&mut self, ctx: &mut PageContext<'_>) {
        let about = Self::section(ctx, "about");
        let tag = Self::first_within(ctx, about, "section-tag");
        self.add(
            ctx,
            about,
            0.7,
            tag.into_iter().collect(),
            Tween::to(TweenProps::new().opacity(0.0).x(-50.0))
                .duration(0.6)
                .ease(Easing::PowerOut(3)),
        );

        let (title, spans) = Self::title_spans(ctx, about);
        self.add(
            ctx,
            title,
            0.75,
            spans,
            Tween::to(TweenProps::new().opacity(0.0).x(-80.0))
                .duration(0.8)
                .stagger(0.15)
                .ease(Easing::PowerOut(3)),
        );

        let text = Self::first_within(ctx, about, "about__text");
        let paragraphs: Vec<NodeId> = text
            .map(|t| {
                ctx.doc
                    .descendants(t)
                    .into_iter()
                    .filter(|&id| ctx.doc.get(id).tag == "p")
                    .collect()
            })
            .unwrap_or_default();
        self.add(
            ctx,
            text,
            0.8,
            paragraphs,
            Tween::to(TweenProps::new().opacity(0.0).y(40.0))
                .duration(0.7)
                .stagger(0.2)
                .ease(Easing::PowerOut(3)),
        );

        for (index, card) in ctx.doc.elements_with_class("value-card").into_iter().enumerate() {
            self.add(
                ctx,
                Some(card),
                0.85,
                vec![card],
                Tween::to(TweenProps::new().opacity(0.0).x(100.0).rotate_y(-15.0))
                    .duration(0.8)
                    .delay(index as f32 * 0.15)
                    .ease(Easing::PowerOut(3)),
            );

            let number = ctx.doc.descendant_with_class(card, "value-card__number");
            self.add(
                ctx,
                Some(card),
                0.85,
                number.into_iter().collect(),
                Tween::to(TweenProps::new().opacity(0.0).scale(0.0))
                    .duration(0.6)
                    .delay(index as f32 * 0.15 + 0.3)
                    .ease(Easing::BackOut(1.7)),
            );
        }

        let lines = Self::within(ctx, about, "about__line");
        self.add(
            ctx,
            about,
            0.8,
            lines,
            Tween::to(TweenProps::new().scale_y(0.0))
                .duration(1.5)
                .stagger(0.2)
                .ease(Easing::PowerOut(3)),
        );
    }

    fn register_contact(&mut self, ctx: &mut PageContext<'_>) {
        let contact = Self::section(ctx, "contact");
        let info = Self::first_within(ctx, contact, "contact__info");
        let tag = Self::first_within(ctx, info, "section-tag");
        self.add(
            ctx,
            contact,
            0.7,
            tag.into_iter().collect(),
            Tween::to(TweenProps::new().opacity(0.0).y(30.0))
                .duration(0.6)
                .ease(Easing::PowerOut(3)),
        );

        let (title, spans) = Self::title_spans(ctx, contact);
        self.add(
            ctx,
            title,
            0.75,
            spans,
            Tween::to(TweenProps::new().opacity(0.0).y(60.0).rotate_x(-30.0))
                .duration(0.8)
                .stagger(0.15)
                .ease(Easing::PowerOut(3)),
        );

        let description = Self::first_within(ctx, contact, "contact__description");
        self.add(
            ctx,
            description,
            0.85,
            description.into_iter().collect(),
            Tween::to(TweenProps::new().opacity(0.0).y(30.0))
                .duration(0.6)
                .ease(Easing::PowerOut(3)),
        );

        let details = Self::first_within(ctx, contact, "contact__details");
        let detail_items = Self::within(ctx, contact, "contact__detail");
        self.add(
            ctx,
            details,
            0.85,
            detail_items,
            Tween::to(TweenProps::new().opacity(0.0).x(-30.0))
                .duration(0.6)
                .ease(Easing::PowerOut(3)),
        );

        let wrapper = Self::first_within(ctx, contact, "contact__form-wrapper");
        self.add(
            ctx,
            wrapper,
            0.8,
            wrapper.into_iter().collect(),
            Tween::to(TweenProps::new().opacity(0.0).x(100.0).rotate_y(-10.0))
                .duration(1.0)
                .ease(Easing::PowerOut(3)),
        );

        let form = Self::first_within(ctx, contact, "contact-form");
        let groups = Self::within(ctx, contact, "form-group");
        self.add(
            ctx,
            form,
            0.8,
            groups,
            Tween::to(TweenProps::new().opacity(0.0).y(30.0))
                .duration(0.6)
                .stagger(0.15)
                .delay(0.3)
                .ease(Easing::PowerOut(3)),
        );

        let button = Self::first_within(ctx, form, "btn");
        self.add(
            ctx,
            form,
            0.75,
            button.into_iter().collect(),
            Tween::to(TweenProps::new().opacity(0.0).y(30.0).scale(0.9))
                .duration(0.6)
                .delay(0.7)
                .ease(Easing::BackOut(1.7)),
        );
    }

    fn register_footer(&mut self, ctx: &mut PageContext<'_>) {
        let footer = Self::section(ctx, "footer");
        let grid = Self::first_within(ctx, footer, "footer__grid");
        let columns: Vec<NodeId> = grid.map(|g| ctx.doc.children(g).to_vec()).unwrap_or_default();
        self.add(
            ctx,
            footer,
            0.9,
            columns,
            Tween::to(TweenProps::new().opacity(0.0).y(40.0))
                .duration(0.8)
                .stagger(0.15)
                .ease(Easing::PowerOut(3)),
        );
    }
}

impl Component for RevealController {
    fn name(&self) -> &'static str {
        "reveal"
    }

    fn mount(&mut self, ctx: &mut PageContext<'_>) -> Vec<Effect> {
        self.register_services(ctx);
        self.register_about(ctx);
        self.register_contact(ctx);
        self.register_footer(ctx);
        tracing::debug!(reveals = self.watcher.len(), "scroll reveals registered");

        // sections already inside the viewport reveal immediately
        let y = ctx.doc.viewport.scroll_y;
        self.watcher.on_scroll(ctx.doc, ctx.motion, y);
        Vec::new()
    }

    fn on_event(&mut self, event: &UiEvent, ctx: &mut PageContext<'_>) -> Vec<Effect> {
        if let UiEvent::Scroll { y } = event {
            self.watcher.on_scroll(ctx.doc, ctx.motion, *y);
        }
        Vec::new()
    }
}
