//! Hero
//!
//! The page-load choreography and the hero section's ambient motion:
//! entrance timeline over nav/badge/title/description/actions/code
//! window/shapes/scroll cue, glow pulse loops, per-shape drift loops,
//! pointer parallax with reset, and the code-window line highlight loop.

use crate::constants::ENTRANCE_DELAY;
use crate::dom::NodeId;
use crate::eventing::{Effect, UiEvent};
use crate::features::{Component, PageContext};
use crate::motion::{Easing, Position, Timeline, Tween, TweenProps};

/// Hero and entrance controller
#[derive(Debug, Default)]
pub struct HeroController {
    hero: Option<NodeId>,
    nav: Option<NodeId>,
    shapes: Vec<NodeId>,
    code_window: Option<NodeId>,
}

impl HeroController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide everything the entrance reveals, then play the sequence
    fn play_entrance(&self, ctx: &mut PageContext<'_>) {
        let badge = ctx.doc.elements_with_class("hero__badge");
        let title_lines = ctx.doc.elements_with_class("title-line");
        let description = ctx.doc.elements_with_class("hero__description");
        let actions = ctx.doc.elements_with_class("hero__actions");
        let code_window = ctx.doc.elements_with_class("code-window");
        let scroll_cue = ctx.doc.elements_with_class("hero__scroll");
        let nav: Vec<NodeId> = self.nav.into_iter().collect();
        let shapes = self.shapes.clone();

        // Initial hidden states
        ctx.motion.set(ctx.doc, &badge, &TweenProps::new().opacity(0.0).y(30.0));
        ctx.motion.set(
            ctx.doc,
            &title_lines,
            &TweenProps::new().opacity(0.0).y(80.0).rotate_x(-40.0),
        );
        ctx.motion.set(ctx.doc, &description, &TweenProps::new().opacity(0.0).y(40.0));
        ctx.motion.set(ctx.doc, &actions, &TweenProps::new().opacity(0.0).y(30.0));
        ctx.motion.set(
            ctx.doc,
            &code_window,
            &TweenProps::new().opacity(0.0).scale(0.9).rotate_y(-15.0),
        );
        ctx.motion.set(ctx.doc, &scroll_cue, &TweenProps::new().opacity(0.0));
        ctx.motion.set(ctx.doc, &nav, &TweenProps::new().opacity(0.0).y(-20.0));
        ctx.motion.set(ctx.doc, &shapes, &TweenProps::new().opacity(0.0).scale(0.0));

        let timeline = Timeline::new()
            .with_delay(ENTRANCE_DELAY)
            .to(
                nav,
                Tween::to(TweenProps::new().opacity(1.0).y(0.0))
                    .duration(0.8)
                    .ease(Easing::PowerOut(3)),
                Position::After,
            )
            .to(
                badge,
                Tween::to(TweenProps::new().opacity(1.0).y(0.0))
                    .duration(0.6)
                    .ease(Easing::PowerOut(3)),
                Position::Overlap(0.4),
            )
            .to(
                title_lines,
                Tween::to(TweenProps::new().opacity(1.0).y(0.0).rotate_x(0.0))
                    .duration(0.8)
                    .stagger(0.15)
                    .ease(Easing::PowerOut(3)),
                Position::Overlap(0.3),
            )
            .to(
                description,
                Tween::to(TweenProps::new().opacity(1.0).y(0.0))
                    .duration(0.6)
                    .ease(Easing::PowerOut(3)),
                Position::Overlap(0.4),
            )
            .to(
                actions,
                Tween::to(TweenProps::new().opacity(1.0).y(0.0))
                    .duration(0.6)
                    .ease(Easing::PowerOut(3)),
                Position::Overlap(0.3),
            )
            .to(
                code_window,
                Tween::to(TweenProps::new().opacity(1.0).scale(1.0).rotate_y(0.0))
                    .duration(1.0)
                    .ease(Easing::PowerOut(3)),
                Position::Overlap(0.6),
            )
            .to(
                shapes,
                Tween::to(TweenProps::new().opacity(0.6).scale(1.0))
                    .duration(0.8)
                    .stagger(0.1)
                    .ease(Easing::BackOut(1.7)),
                Position::Overlap(0.8),
            )
            .to(
                scroll_cue,
                Tween::to(TweenProps::new().opacity(1.0))
                    .duration(0.6)
                    .ease(Easing::PowerOut(2)),
                Position::Overlap(0.4),
            );

        ctx.motion.play_timeline(ctx.doc, timeline);
    }

    /// Glow breathing and per-shape drift, all endless yoyo loops
    fn start_ambient_loops(&self, ctx: &mut PageContext<'_>) {
        if let Some(glow) = ctx.doc.elements_with_class("hero__glow--1").first().copied() {
            ctx.motion.animate_to(
                ctx.doc,
                &[glow],
                Tween::to(TweenProps::new().scale(1.2).opacity(0.3))
                    .duration(4.0)
                    .repeat(-1)
                    .yoyo()
                    .ease(Easing::SineInOut),
                None,
            );
        }
        if let Some(glow) = ctx.doc.elements_with_class("hero__glow--2").first().copied() {
            ctx.motion.animate_to(
                ctx.doc,
                &[glow],
                Tween::to(TweenProps::new().scale(1.3).opacity(0.15))
                    .duration(5.0)
                    .repeat(-1)
                    .yoyo()
                    .delay(1.0)
                    .ease(Easing::SineInOut),
                None,
            );
        }

        for (index, &shape) in self.shapes.iter().enumerate() {
            // per-shape drift amplitudes in place of the engine's
            // random(-30, 30) sampling
            let sway = 12.0 + (index as f32 % 3.0) * 6.0;
            let drift = 18.0 + (index as f32 % 4.0) * 4.0;
            ctx.motion.animate_to(
                ctx.doc,
                &[shape],
                Tween::to(
                    TweenProps::new()
                        .y(if index % 2 == 0 { drift } else { -drift })
                        .x(if index % 2 == 0 { -sway } else { sway })
                        .rotate(if index % 2 == 0 { 9.0 } else { -9.0 }),
                )
                .duration(3.0 + (index as f32 % 3.0))
                .repeat(-1)
                .yoyo()
                .delay(index as f32 * 0.2)
                .ease(Easing::SineInOut),
                None,
            );
        }
    }

    /// Code line highlight sweep plus the window loop
    fn start_code_window_loop(&self, ctx: &mut PageContext<'_>) {
        let Some(window) = self.code_window else {
            return;
        };
        let lines = ctx.doc.descendants_with_class(window, "code-line");
        if lines.is_empty() {
            return;
        }

        ctx.motion.set(ctx.doc, &lines, &TweenProps::new().opacity(0.3));

        let mut highlight = Timeline::new().with_repeat(-1, 2.0);
        for (index, &line) in lines.iter().enumerate() {
            let at = index as f32 * 0.15;
            highlight = highlight
                .to(
                    vec![line],
                    Tween::to(TweenProps::new().opacity(1.0)).duration(0.1),
                    Position::At(at),
                )
                .to(
                    vec![line],
                    Tween::to(TweenProps::new().opacity(0.3))
                        .duration(0.3)
                        .ease(Easing::PowerOut(2)),
                    Position::At(at + 0.8),
                );
        }
        ctx.motion.play_timeline(ctx.doc, highlight);
    }

    fn on_pointer_move(&self, x: f32, y: f32, ctx: &mut PageContext<'_>) {
        let x_percent = (x / ctx.doc.viewport.width - 0.5) * 2.0;
        let y_percent = (y / ctx.doc.viewport.height - 0.5) * 2.0;

        for (index, &shape) in self.shapes.iter().enumerate() {
            let speed = (index + 1) as f32 * 10.0;
            ctx.motion.animate_to(
                ctx.doc,
                &[shape],
                Tween::to(TweenProps::new().x(x_percent * speed).y(y_percent * speed))
                    .duration(0.5)
                    .ease(Easing::PowerOut(2)),
                None,
            );
        }

        if let Some(window) = self.code_window {
            ctx.motion.animate_to(
                ctx.doc,
                &[window],
                Tween::to(TweenProps::new().rotate_y(x_percent * 5.0).rotate_x(-y_percent * 5.0))
                    .duration(0.5)
                    .ease(Easing::PowerOut(2)),
                None,
            );
        }
    }

    fn on_pointer_leave(&self, ctx: &mut PageContext<'_>) {
        ctx.motion.animate_to(
            ctx.doc,
            &self.shapes,
            Tween::to(TweenProps::new().x(0.0).y(0.0))
                .duration(0.8)
                .ease(Easing::PowerOut(2)),
            None,
        );
        if let Some(window) = self.code_window {
            ctx.motion.animate_to(
                ctx.doc,
                &[window],
                Tween::to(TweenProps::new().rotate_y(0.0).rotate_x(0.0))
                    .duration(0.8)
                    .ease(Easing::PowerOut(2)),
                None,
            );
        }
    }
}

impl Component for HeroController {
    fn name(&self) -> &'static str {
        "hero"
    }

    fn mount(&mut self, ctx: &mut PageContext<'_>) -> Vec<Effect> {
        self.hero = ctx.doc.elements_with_class("hero").first().copied();
        self.nav = ctx.doc.elements_with_class("nav").first().copied();
        self.shapes = ctx.doc.elements_with_class("floating-shape");
        self.code_window = ctx.doc.elements_with_class("code-window").first().copied();

        self.play_entrance(ctx);
        self.start_ambient_loops(ctx);
        self.start_code_window_loop(ctx);
        Vec::new()
    }

    fn on_event(&mut self, event: &UiEvent, ctx: &mut PageContext<'_>) -> Vec<Effect> {
        let Some(hero) = self.hero else {
            return Vec::new();
        };

        match event {
            UiEvent::PointerMove { target, x, y } if ctx.doc.is_within(*target, hero) => {
                self.on_pointer_move(*x, *y, ctx);
            }
            UiEvent::PointerLeave { target } if *target == hero => {
                self.on_pointer_leave(ctx);
            }
            _ => {}
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, Element};
    use crate::domain::SiteConfig;
    use crate::motion::{ImmediateEngine, RecordKind, RecordingEngine};
    use crate::services::storage::MemoryStorage;
    use crate::state::PrefsState;

    fn page() -> Document {
        let mut doc = Document::new();
        let root = doc.root();
        let body = doc.append(root, Element::new("body"));
        doc.append(body, Element::new("nav").with_class("nav"));
        let hero = doc.append(body, Element::new("section").with_class("hero"));
        doc.append(hero, Element::new("div").with_class("hero__badge"));
        for _ in 0..3 {
            doc.append(hero, Element::new("span").with_class("title-line"));
        }
        doc.append(hero, Element::new("p").with_class("hero__description"));
        doc.append(hero, Element::new("div").with_class("hero__actions"));
        let window = doc.append(hero, Element::new("div").with_class("code-window"));
        for _ in 0..4 {
            doc.append(window, Element::new("span").with_class("code-line"));
        }
        doc.append(hero, Element::new("div").with_class("hero__scroll"));
        for _ in 0..3 {
            doc.append(hero, Element::new("div").with_class("floating-shape"));
        }
        doc.append(hero, Element::new("div").with_class("hero__glow--1"));
        doc.append(hero, Element::new("div").with_class("hero__glow--2"));
        doc
    }

    #[test]
    fn test_entrance_lands_everything_visible() {
        let mut doc = page();
        let mut storage = MemoryStorage::new();
        let mut prefs = PrefsState::default();
        let config = SiteConfig::default();
        let mut ctx = PageContext {
            doc: &mut doc,
            storage: &mut storage,
            motion: &ImmediateEngine,
            prefs: &mut prefs,
            config: &config,
        };
        HeroController::new().mount(&mut ctx);

        let badge = doc.elements_with_class("hero__badge")[0];
        assert_eq!(doc.get(badge).style("opacity"), Some("1"));
        let line = doc.elements_with_class("title-line")[0];
        assert_eq!(doc.get(line).style("rotate-x"), Some("0"));
        // shapes settle at their designed 0.6 opacity
        let shape = doc.elements_with_class("floating-shape")[0];
        assert_eq!(doc.get(shape).style("opacity"), Some("0.6"));
    }

    #[test]
    fn test_parallax_moves_shapes_by_depth() {
        let mut doc = page();
        let hero = doc.elements_with_class("hero")[0];
        let mut storage = MemoryStorage::new();
        let mut prefs = PrefsState::default();
        let config = SiteConfig::default();
        let engine = RecordingEngine::new();
        let mut controller = HeroController::new();
        let mut ctx = PageContext {
            doc: &mut doc,
            storage: &mut storage,
            motion: &engine,
            prefs: &mut prefs,
            config: &config,
        };
        controller.mount(&mut ctx);
        engine.clear();

        // pointer at the right edge, vertical center
        let width = ctx.doc.viewport.width;
        let height = ctx.doc.viewport.height;
        controller.on_event(&UiEvent::pointer_move(hero, width, height / 2.0), &mut ctx);

        let shapes = ctx.doc.elements_with_class("floating-shape");
        let first = &engine.records_for(shapes[0])[0];
        let second = &engine.records_for(shapes[1])[0];
        let x1 = first.tween.as_ref().and_then(|t| t.props.x).expect("x");
        let x2 = second.tween.as_ref().and_then(|t| t.props.x).expect("x");
        assert!((x1 - 10.0).abs() < 0.01);
        assert!((x2 - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_pointer_leave_resets_positions() {
        let mut doc = page();
        let hero = doc.elements_with_class("hero")[0];
        let mut storage = MemoryStorage::new();
        let mut prefs = PrefsState::default();
        let config = SiteConfig::default();
        let engine = RecordingEngine::new();
        let mut controller = HeroController::new();
        let mut ctx = PageContext {
            doc: &mut doc,
            storage: &mut storage,
            motion: &engine,
            prefs: &mut prefs,
            config: &config,
        };
        controller.mount(&mut ctx);
        engine.clear();

        controller.on_event(&UiEvent::PointerLeave { target: hero }, &mut ctx);

        let shapes = ctx.doc.elements_with_class("floating-shape");
        let record = &engine.records_for(shapes[0])[0];
        assert_eq!(record.kind, RecordKind::To);
        let tween = record.tween.as_ref().expect("tween");
        assert_eq!(tween.props.x, Some(0.0));
        assert_eq!(tween.props.y, Some(0.0));
    }

    #[test]
    fn test_missing_hero_is_inert() {
        let mut doc = Document::new();
        let root = doc.root();
        let stray = doc.append(root, Element::new("div"));
        let mut storage = MemoryStorage::new();
        let mut prefs = PrefsState::default();
        let config = SiteConfig::default();
        let mut controller = HeroController::new();
        let mut ctx = PageContext {
            doc: &mut doc,
            storage: &mut storage,
            motion: &ImmediateEngine,
            prefs: &mut prefs,
            config: &config,
        };
        controller.mount(&mut ctx);
        let effects = controller.on_event(&UiEvent::pointer_move(stray, 10.0, 10.0), &mut ctx);
        assert!(effects.is_empty());
    }
}
