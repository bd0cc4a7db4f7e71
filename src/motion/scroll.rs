//! Scroll Gating
//!
//! Defers the start of an animation until its trigger element crosses a
//! viewport threshold, with play-on-enter / reverse-on-leave-back
//! semantics. Geometry is the trigger's layout offset against the
//! current scroll position.

use crate::dom::{Document, NodeId};
use crate::motion::{MotionEngine, Tween};

/// When and how a reveal fires
#[derive(Clone, Copy, Debug)]
pub struct ScrollTrigger {
    /// Element whose position gates the animation
    pub trigger: NodeId,
    /// Fires once `offset_top - scroll_y <= viewport_height * start_fraction`
    pub start_fraction: f32,
    /// Reverse to the hidden state when the trigger rises back out
    pub reverse_on_leave: bool,
}

impl ScrollTrigger {
    pub fn new(trigger: NodeId, start_fraction: f32) -> Self {
        Self {
            trigger,
            start_fraction,
            reverse_on_leave: true,
        }
    }

    fn entered(&self, doc: &Document, scroll_y: f32) -> bool {
        let top = doc.get(self.trigger).offset_top;
        top - scroll_y <= doc.viewport.height * self.start_fraction
    }
}

/// A gated entrance: targets sit at the tween's property values until the
/// trigger enters, then animate back to their natural state
#[derive(Clone, Debug)]
pub struct ScrollReveal {
    pub trigger: ScrollTrigger,
    pub targets: Vec<NodeId>,
    pub tween: Tween,
    played: bool,
}

impl ScrollReveal {
    pub fn new(trigger: ScrollTrigger, targets: Vec<NodeId>, tween: Tween) -> Self {
        Self {
            trigger,
            targets,
            tween,
            played: false,
        }
    }
}

/// Owns every registered reveal and replays them against scroll changes
#[derive(Debug, Default)]
pub struct ScrollWatcher {
    reveals: Vec<ScrollReveal>,
}

impl ScrollWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reveal, immediately placing its targets in the hidden
    /// state (the engine renders "from" states up front)
    pub fn add(&mut self, doc: &mut Document, motion: &dyn MotionEngine, reveal: ScrollReveal) {
        motion.set(doc, &reveal.targets, &reveal.tween.props);
        self.reveals.push(reveal);
    }

    pub fn len(&self) -> usize {
        self.reveals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reveals.is_empty()
    }

    /// Re-evaluate every reveal against a scroll position
    pub fn on_scroll(&mut self, doc: &mut Document, motion: &dyn MotionEngine, scroll_y: f32) {
        for reveal in &mut self.reveals {
            let entered = reveal.trigger.entered(doc, scroll_y);
            if entered && !reveal.played {
                motion.animate_from(doc, &reveal.targets, reveal.tween.clone());
                reveal.played = true;
            } else if !entered && reveal.played && reveal.trigger.reverse_on_leave {
                motion.set(doc, &reveal.targets, &reveal.tween.props);
                reveal.played = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;
    use crate::motion::{Easing, ImmediateEngine, TweenProps};

    fn page() -> (Document, NodeId, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let section = doc.append(root, Element::new("section").with_offset(2000.0));
        let card = doc.append(section, Element::new("div").with_offset(2050.0));
        (doc, section, card)
    }

    fn reveal(section: NodeId, card: NodeId) -> ScrollReveal {
        ScrollReveal::new(
            ScrollTrigger::new(section, 0.85),
            vec![card],
            Tween::to(TweenProps::new().opacity(0.0).x(-80.0))
                .duration(0.8)
                .ease(Easing::PowerOut(3)),
        )
    }

    #[test]
    fn test_reveal_waits_for_threshold() {
        let (mut doc, section, card) = page();
        let engine = ImmediateEngine;
        let mut watcher = ScrollWatcher::new();
        watcher.add(&mut doc, &engine, reveal(section, card));

        // hidden up front
        assert_eq!(doc.get(card).style("opacity"), Some("0"));

        // viewport height 900, start 85% => trigger at 2000 - 765 = 1235
        watcher.on_scroll(&mut doc, &engine, 1000.0);
        assert_eq!(doc.get(card).style("opacity"), Some("0"));

        watcher.on_scroll(&mut doc, &engine, 1300.0);
        assert_eq!(doc.get(card).style("opacity"), None);
    }

    #[test]
    fn test_reveal_reverses_on_leave_back() {
        let (mut doc, section, card) = page();
        let engine = ImmediateEngine;
        let mut watcher = ScrollWatcher::new();
        watcher.add(&mut doc, &engine, reveal(section, card));

        watcher.on_scroll(&mut doc, &engine, 1300.0);
        assert_eq!(doc.get(card).style("opacity"), None);

        watcher.on_scroll(&mut doc, &engine, 0.0);
        assert_eq!(doc.get(card).style("opacity"), Some("0"));
    }

    #[test]
    fn test_reveal_plays_once_while_inside() {
        let (mut doc, section, card) = page();
        let engine = ImmediateEngine;
        let mut watcher = ScrollWatcher::new();
        watcher.add(&mut doc, &engine, reveal(section, card));

        watcher.on_scroll(&mut doc, &engine, 1300.0);
        doc.get_mut(card).set_style("opacity", "0.7");
        // further scrolling inside the section must not retrigger
        watcher.on_scroll(&mut doc, &engine, 1400.0);
        assert_eq!(doc.get(card).style("opacity"), Some("0.7"));
    }
}
