//! Immediate Engine
//!
//! Headless engine: every tween lands on its end state synchronously and
//! completion callbacks run in call order. This preserves the one
//! guarantee content mutation relies on (the mutation happens only after
//! the outgoing leg "finishes") in degenerate form, and keeps the whole
//! runtime observable without a frame scheduler.

use crate::dom::{Document, NodeId};
use crate::motion::{CompletionFn, MotionEngine, Timeline, Tween, TweenProps};

/// Applies end states instantly
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateEngine;

impl MotionEngine for ImmediateEngine {
    fn set(&self, doc: &mut Document, targets: &[NodeId], props: &TweenProps) {
        for &target in targets {
            props.apply_to(doc.get_mut(target));
        }
    }

    fn animate_to(
        &self,
        doc: &mut Document,
        targets: &[NodeId],
        tween: Tween,
        on_complete: Option<CompletionFn>,
    ) {
        // A yoyo with an odd return count (the toggle pulse) settles back
        // where it started, so it leaves no style residue.
        if !tween.settles_at_start() {
            for &target in targets {
                tween.props.apply_to(doc.get_mut(target));
            }
        }
        if let Some(callback) = on_complete {
            callback(doc, self);
        }
    }

    fn animate_from_to(
        &self,
        doc: &mut Document,
        targets: &[NodeId],
        _from: &TweenProps,
        tween: Tween,
    ) {
        for &target in targets {
            tween.props.apply_to(doc.get_mut(target));
        }
    }

    fn animate_from(&self, doc: &mut Document, targets: &[NodeId], tween: Tween) {
        // gsap.from: end state is the element's natural styling
        for &target in targets {
            tween.props.clear_from(doc.get_mut(target));
        }
    }

    fn play_timeline(&self, doc: &mut Document, timeline: Timeline) {
        for entry in timeline.entries() {
            for &target in &entry.targets {
                entry.tween.props.apply_to(doc.get_mut(target));
            }
        }
    }
}
