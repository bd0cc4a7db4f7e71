//! Motion - Animation Capability
//!
//! The tweening engine is an external collaborator: given targets and a
//! property set, animate toward it over time with an easing curve,
//! optionally gated by scroll position. This module carries the
//! configuration types (properties, durations, easings, timelines,
//! scroll triggers) and the [`MotionEngine`] seam. The shipped
//! implementations are headless: [`ImmediateEngine`] applies end states
//! synchronously and runs completion callbacks in order, and
//! [`RecordingEngine`] additionally logs every call for assertions.

pub mod immediate;
pub mod recorder;
pub mod scroll;
pub mod timeline;
pub mod tween;

pub use immediate::ImmediateEngine;
pub use recorder::{RecordKind, RecordingEngine, TweenRecord};
pub use scroll::{ScrollReveal, ScrollTrigger, ScrollWatcher};
pub use timeline::{Position, Timeline};
pub use tween::{Easing, Tween, TweenProps};

use crate::dom::{Document, NodeId};

/// Callback run once a tween's content is allowed to mutate (i.e. after
/// the outgoing leg completes). Receives the engine back so chained
/// follow-up tweens can be started from inside the callback.
pub type CompletionFn = Box<dyn FnOnce(&mut Document, &dyn MotionEngine) + Send>;

/// Opaque animation capability
pub trait MotionEngine: Send + Sync {
    /// Jump targets to the given property values without interpolation
    fn set(&self, doc: &mut Document, targets: &[NodeId], props: &TweenProps);

    /// Animate targets toward the tween's property values
    fn animate_to(
        &self,
        doc: &mut Document,
        targets: &[NodeId],
        tween: Tween,
        on_complete: Option<CompletionFn>,
    );

    /// Place targets at `from`, then animate toward the tween's values
    fn animate_from_to(&self, doc: &mut Document, targets: &[NodeId], from: &TweenProps, tween: Tween);

    /// Animate targets from the tween's property values back to their
    /// natural (style-free) state
    fn animate_from(&self, doc: &mut Document, targets: &[NodeId], tween: Tween);

    /// Play a sequenced timeline
    fn play_timeline(&self, doc: &mut Document, timeline: Timeline);
}
