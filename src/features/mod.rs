//! Features - Behavior Controllers
//!
//! One controller per page behavior. Controllers are mounted on the
//! runtime, resolve their DOM anchors once, and react to dispatched
//! events through a shared page context. A controller whose anchors are
//! missing stays inert - pages without a given control are normal, not
//! an error.

pub mod contact_form;
pub mod footer;
pub mod hero;
pub mod interactions;
pub mod language;
pub mod navigation;
pub mod reveal;
pub mod smooth_scroll;
pub mod theme;

use crate::constants::{PULSE_DURATION, PULSE_SCALE};
use crate::dom::{Document, NodeId};
use crate::domain::SiteConfig;
use crate::eventing::{Effect, UiEvent};
use crate::motion::{Easing, MotionEngine, Tween, TweenProps};
use crate::services::storage::PreferenceStorage;
use crate::state::PrefsState;

/// Everything a controller may observe or mutate
pub struct PageContext<'a> {
    pub doc: &'a mut Document,
    pub storage: &'a mut dyn PreferenceStorage,
    pub motion: &'a dyn MotionEngine,
    pub prefs: &'a mut PrefsState,
    pub config: &'a SiteConfig,
}

/// A mounted page behavior
pub trait Component {
    /// Display name for logs
    fn name(&self) -> &'static str;

    /// Resolve anchors and run first-paint work. Runs once, after the
    /// early preference pass has stamped the root element.
    fn mount(&mut self, _ctx: &mut PageContext<'_>) -> Vec<Effect> {
        Vec::new()
    }

    /// React to a dispatched event
    fn on_event(&mut self, event: &UiEvent, ctx: &mut PageContext<'_>) -> Vec<Effect>;
}

/// Short scale-pulse acknowledgement on a toggle control
pub(crate) fn pulse_control(ctx: &mut PageContext<'_>, control: NodeId) {
    ctx.motion.animate_to(
        ctx.doc,
        &[control],
        Tween::to(TweenProps::new().scale(PULSE_SCALE))
            .duration(PULSE_DURATION)
            .yoyo()
            .repeat(1)
            .ease(Easing::PowerInOut(2)),
        None,
    );
}
