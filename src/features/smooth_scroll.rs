//! Smooth Scroll
//!
//! Clicks on in-page anchors scroll to the target section, compensating
//! for the fixed header height.

use crate::constants::SMOOTH_SCROLL_OFFSET;
use crate::eventing::{Effect, UiEvent};
use crate::features::{Component, PageContext};

/// Anchor scrolling controller
#[derive(Debug, Default)]
pub struct SmoothScrollController;

impl SmoothScrollController {
    pub fn new() -> Self {
        Self
    }
}

impl Component for SmoothScrollController {
    fn name(&self) -> &'static str {
        "smooth-scroll"
    }

    fn on_event(&mut self, event: &UiEvent, ctx: &mut PageContext<'_>) -> Vec<Effect> {
        let UiEvent::Click { target } = event else {
            return Vec::new();
        };

        let element = ctx.doc.get(*target);
        if element.tag != "a" {
            return Vec::new();
        }
        let Some(anchor_id) = element
            .attribute("href")
            .and_then(|href| href.strip_prefix('#'))
        else {
            return Vec::new();
        };
        let Some(section) = ctx.doc.element_by_id(anchor_id) else {
            return Vec::new();
        };

        let y = (ctx.doc.get(section).offset_top - SMOOTH_SCROLL_OFFSET).max(0.0);
        vec![Effect::ScrollTo { y }]
    }
}
