//! Navigation
//!
//! Header scroll styling and the mobile menu: hamburger opens, close
//! button / backdrop / any nav link closes, and the body scroll is
//! locked while the menu is open.

use crate::constants::HEADER_SCROLL_THRESHOLD;
use crate::dom::NodeId;
use crate::eventing::{Effect, UiEvent};
use crate::features::{Component, PageContext};

/// Navigation controller
#[derive(Debug, Default)]
pub struct NavController {
    header: Option<NodeId>,
    nav_toggle: Option<NodeId>,
    nav_mobile: Option<NodeId>,
    nav_close: Option<NodeId>,
    backdrop: Option<NodeId>,
    links: Vec<NodeId>,
}

impl NavController {
    pub fn new() -> Self {
        Self::default()
    }

    fn open_menu(&self, ctx: &mut PageContext<'_>) {
        let Some(nav_mobile) = self.nav_mobile else {
            return;
        };
        ctx.doc.get_mut(nav_mobile).add_class("active");
        if let Some(backdrop) = self.backdrop {
            ctx.doc.get_mut(backdrop).add_class("active");
        }
        if let Some(body) = ctx.doc.body() {
            ctx.doc.get_mut(body).set_style("overflow", "hidden");
        }
    }

    fn close_menu(&self, ctx: &mut PageContext<'_>) {
        let Some(nav_mobile) = self.nav_mobile else {
            return;
        };
        ctx.doc.get_mut(nav_mobile).remove_class("active");
        if let Some(backdrop) = self.backdrop {
            ctx.doc.get_mut(backdrop).remove_class("active");
        }
        if let Some(body) = ctx.doc.body() {
            ctx.doc.get_mut(body).remove_style("overflow");
        }
    }

    fn on_scroll(&self, y: f32, ctx: &mut PageContext<'_>) {
        let Some(header) = self.header else {
            return;
        };
        if y > HEADER_SCROLL_THRESHOLD {
            ctx.doc.get_mut(header).add_class("scrolled");
        } else {
            ctx.doc.get_mut(header).remove_class("scrolled");
        }
    }
}

impl Component for NavController {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn mount(&mut self, ctx: &mut PageContext<'_>) -> Vec<Effect> {
        self.header = ctx.doc.element_by_id("header");
        self.nav_toggle = ctx.doc.element_by_id("nav-toggle");
        self.nav_mobile = ctx.doc.element_by_id("nav-mobile");
        self.nav_close = ctx.doc.element_by_id("nav-mobile-close");
        self.backdrop = ctx.doc.element_by_id("nav-backdrop");
        self.links = self
            .nav_mobile
            .map(|nav| ctx.doc.descendants_with_class(nav, "nav__link"))
            .unwrap_or_default();
        Vec::new()
    }

    fn on_event(&mut self, event: &UiEvent, ctx: &mut PageContext<'_>) -> Vec<Effect> {
        // The whole mobile menu is optional
        if self.nav_mobile.is_none() {
            // the header scroll styling still applies on pages without it
            if let UiEvent::Scroll { y } = event {
                self.on_scroll(*y, ctx);
            }
            return Vec::new();
        }

        match event {
            UiEvent::Scroll { y } => self.on_scroll(*y, ctx),
            UiEvent::Click { target } => {
                if Some(*target) == self.nav_toggle {
                    self.open_menu(ctx);
                } else if Some(*target) == self.nav_close || Some(*target) == self.backdrop {
                    self.close_menu(ctx);
                } else if self.links.contains(target) {
                    self.close_menu(ctx);
                }
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
    use crate::motion::ImmediateEngine;
    use crate::services::storage::MemoryStorage;
    use crate::state::PrefsState;

    struct Fixture {
        doc: Document,
        storage: MemoryStorage,
        prefs: PrefsState,
        controller: NavController,
        toggle: NodeId,
        menu: NodeId,
        link: NodeId,
    }

    impl Fixture {
        fn new() -> Self {
            let mut doc = Document::new();
            let root = doc.root();
            let body = doc.append(root, Element::new("body"));
            doc.append(body, Element::new("header").with_id("header"));
            let toggle = doc.append(body, Element::new("button").with_id("nav-toggle"));
            let menu = doc.append(body, Element::new("nav").with_id("nav-mobile"));
            doc.append(menu, Element::new("button").with_id("nav-mobile-close"));
            doc.append(body, Element::new("div").with_id("nav-backdrop"));
            let link = doc.append(menu, Element::new("a").with_class("nav__link"));

            let mut fixture = Self {
                doc,
                storage: MemoryStorage::new(),
                prefs: PrefsState::default(),
                controller: NavController::new(),
                toggle,
                menu,
                link,
            };
            fixture.dispatch(None);
            fixture
        }

        /// Mounts on first call, then dispatches the given event
        fn dispatch(&mut self, event: Option<UiEvent>) {
            let config = SiteConfig::default();
            let mut ctx = PageContext {
                doc: &mut self.doc,
                storage: &mut self.storage,
                motion: &ImmediateEngine,
                prefs: &mut self.prefs,
                config: &config,
            };
            match event {
                None => {
                    self.controller.mount(&mut ctx);
                }
                Some(event) => {
                    self.controller.on_event(&event, &mut ctx);
                }
            }
        }
    }

    #[test]
    fn test_header_scrolled_class_follows_threshold() {
        let mut fixture = Fixture::new();
        fixture.dispatch(Some(UiEvent::scroll(80.0)));
        let header = fixture.doc.element_by_id("header").expect("header");
        assert!(fixture.doc.get(header).has_class("scrolled"));

        fixture.dispatch(Some(UiEvent::scroll(10.0)));
        assert!(!fixture.doc.get(header).has_class("scrolled"));
    }

    #[test]
    fn test_menu_opens_and_locks_body_scroll() {
        let mut fixture = Fixture::new();
        fixture.dispatch(Some(UiEvent::click(fixture.toggle)));

        assert!(fixture.doc.get(fixture.menu).has_class("active"));
        let body = fixture.doc.body().expect("body");
        assert_eq!(fixture.doc.get(body).style("overflow"), Some("hidden"));
    }

    #[test]
    fn test_link_click_closes_menu() {
        let mut fixture = Fixture::new();
        fixture.dispatch(Some(UiEvent::click(fixture.toggle)));
        fixture.dispatch(Some(UiEvent::click(fixture.link)));

        assert!(!fixture.doc.get(fixture.menu).has_class("active"));
        let body = fixture.doc.body().expect("body");
        assert_eq!(fixture.doc.get(body).style("overflow"), None);
    }

    #[test]
    fn test_backdrop_click_closes_menu() {
        let mut fixture = Fixture::new();
        fixture.dispatch(Some(UiEvent::click(fixture.toggle)));
        let backdrop = fixture.doc.element_by_id("nav-backdrop").expect("backdrop");
        fixture.dispatch(Some(UiEvent::click(backdrop)));
        assert!(!fixture.doc.get(fixture.menu).has_class("active"));
    }
}
