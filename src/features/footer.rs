//! Footer
//!
//! Stamps the current year into the copyright line at mount.

use chrono::Datelike;

use crate::eventing::{Effect, UiEvent};
use crate::features::{Component, PageContext};

/// Footer controller
#[derive(Debug, Default)]
pub struct FooterController;

impl FooterController {
    pub fn new() -> Self {
        Self
    }
}

impl Component for FooterController {
    fn name(&self) -> &'static str {
        "footer"
    }

    fn mount(&mut self, ctx: &mut PageContext<'_>) -> Vec<Effect> {
        if let Some(year) = ctx.doc.element_by_id("current-year") {
            ctx.doc
                .get_mut(year)
                .set_text(chrono::Local::now().year().to_string());
        }
        Vec::new()
    }

    fn on_event(&mut self, _event: &UiEvent, _ctx: &mut PageContext<'_>) -> Vec<Effect> {
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

    #[test]
    fn test_mount_sets_current_year() {
        let mut doc = Document::new();
        let root = doc.root();
        let year = doc.append(root, Element::new("span").with_id("current-year"));

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
        FooterController::new().mount(&mut ctx);

        let expected = chrono::Local::now().year().to_string();
        assert_eq!(doc.get(year).text(), expected);
    }
}
