//! Runtime - Event Loop and Component Registry
//!
//! Owns the document, preference storage, motion engine and contact
//! transport, and fans dispatched events out to the mounted components.
//! Effects returned by the controllers are executed here: the form POST
//! awaits inline (suspending the dispatching handler, nothing else), the
//! status auto-clear becomes a detached timer feeding the event queue,
//! and programmatic scrolls loop back as scroll events.

use std::collections::VecDeque;
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};

use crate::dom::{Document, NodeId};
use crate::domain::SiteConfig;
use crate::eventing::{Effect, UiEvent};
use crate::features::{
    contact_form::ContactFormController, footer::FooterController, hero::HeroController,
    interactions::InteractionsController, language::LanguageController,
    navigation::NavController, reveal::RevealController, smooth_scroll::SmoothScrollController,
    theme::ThemeController, Component, PageContext,
};
use crate::motion::MotionEngine;
use crate::services::contact::{self, ContactTransport};
use crate::services::executor;
use crate::services::storage::PreferenceStorage;
use crate::state::PrefsState;

/// Disposer handle for a mounted component
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentId(uuid::Uuid);

struct Mounted {
    id: ComponentId,
    component: Box<dyn Component>,
}

/// The page runtime
pub struct Runtime {
    doc: Document,
    storage: Box<dyn PreferenceStorage>,
    motion: Arc<dyn MotionEngine>,
    transport: Arc<dyn ContactTransport>,
    prefs: PrefsState,
    config: SiteConfig,
    components: Vec<Mounted>,
    tx: Sender<UiEvent>,
    rx: Receiver<UiEvent>,
}

impl Runtime {
    /// Build a runtime over a document. The early preference pass runs
    /// here, before any component mounts, so the root element carries
    /// the right theme and language attributes from the start.
    pub fn new(
        doc: Document,
        storage: Box<dyn PreferenceStorage>,
        motion: Arc<dyn MotionEngine>,
        transport: Arc<dyn ContactTransport>,
        config: SiteConfig,
    ) -> Self {
        let hint = crate::state::prefs_state::system_prefers_dark();
        Self::with_hint(doc, storage, motion, transport, config, hint)
    }

    /// Build a runtime with an explicit system theme hint (tests
    /// simulate the hint here)
    pub fn with_hint(
        mut doc: Document,
        storage: Box<dyn PreferenceStorage>,
        motion: Arc<dyn MotionEngine>,
        transport: Arc<dyn ContactTransport>,
        config: SiteConfig,
        system_prefers_dark: bool,
    ) -> Self {
        doc.viewport.width = config.viewport_width;
        doc.viewport.height = config.viewport_height;

        let prefs = PrefsState::boot_with_hint(&mut doc, storage.as_ref(), system_prefers_dark);
        let (tx, rx) = crossbeam_channel::unbounded();

        Self {
            doc,
            storage,
            motion,
            transport,
            prefs,
            config,
            components: Vec::new(),
            tx,
            rx,
        }
    }

    // ==================== Component registry ====================

    /// Mount a component, returning its disposer handle
    pub async fn mount(&mut self, mut component: Box<dyn Component>) -> ComponentId {
        let id = ComponentId(uuid::Uuid::new_v4());
        tracing::debug!(name = component.name(), "mounting component");

        let effects = {
            let mut ctx = PageContext {
                doc: &mut self.doc,
                storage: self.storage.as_mut(),
                motion: self.motion.as_ref(),
                prefs: &mut self.prefs,
                config: &self.config,
            };
            component.mount(&mut ctx)
        };
        self.components.push(Mounted { id, component });

        let mut queue = VecDeque::new();
        for effect in effects {
            self.apply_effect(effect, &mut queue).await;
        }
        while let Some(event) = queue.pop_front() {
            self.dispatch(event).await;
        }
        id
    }

    /// Mount the full behavior set in page order
    pub async fn mount_defaults(&mut self) {
        self.mount(Box::new(FooterController::new())).await;
        self.mount(Box::new(SmoothScrollController::new())).await;
        self.mount(Box::new(NavController::new())).await;
        self.mount(Box::new(ContactFormController::new())).await;
        self.mount(Box::new(LanguageController::new())).await;
        self.mount(Box::new(ThemeController::new())).await;
        self.mount(Box::new(HeroController::new())).await;
        self.mount(Box::new(RevealController::new())).await;
        self.mount(Box::new(InteractionsController::new())).await;
    }

    /// Unmount a component. Returns false for an unknown handle.
    pub fn unmount(&mut self, id: ComponentId) -> bool {
        let before = self.components.len();
        self.components.retain(|mounted| mounted.id != id);
        self.components.len() != before
    }

    // ==================== Dispatch ====================

    /// Dispatch an event (and everything it cascades into) to all
    /// mounted components
    pub async fn dispatch(&mut self, event: UiEvent) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            let mut components = std::mem::take(&mut self.components);
            let mut effects = Vec::new();
            for mounted in &mut components {
                let mut ctx = PageContext {
                    doc: &mut self.doc,
                    storage: self.storage.as_mut(),
                    motion: self.motion.as_ref(),
                    prefs: &mut self.prefs,
                    config: &self.config,
                };
                effects.extend(mounted.component.on_event(&event, &mut ctx));
            }
            self.components = components;

            for effect in effects {
                self.apply_effect(effect, &mut queue).await;
            }
        }
    }

    async fn apply_effect(&mut self, effect: Effect, queue: &mut VecDeque<UiEvent>) {
        match effect {
            Effect::SubmitContact { form, message } => {
                let outcome = contact::submit_outcome(
                    self.transport.as_ref(),
                    &self.config.contact_endpoint,
                    &message,
                )
                .await;
                queue.push_back(UiEvent::SubmitResolved { form, outcome });
            }
            Effect::ScheduleStatusClear { status, delay } => {
                let tx = self.tx.clone();
                executor::spawn(async move {
                    tokio::time::sleep(delay).await;
                    if tx.send(UiEvent::StatusClearElapsed { status }).is_err() {
                        tracing::debug!("status clear fired after runtime shutdown");
                    }
                });
            }
            Effect::ScrollTo { y } => {
                self.doc.viewport.scroll_y = y;
                queue.push_back(UiEvent::scroll(y));
            }
        }
    }

    /// Drain events queued by timers since the last dispatch
    pub async fn pump(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.dispatch(event).await;
        }
    }

    // ==================== Convenience ====================

    /// Dispatch a click on an element
    pub async fn click(&mut self, target: NodeId) {
        self.dispatch(UiEvent::click(target)).await;
    }

    /// Scroll the viewport and dispatch the event
    pub async fn scroll(&mut self, y: f32) {
        self.doc.viewport.scroll_y = y;
        self.dispatch(UiEvent::scroll(y)).await;
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn prefs(&self) -> &PrefsState {
        &self.prefs
    }

    pub fn storage(&self) -> &dyn PreferenceStorage {
        self.storage.as_ref()
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("prefs", &self.prefs)
            .field("components", &self.components.len())
            .field("title", &self.doc.title())
            .finish()
    }
}

/// Run the site headlessly: build the index page, restore preferences,
/// mount every behavior and walk the page like a first visitor.
pub fn run_site() {
    executor::block_on(async {
        let config = crate::domain::config::load().unwrap_or_default();

        let storage: Box<dyn PreferenceStorage> =
            match crate::services::storage::FileStorage::open_default() {
                Ok(storage) => Box::new(storage),
                Err(e) => {
                    tracing::warn!("Preference file unavailable, staying in-memory: {e}");
                    Box::new(crate::services::storage::MemoryStorage::new())
                }
            };

        let doc = crate::app::page::build_index_page();
        let mut runtime = Runtime::new(
            doc,
            storage,
            Arc::new(crate::motion::ImmediateEngine),
            Arc::new(crate::services::contact::HttpTransport::new()),
            config,
        );
        runtime.mount_defaults().await;

        // Walk the page: scroll through the sections, then exercise the
        // toggles the way a visitor would.
        for y in [300.0, 1200.0, 2400.0, 3600.0] {
            runtime.scroll(y).await;
        }
        if let Some(toggle) = runtime.document().element_by_id("lang-toggle") {
            runtime.click(toggle).await;
        }
        if let Some(toggle) = runtime.document().element_by_id("theme-toggle") {
            runtime.click(toggle).await;
        }
        runtime.pump().await;

        let root = runtime.document().root();
        tracing::info!(
            title = runtime.document().title(),
            lang = runtime.document().get(root).attribute("lang").unwrap_or("-"),
            theme = runtime.document().get(root).attribute("data-theme").unwrap_or("dark"),
            "site runtime settled"
        );
    });
}
