//! End-to-end tests over the assembled page: preference restoration on
//! reload, the toggles, and the contact form lifecycle against a canned
//! transport.

use std::sync::Arc;

use futures::future::BoxFuture;

use encodius_site::app::page::build_index_page;
use encodius_site::app::Runtime;
use encodius_site::domain::{ContactMessage, SiteConfig};
use encodius_site::dom::NodeId;
use encodius_site::error::{Error, Result};
use encodius_site::eventing::UiEvent;
use encodius_site::motion::ImmediateEngine;
use encodius_site::services::contact::{ContactTransport, SubmitResponse};
use encodius_site::services::storage::{MemoryStorage, PreferenceStorage};

/// Transport answering every submission with a canned response
struct CannedTransport {
    response: std::result::Result<SubmitResponse, String>,
}

impl CannedTransport {
    fn accepting() -> Self {
        Self {
            response: Ok(SubmitResponse { success: true, message: None }),
        }
    }

    fn rejecting(message: &str) -> Self {
        Self {
            response: Ok(SubmitResponse {
                success: false,
                message: Some(message.to_string()),
            }),
        }
    }
}

impl ContactTransport for CannedTransport {
    fn submit<'a>(
        &'a self,
        _endpoint: &'a str,
        _message: &'a ContactMessage,
    ) -> BoxFuture<'a, Result<SubmitResponse>> {
        let response = self.response.clone();
        Box::pin(async move { response.map_err(|message| Error::Submit { message }) })
    }
}

async fn runtime_with(
    storage: MemoryStorage,
    transport: CannedTransport,
    config: SiteConfig,
    system_prefers_dark: bool,
) -> Runtime {
    let mut runtime = Runtime::with_hint(
        build_index_page(),
        Box::new(storage),
        Arc::new(ImmediateEngine),
        Arc::new(transport),
        config,
        system_prefers_dark,
    );
    runtime.mount_defaults().await;
    runtime
}

fn anchor(runtime: &Runtime, id: &str) -> NodeId {
    runtime
        .document()
        .element_by_id(id)
        .unwrap_or_else(|| panic!("missing #{id}"))
}

#[tokio::test]
async fn first_load_defaults_to_dark_regardless_of_system_hint() {
    for hint in [true, false] {
        let runtime = runtime_with(
            MemoryStorage::new(),
            CannedTransport::accepting(),
            SiteConfig::default(),
            hint,
        )
        .await;
        let root = runtime.document().root();
        assert_eq!(runtime.document().get(root).attribute("data-theme"), None);
    }
}

#[tokio::test]
async fn reload_restores_persisted_serbian() {
    let mut storage = MemoryStorage::new();
    storage.set("app-lang", "sr");

    let runtime = runtime_with(
        storage,
        CannedTransport::accepting(),
        SiteConfig::default(),
        true,
    )
    .await;

    let doc = runtime.document();
    let root = doc.root();
    assert_eq!(doc.get(root).attribute("lang"), Some("sr"));
    assert_eq!(doc.title(), "Encodius | Fintech i Softverski Inženjering Eksperti");

    let submit = doc
        .select(|el| el.attribute("data-i18n") == Some("contact.form.submit"))
        .first()
        .copied()
        .expect("submit control");
    assert_eq!(doc.get(submit).text(), "Pošalji Poruku");
}

#[tokio::test]
async fn language_toggle_twice_round_trips() {
    let mut runtime = runtime_with(
        MemoryStorage::new(),
        CannedTransport::accepting(),
        SiteConfig::default(),
        true,
    )
    .await;

    let toggle = anchor(&runtime, "lang-toggle");
    runtime.click(toggle).await;
    assert_eq!(runtime.storage().get("app-lang"), Some("sr".to_string()));

    runtime.click(toggle).await;
    assert_eq!(runtime.storage().get("app-lang"), Some("en".to_string()));
    let root = runtime.document().root();
    assert_eq!(runtime.document().get(root).attribute("lang"), Some("en"));
    assert_eq!(
        runtime.document().title(),
        "Encodius | Fintech & Software Engineering Experts"
    );
}

#[tokio::test]
async fn theme_toggle_twice_restores_attribute_state() {
    let mut runtime = runtime_with(
        MemoryStorage::new(),
        CannedTransport::accepting(),
        SiteConfig::default(),
        true,
    )
    .await;

    let toggle = anchor(&runtime, "theme-toggle");
    let root = runtime.document().root();

    runtime.click(toggle).await;
    assert_eq!(
        runtime.document().get(root).attribute("data-theme"),
        Some("light")
    );

    runtime.click(toggle).await;
    assert_eq!(runtime.document().get(root).attribute("data-theme"), None);
    assert_eq!(runtime.storage().get("app-theme"), Some("dark".to_string()));
}

#[tokio::test]
async fn rejected_submission_shows_error_and_reenables_control() {
    let mut runtime = runtime_with(
        MemoryStorage::new(),
        CannedTransport::rejecting("x"),
        SiteConfig::default(),
        true,
    )
    .await;

    let form = anchor(&runtime, "contact-form");
    let status = anchor(&runtime, "form-status");
    runtime.dispatch(UiEvent::SubmitRequested { form }).await;

    let doc = runtime.document();
    let status_el = doc.get(status);
    assert!(status_el.has_class("error"));
    assert_eq!(
        status_el.text(),
        "Something went wrong. Please try again or email us directly."
    );

    let submit = doc
        .select(|el| el.tag == "button" && el.attribute("type") == Some("submit"))
        .first()
        .copied()
        .expect("submit control");
    assert!(!doc.get(submit).has_attribute("disabled"));
    assert_eq!(doc.get(submit).text(), "Send Message");
}

#[tokio::test]
async fn accepted_submission_resets_form_and_schedules_clear() {
    let config = SiteConfig {
        status_clear_ms: 20,
        ..Default::default()
    };
    let mut runtime = runtime_with(
        MemoryStorage::new(),
        CannedTransport::accepting(),
        config,
        true,
    )
    .await;

    let form = anchor(&runtime, "contact-form");
    let status = anchor(&runtime, "form-status");

    // fill a field so the reset is observable
    let email = runtime
        .document()
        .select(|el| el.attribute("name") == Some("email"))
        .first()
        .copied()
        .expect("email input");
    runtime
        .document_mut()
        .get_mut(email)
        .set_attribute("value", "mila@example.test");

    runtime.dispatch(UiEvent::SubmitRequested { form }).await;

    assert!(runtime.document().get(status).has_class("success"));
    assert_eq!(runtime.document().get(email).attribute("value"), Some(""));

    // the fixed-delay auto-clear strips the outcome class
    tokio::time::sleep(std::time::Duration::from_millis(120)).await;
    runtime.pump().await;
    assert!(!runtime.document().get(status).has_class("success"));
    assert!(runtime.document().get(status).has_class("form-status"));
}

#[tokio::test]
async fn unmounted_component_stops_receiving_events() {
    let mut runtime = Runtime::with_hint(
        build_index_page(),
        Box::new(MemoryStorage::new()),
        Arc::new(ImmediateEngine),
        Arc::new(CannedTransport::accepting()),
        SiteConfig::default(),
        true,
    );
    let id = runtime
        .mount(Box::new(encodius_site::features::theme::ThemeController::new()))
        .await;

    let toggle = anchor(&runtime, "theme-toggle");
    runtime.click(toggle).await;
    assert_eq!(runtime.storage().get("app-theme"), Some("light".to_string()));

    assert!(runtime.unmount(id));
    runtime.click(toggle).await;
    assert_eq!(runtime.storage().get("app-theme"), Some("light".to_string()));
    assert!(!runtime.unmount(id));
}

#[tokio::test]
async fn anchor_click_scrolls_and_marks_header() {
    let mut runtime = runtime_with(
        MemoryStorage::new(),
        CannedTransport::accepting(),
        SiteConfig::default(),
        true,
    )
    .await;

    let link = runtime
        .document()
        .select(|el| el.attribute("href") == Some("#services"))
        .first()
        .copied()
        .expect("services link");
    runtime.click(link).await;

    // services sits at 1600; the scroll stops one header height above
    assert_eq!(runtime.document().viewport.scroll_y, 1520.0);
    let header = anchor(&runtime, "header");
    assert!(runtime.document().get(header).has_class("scrolled"));
}
