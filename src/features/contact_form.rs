//! Contact Form
//!
//! Owns the submit lifecycle: disable the control and show a sending
//! label, hand the POST to the runtime, then render the outcome on the
//! status element, restore the control, and schedule the fixed-delay
//! auto-clear. Focus and blur on the inputs get small scale tweens.

use crate::constants::{INPUT_FOCUS_SCALE, STATUS_FADE_DURATION};
use crate::dom::NodeId;
use crate::domain::contact::{reset_form, ContactMessage};
use crate::eventing::{Effect, UiEvent};
use crate::features::{Component, PageContext};
use crate::motion::{Easing, Tween, TweenProps};
use crate::services::contact::SubmitOutcome;

const SUCCESS_TEXT: &str = "Message sent successfully! We'll get back to you soon.";
const ERROR_TEXT: &str = "Something went wrong. Please try again or email us directly.";
const SENDING_TEXT: &str = "Sending...";

/// Contact form controller
#[derive(Debug, Default)]
pub struct ContactFormController {
    form: Option<NodeId>,
    status: Option<NodeId>,
    submit_btn: Option<NodeId>,
    /// Control label captured when a submission starts
    original_label: String,
}

impl ContactFormController {
    pub fn new() -> Self {
        Self::default()
    }

    fn on_submit(&mut self, form: NodeId, ctx: &mut PageContext<'_>) -> Vec<Effect> {
        let Some(btn) = self.submit_btn else {
            return Vec::new();
        };

        // Loading state
        self.original_label = ctx.doc.get(btn).text().to_string();
        let button = ctx.doc.get_mut(btn);
        button.set_text(SENDING_TEXT);
        button.set_attribute("disabled", "");

        let message = ContactMessage::from_form(ctx.doc, form);
        tracing::info!(request_id = %message.request_id, "contact form submitted");
        vec![Effect::SubmitContact { form, message }]
    }

    fn on_resolved(
        &mut self,
        form: NodeId,
        outcome: &SubmitOutcome,
        ctx: &mut PageContext<'_>,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();

        if let Some(status) = self.status {
            match outcome {
                SubmitOutcome::Sent => {
                    let element = ctx.doc.get_mut(status);
                    element.set_text(SUCCESS_TEXT);
                    element.set_classes(&["form-status", "success"]);
                    reset_form(ctx.doc, form);
                }
                SubmitOutcome::Failed { message } => {
                    tracing::warn!(%message, "rendering contact form failure");
                    let element = ctx.doc.get_mut(status);
                    element.set_text(ERROR_TEXT);
                    element.set_classes(&["form-status", "error"]);
                }
            }

            // Slide the status in
            ctx.motion.animate_from(
                ctx.doc,
                &[status],
                Tween::to(TweenProps::new().opacity(0.0).y(20.0))
                    .duration(0.5)
                    .ease(Easing::PowerOut(2)),
            );

            effects.push(Effect::ScheduleStatusClear {
                status,
                delay: ctx.config.status_clear_delay(),
            });
        }

        // Restore the control whatever the outcome
        if let Some(btn) = self.submit_btn {
            let button = ctx.doc.get_mut(btn);
            button.set_text(self.original_label.clone());
            button.remove_attribute("disabled");
        }

        effects
    }

    fn on_status_clear(&self, status: NodeId, ctx: &mut PageContext<'_>) {
        ctx.motion.animate_to(
            ctx.doc,
            &[status],
            Tween::to(TweenProps::new().opacity(0.0)).duration(STATUS_FADE_DURATION),
            Some(Box::new(move |doc, _| {
                let element = doc.get_mut(status);
                element.set_classes(&["form-status"]);
                element.remove_style("opacity");
            })),
        );
    }

    fn is_form_input(&self, target: NodeId, ctx: &PageContext<'_>) -> bool {
        match self.form {
            Some(form) => {
                ctx.doc.get(target).has_class("form-input") && ctx.doc.is_within(target, form)
            }
            None => false,
        }
    }
}

impl Component for ContactFormController {
    fn name(&self) -> &'static str {
        "contact-form"
    }

    fn mount(&mut self, ctx: &mut PageContext<'_>) -> Vec<Effect> {
        self.form = ctx.doc.element_by_id("contact-form");
        self.status = ctx.doc.element_by_id("form-status");
        self.submit_btn = self.form.and_then(|form| {
            ctx.doc
                .descendants(form)
                .into_iter()
                .find(|&id| {
                    let el = ctx.doc.get(id);
                    el.tag == "button" && el.attribute("type") == Some("submit")
                })
        });
        Vec::new()
    }

    fn on_event(&mut self, event: &UiEvent, ctx: &mut PageContext<'_>) -> Vec<Effect> {
        if self.form.is_none() {
            return Vec::new();
        }

        match event {
            UiEvent::SubmitRequested { form } if Some(*form) == self.form => {
                return self.on_submit(*form, ctx);
            }
            UiEvent::SubmitResolved { form, outcome } if Some(*form) == self.form => {
                return self.on_resolved(*form, outcome, ctx);
            }
            UiEvent::StatusClearElapsed { status } if Some(*status) == self.status => {
                self.on_status_clear(*status, ctx);
            }
            UiEvent::FocusGained { target } if self.is_form_input(*target, ctx) => {
                ctx.motion.animate_to(
                    ctx.doc,
                    &[*target],
                    Tween::to(TweenProps::new().scale(INPUT_FOCUS_SCALE))
                        .duration(0.3)
                        .ease(Easing::PowerOut(2)),
                    None,
                );
            }
            UiEvent::FocusLost { target } if self.is_form_input(*target, ctx) => {
                ctx.motion.animate_to(
                    ctx.doc,
                    &[*target],
                    Tween::to(TweenProps::new().scale(1.0))
                        .duration(0.3)
                        .ease(Easing::PowerOut(2)),
                    None,
                );
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
        controller: ContactFormController,
        form: NodeId,
        status: NodeId,
        btn: NodeId,
    }

    impl Fixture {
        fn new() -> Self {
            let mut doc = Document::new();
            let root = doc.root();
            let form = doc.append(root, Element::new("form").with_id("contact-form"));
            doc.append(
                form,
                Element::new("input")
                    .with_class("form-input")
                    .with_attr("name", "email")
                    .with_attr("value", "a@example.test"),
            );
            let btn = doc.append(
                form,
                Element::new("button")
                    .with_attr("type", "submit")
                    .with_text("Send Message"),
            );
            let status = doc.append(root, Element::new("p").with_id("form-status").with_class("form-status"));

            let mut fixture = Self {
                doc,
                storage: MemoryStorage::new(),
                prefs: PrefsState::default(),
                controller: ContactFormController::new(),
                form,
                status,
                btn,
            };
            fixture.run(None);
            fixture
        }

        fn run(&mut self, event: Option<UiEvent>) -> Vec<Effect> {
            let config = SiteConfig::default();
            let mut ctx = PageContext {
                doc: &mut self.doc,
                storage: &mut self.storage,
                motion: &ImmediateEngine,
                prefs: &mut self.prefs,
                config: &config,
            };
            match event {
                None => self.controller.mount(&mut ctx),
                Some(event) => self.controller.on_event(&event, &mut ctx),
            }
        }
    }

    #[test]
    fn test_submit_disables_button_and_requests_post() {
        let mut fixture = Fixture::new();
        let effects = fixture.run(Some(UiEvent::SubmitRequested { form: fixture.form }));

        assert_eq!(fixture.doc.get(fixture.btn).text(), SENDING_TEXT);
        assert!(fixture.doc.get(fixture.btn).has_attribute("disabled"));
        assert!(matches!(effects.as_slice(), [Effect::SubmitContact { .. }]));
    }

    #[test]
    fn test_failure_renders_error_and_reenables() {
        let mut fixture = Fixture::new();
        fixture.run(Some(UiEvent::SubmitRequested { form: fixture.form }));
        let effects = fixture.run(Some(UiEvent::SubmitResolved {
            form: fixture.form,
            outcome: SubmitOutcome::Failed { message: "x".to_string() },
        }));

        let status = fixture.doc.get(fixture.status);
        assert!(status.has_class("error"));
        assert_eq!(status.text(), ERROR_TEXT);
        let btn = fixture.doc.get(fixture.btn);
        assert_eq!(btn.text(), "Send Message");
        assert!(!btn.has_attribute("disabled"));
        assert!(matches!(effects.as_slice(), [Effect::ScheduleStatusClear { .. }]));
    }

    #[test]
    fn test_success_resets_form_and_renders_status() {
        let mut fixture = Fixture::new();
        fixture.run(Some(UiEvent::SubmitRequested { form: fixture.form }));
        fixture.run(Some(UiEvent::SubmitResolved {
            form: fixture.form,
            outcome: SubmitOutcome::Sent,
        }));

        let status = fixture.doc.get(fixture.status);
        assert!(status.has_class("success"));
        let message = ContactMessage::from_form(&fixture.doc, fixture.form);
        assert!(message.email.is_empty());
    }

    #[test]
    fn test_status_clear_strips_outcome_class() {
        let mut fixture = Fixture::new();
        fixture.run(Some(UiEvent::SubmitRequested { form: fixture.form }));
        fixture.run(Some(UiEvent::SubmitResolved {
            form: fixture.form,
            outcome: SubmitOutcome::Failed { message: "x".to_string() },
        }));
        fixture.run(Some(UiEvent::StatusClearElapsed { status: fixture.status }));

        let status = fixture.doc.get(fixture.status);
        assert!(!status.has_class("error"));
        assert!(status.has_class("form-status"));
        assert_eq!(status.style("opacity"), None);
    }

    #[test]
    fn test_focus_and_blur_scale_inputs() {
        let mut fixture = Fixture::new();
        let input = fixture.doc.descendants_with_class(fixture.form, "form-input")[0];

        fixture.run(Some(UiEvent::FocusGained { target: input }));
        assert_eq!(fixture.doc.get(input).style("scale"), Some("1.02"));

        fixture.run(Some(UiEvent::FocusLost { target: input }));
        assert_eq!(fixture.doc.get(input).style("scale"), Some("1"));
    }
}
