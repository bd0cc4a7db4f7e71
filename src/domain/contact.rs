//! ContactMessage - Contact Form Payload

use crate::dom::{Document, NodeId};

/// One contact form submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    /// Correlation id for logs; not part of the posted fields
    pub request_id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Collect the payload from a form's inputs, keyed by their `name`
    /// attributes. Unknown inputs are ignored; missing ones post empty.
    pub fn from_form(doc: &Document, form: NodeId) -> Self {
        let mut name = String::new();
        let mut email = String::new();
        let mut subject = String::new();
        let mut message = String::new();

        for id in doc.descendants_with_class(form, "form-input") {
            let element = doc.get(id);
            let value = element.attribute("value").unwrap_or_default().to_string();
            match element.attribute("name") {
                Some("name") => name = value,
                Some("email") => email = value,
                Some("subject") => subject = value,
                Some("message") => message = value,
                _ => {}
            }
        }

        Self::new(name, email, subject, message)
    }

    /// Form-encoded field pairs for the POST body
    pub fn form_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
    }
}

/// Clear a form's inputs back to empty (`form.reset()` analog)
pub fn reset_form(doc: &mut Document, form: NodeId) {
    for id in doc.descendants_with_class(form, "form-input") {
        let element = doc.get_mut(id);
        element.set_attribute("value", "");
        // textarea content mirrors its value
        if element.tag == "textarea" {
            element.set_text("");
        }
    }
}
