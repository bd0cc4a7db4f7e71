//! Contact Transport
//!
//! Opaque POST of form-encoded data to the configured endpoint. The
//! endpoint answers JSON `{"success": bool, "message": optional}`; any
//! non-success HTTP status, network failure or malformed body counts as
//! a failed submission. No retry is attempted.

use futures::future::BoxFuture;
use serde::Deserialize;

use crate::domain::ContactMessage;
use crate::error::{Error, Result};

/// Endpoint response body
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// What a completed submission came to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed { message: String },
}

/// Transport seam for form submission
pub trait ContactTransport: Send + Sync {
    /// POST the message to the endpoint and parse the response
    fn submit<'a>(
        &'a self,
        endpoint: &'a str,
        message: &'a ContactMessage,
    ) -> BoxFuture<'a, Result<SubmitResponse>>;
}

/// reqwest-backed transport
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactTransport for HttpTransport {
    fn submit<'a>(
        &'a self,
        endpoint: &'a str,
        message: &'a ContactMessage,
    ) -> BoxFuture<'a, Result<SubmitResponse>> {
        Box::pin(async move {
            let response = self
                .client
                .post(endpoint)
                .header(reqwest::header::ACCEPT, "application/json")
                .form(&message.form_fields())
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(Error::Submit {
                    message: format!("endpoint returned {status}"),
                });
            }

            Ok(response.json::<SubmitResponse>().await?)
        })
    }
}

/// Run a submission and fold every failure mode into an outcome
pub async fn submit_outcome(
    transport: &dyn ContactTransport,
    endpoint: &str,
    message: &ContactMessage,
) -> SubmitOutcome {
    match transport.submit(endpoint, message).await {
        Ok(response) if response.success => {
            tracing::info!(request_id = %message.request_id, "contact form accepted");
            SubmitOutcome::Sent
        }
        Ok(response) => {
            let reason = response.message.unwrap_or_else(|| "Failed to send".to_string());
            tracing::warn!(request_id = %message.request_id, %reason, "contact form rejected");
            SubmitOutcome::Failed { message: reason }
        }
        Err(e) => {
            tracing::warn!(request_id = %message.request_id, error = %e, "contact form submission failed");
            SubmitOutcome::Failed { message: e.to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedTransport {
        response: Result<SubmitResponse, String>,
    }

    impl ContactTransport for CannedTransport {
        fn submit<'a>(
            &'a self,
            _endpoint: &'a str,
            _message: &'a ContactMessage,
        ) -> BoxFuture<'a, Result<SubmitResponse>> {
            let response = self.response.clone();
            Box::pin(async move {
                response.map_err(|message| Error::Submit { message })
            })
        }
    }

    fn message() -> ContactMessage {
        ContactMessage::new("A", "a@example.test", "Subject", "Body")
    }

    #[test]
    fn test_response_parses_without_message() {
        let parsed: SubmitResponse = serde_json::from_str(r#"{"success":true}"#).expect("parse");
        assert!(parsed.success);
        assert_eq!(parsed.message, None);
    }

    #[test]
    fn test_response_parses_with_message() {
        let parsed: SubmitResponse =
            serde_json::from_str(r#"{"success":false,"message":"x"}"#).expect("parse");
        assert!(!parsed.success);
        assert_eq!(parsed.message.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_outcome_success() {
        let transport = CannedTransport {
            response: Ok(SubmitResponse { success: true, message: None }),
        };
        let outcome = submit_outcome(&transport, "https://example.test", &message()).await;
        assert_eq!(outcome, SubmitOutcome::Sent);
    }

    #[tokio::test]
    async fn test_outcome_rejected_with_reason() {
        let transport = CannedTransport {
            response: Ok(SubmitResponse {
                success: false,
                message: Some("quota".to_string()),
            }),
        };
        let outcome = submit_outcome(&transport, "https://example.test", &message()).await;
        assert_eq!(outcome, SubmitOutcome::Failed { message: "quota".to_string() });
    }

    #[tokio::test]
    async fn test_outcome_transport_error() {
        let transport = CannedTransport {
            response: Err("connection refused".to_string()),
        };
        let outcome = submit_outcome(&transport, "https://example.test", &message()).await;
        assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
    }
}
