//! Outbound submission to the remote contact endpoint.
//!
//! The endpoint takes a JSON `{name, email, message}` body and answers with a
//! JSON object carrying a `status` string. Only the body decides the outcome;
//! the HTTP status code is not inspected.

use std::future::Future;

use serde::Deserialize;

use crate::config::ContactConfig;
use crate::contact::ContactSubmission;
use crate::error::{ContactError, ContactResult};

/// Endpoint reply that reported success.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Acknowledgement {
    /// Optional message from the endpoint, shown instead of the default thank-you
    pub message: Option<String>,
}

/// Anything that can deliver a validated submission.
pub trait ContactClient {
    fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = ContactResult<Acknowledgement>>;
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Reads a response body against the configured success value.
pub fn interpret_response(body: &[u8], success_status: &str) -> ContactResult<Acknowledgement> {
    let response: SubmitResponse = serde_json::from_slice(body)
        .map_err(|e| ContactError::InvalidResponse(e.to_string()))?;

    match response.status {
        Some(status) if status == success_status => Ok(Acknowledgement {
            message: response.message.filter(|m| !m.trim().is_empty()),
        }),
        Some(status) => Err(ContactError::Rejected { status }),
        None => Err(ContactError::Rejected {
            status: "<missing>".to_string(),
        }),
    }
}

/// `reqwest`-backed client for the real endpoint.
#[derive(Clone, Debug)]
pub struct HttpContactClient {
    client: reqwest::Client,
    config: ContactConfig,
}

impl HttpContactClient {
    pub fn new(config: ContactConfig) -> ContactResult<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

impl ContactClient for HttpContactClient {
    async fn submit(&self, submission: &ContactSubmission) -> ContactResult<Acknowledgement> {
        tracing::debug!(endpoint = %self.config.endpoint, "Posting contact submission");

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(submission)
            .send()
            .await?;

        let http_status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(%http_status, bytes = body.len(), "Contact endpoint replied");

        interpret_response(&body, &self.config.success_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_status_is_acknowledged() {
        let ack = interpret_response(br#"{"status":"success","message":"Got it!"}"#, "success")
            .unwrap();
        assert_eq!(ack.message.as_deref(), Some("Got it!"));
    }

    #[test]
    fn blank_message_is_dropped() {
        let ack = interpret_response(br#"{"status":"success","message":"  "}"#, "success").unwrap();
        assert_eq!(ack.message, None);
    }

    #[test]
    fn other_status_is_rejected() {
        let err = interpret_response(br#"{"status":"error","message":"nope"}"#, "success")
            .unwrap_err();
        assert!(matches!(err, ContactError::Rejected { ref status } if status == "error"));
    }

    #[test]
    fn missing_status_is_rejected() {
        let err = interpret_response(br#"{"message":"Thanks"}"#, "success").unwrap_err();
        assert!(matches!(err, ContactError::Rejected { .. }));
    }

    #[test]
    fn non_json_is_invalid() {
        let err = interpret_response(b"<html>502 Bad Gateway</html>", "success").unwrap_err();
        assert!(matches!(err, ContactError::InvalidResponse(_)));
    }

    #[test]
    fn success_value_is_configurable() {
        assert!(interpret_response(br#"{"status":"ok"}"#, "ok").is_ok());
        assert!(interpret_response(br#"{"status":"success"}"#, "ok").is_err());
    }
}
