//! Contact form controller.
//!
//! Owns the form fields, the submission status and the in-flight flag, and
//! walks a submission attempt through its checks:
//!
//! 1. refuse while another attempt is in flight
//! 2. drop silently if the honeypot is filled (status untouched)
//! 3. reset the status, then validate the trimmed fields
//! 4. mark in flight and hand the payload to a [`ContactClient`]
//! 5. record success (clearing the fields) or error, then clear in flight
//!
//! Steps 1-4 live in [`ContactController::begin`] and step 5 in
//! [`ContactController::finish`], so UI code can release its borrow of the
//! controller while the request is pending. [`ContactController::submit`]
//! runs the whole thing for callers that can hold it across the await.

use crate::client::{Acknowledgement, ContactClient};
use crate::contact::{ContactFields, ContactSubmission};
use crate::error::{ContactResult, ValidationError};
use crate::status::SubmissionStatus;

/// Why an attempt stopped before reaching the network
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitHalt {
    /// A previous attempt has not finished yet
    InFlight,
    /// The honeypot was filled in
    BotDetected,
    /// Form contents failed local validation
    Invalid(ValidationError),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactController {
    fields: ContactFields,
    status: SubmissionStatus,
    in_flight: bool,
    notice: Option<String>,
}

impl ContactController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ContactFields {
        &mut self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Text to show under the form for the current status.
    ///
    /// On success this is the endpoint's own message when it sent one.
    pub fn status_message(&self) -> Option<&str> {
        match self.status {
            SubmissionStatus::Success => self
                .notice
                .as_deref()
                .or_else(|| self.status.message()),
            other => other.message(),
        }
    }

    /// Run the local checks and, if they pass, mark the attempt in flight.
    ///
    /// On `Ok` the caller must send the returned payload and report the
    /// result through [`finish`](Self::finish).
    pub fn begin(&mut self) -> Result<ContactSubmission, SubmitHalt> {
        if self.in_flight {
            tracing::debug!("Submission already in flight, ignoring");
            return Err(SubmitHalt::InFlight);
        }

        let fields = self.fields.trimmed();

        if fields.is_bot() {
            tracing::warn!("Bot submission detected, dropping");
            return Err(SubmitHalt::BotDetected);
        }

        self.status = SubmissionStatus::Idle;
        self.notice = None;

        match ContactSubmission::try_from(fields) {
            Ok(submission) => {
                self.in_flight = true;
                Ok(submission)
            }
            Err(e) => {
                tracing::debug!("Contact form rejected: {}", e);
                self.status = SubmissionStatus::Error;
                Err(SubmitHalt::Invalid(e))
            }
        }
    }

    /// Record the result of the request started by [`begin`](Self::begin).
    pub fn finish(&mut self, result: ContactResult<Acknowledgement>) {
        match result {
            Ok(ack) => {
                tracing::info!("Contact submission acknowledged");
                self.status = SubmissionStatus::Success;
                self.notice = ack.message;
                self.fields.clear();
            }
            Err(e) => {
                tracing::error!("Contact submission failed: {}", e);
                self.status = SubmissionStatus::Error;
                self.notice = None;
            }
        }
        self.in_flight = false;
    }

    /// Full attempt: local checks, one request, result recorded.
    ///
    /// `Err` means no request was made.
    pub async fn submit<C: ContactClient>(
        &mut self,
        client: &C,
    ) -> Result<SubmissionStatus, SubmitHalt> {
        let submission = self.begin()?;
        let result = client.submit(&submission).await;
        self.finish(result);
        Ok(self.status)
    }
}
