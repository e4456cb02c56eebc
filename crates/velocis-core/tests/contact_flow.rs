//! End-to-end contact form flows against a scripted client
//!
//! These tests drive `ContactController::submit` the way the page does and
//! count how many requests actually reach the client.

use std::cell::Cell;

use velocis_core::{
    Acknowledgement, ContactClient, ContactController, ContactError, ContactFields, ContactResult,
    ContactSubmission, Field, SubmissionStatus, SubmitHalt, ValidationError,
};

// ============================================================================
// Scripted client
// ============================================================================

#[derive(Clone, Copy)]
enum Reply {
    Ack,
    AckWith(&'static str),
    Rejected,
    Garbled,
}

struct ScriptedClient {
    reply: Reply,
    calls: Cell<usize>,
    last: std::cell::RefCell<Option<ContactSubmission>>,
}

impl ScriptedClient {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Cell::new(0),
            last: std::cell::RefCell::new(None),
        }
    }

    fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ContactClient for ScriptedClient {
    async fn submit(&self, submission: &ContactSubmission) -> ContactResult<Acknowledgement> {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = Some(submission.clone());
        match self.reply {
            Reply::Ack => Ok(Acknowledgement::default()),
            Reply::AckWith(msg) => Ok(Acknowledgement {
                message: Some(msg.to_string()),
            }),
            Reply::Rejected => Err(ContactError::Rejected {
                status: "error".to_string(),
            }),
            Reply::Garbled => Err(ContactError::InvalidResponse(
                "expected value at line 1 column 1".to_string(),
            )),
        }
    }
}

fn controller_with(name: &str, email: &str, message: &str, company: &str) -> ContactController {
    let mut controller = ContactController::new();
    *controller.fields_mut() = ContactFields {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
        company: company.to_string(),
    };
    controller
}

// ============================================================================
// Happy path
// ============================================================================

#[tokio::test]
async fn test_valid_submission_succeeds_and_clears() {
    let client = ScriptedClient::new(Reply::Ack);
    let mut controller = controller_with("Jane", "jane@example.com", "hello", "");

    let status = controller.submit(&client).await.unwrap();

    assert_eq!(status, SubmissionStatus::Success);
    assert_eq!(client.calls(), 1);
    assert!(controller.fields().is_empty());
    assert!(!controller.in_flight());
}

#[tokio::test]
async fn test_submission_is_trimmed_before_sending() {
    let client = ScriptedClient::new(Reply::Ack);
    let mut controller = controller_with("  Jane ", " jane@example.com ", "\nhello\n", "");

    controller.submit(&client).await.unwrap();

    let sent = client.last.borrow().clone().unwrap();
    assert_eq!(sent.name, "Jane");
    assert_eq!(sent.email.as_ref(), "jane@example.com");
    assert_eq!(sent.message, "hello");
}

#[tokio::test]
async fn test_server_message_is_shown_on_success() {
    let client = ScriptedClient::new(Reply::AckWith("Thanks! We'll reply within a day."));
    let mut controller = controller_with("Jane", "jane@example.com", "hello", "");

    controller.submit(&client).await.unwrap();

    assert_eq!(
        controller.status_message(),
        Some("Thanks! We'll reply within a day.")
    );
}

// ============================================================================
// Honeypot
// ============================================================================

#[tokio::test]
async fn test_honeypot_drops_without_request() {
    let client = ScriptedClient::new(Reply::Ack);
    let mut controller = controller_with("Jane", "jane@example.com", "hello", "Acme");

    let halt = controller.submit(&client).await.unwrap_err();

    assert_eq!(halt, SubmitHalt::BotDetected);
    assert_eq!(client.calls(), 0);
    assert_eq!(controller.status(), SubmissionStatus::Idle);
    assert_eq!(controller.fields().name, "Jane");
}

#[tokio::test]
async fn test_honeypot_checked_before_validation() {
    let client = ScriptedClient::new(Reply::Ack);
    let mut controller = controller_with("", "not-an-email", "", "spam");

    let halt = controller.submit(&client).await.unwrap_err();

    // Invalid fields would have set Error; the honeypot wins and status stays put
    assert_eq!(halt, SubmitHalt::BotDetected);
    assert_eq!(controller.status(), SubmissionStatus::Idle);
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_empty_fields_set_error_without_request() {
    let cases = [
        ("", "jane@example.com", "hello", Field::Name),
        ("Jane", "   ", "hello", Field::Email),
        ("Jane", "jane@example.com", "\t\n", Field::Message),
    ];

    for (name, email, message, field) in cases {
        let client = ScriptedClient::new(Reply::Ack);
        let mut controller = controller_with(name, email, message, "");

        let halt = controller.submit(&client).await.unwrap_err();

        assert_eq!(
            halt,
            SubmitHalt::Invalid(ValidationError::MissingField(field))
        );
        assert_eq!(controller.status(), SubmissionStatus::Error);
        assert_eq!(client.calls(), 0);
    }
}

#[tokio::test]
async fn test_malformed_email_sets_error_without_request() {
    for email in ["abc", "a@b", "jane@example", "jane doe@example.com"] {
        let client = ScriptedClient::new(Reply::Ack);
        let mut controller = controller_with("Jane", email, "hello", "");

        let halt = controller.submit(&client).await.unwrap_err();

        assert!(matches!(
            halt,
            SubmitHalt::Invalid(ValidationError::InvalidEmail(_))
        ));
        assert_eq!(controller.status(), SubmissionStatus::Error);
        assert_eq!(client.calls(), 0);
    }
}

// ============================================================================
// Delivery failures
// ============================================================================

#[tokio::test]
async fn test_rejected_response_keeps_fields() {
    let client = ScriptedClient::new(Reply::Rejected);
    let mut controller = controller_with("Jane", "jane@example.com", "hello", "");

    let status = controller.submit(&client).await.unwrap();

    assert_eq!(status, SubmissionStatus::Error);
    assert_eq!(client.calls(), 1);
    assert_eq!(controller.fields().message, "hello");
    assert!(!controller.in_flight());
}

#[tokio::test]
async fn test_garbled_response_is_error() {
    let client = ScriptedClient::new(Reply::Garbled);
    let mut controller = controller_with("Jane", "jane@example.com", "hello", "");

    let status = controller.submit(&client).await.unwrap();

    assert_eq!(status, SubmissionStatus::Error);
    assert_eq!(controller.fields().email, "jane@example.com");
}

#[tokio::test]
async fn test_retry_after_failure_succeeds() {
    let failing = ScriptedClient::new(Reply::Rejected);
    let working = ScriptedClient::new(Reply::Ack);
    let mut controller = controller_with("Jane", "jane@example.com", "hello", "");

    assert_eq!(
        controller.submit(&failing).await.unwrap(),
        SubmissionStatus::Error
    );
    assert_eq!(
        controller.submit(&working).await.unwrap(),
        SubmissionStatus::Success
    );
    assert_eq!(failing.calls() + working.calls(), 2);
}

// ============================================================================
// Re-entrancy
// ============================================================================

#[test]
fn test_second_attempt_refused_until_finished() {
    let mut controller = controller_with("Jane", "jane@example.com", "hello", "");

    let first = controller.begin().unwrap();
    assert!(controller.in_flight());
    assert_eq!(controller.begin(), Err(SubmitHalt::InFlight));

    // Editing while in flight does not unlock a second attempt
    controller.fields_mut().message = "changed my mind".into();
    assert_eq!(controller.begin(), Err(SubmitHalt::InFlight));

    controller.finish(Ok(Acknowledgement::default()));
    assert!(!controller.in_flight());
    assert_eq!(first.message, "hello");
}
