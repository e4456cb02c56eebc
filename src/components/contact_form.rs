//! Contact form - "Let's Work Together"
//!
//! The controller lives in a signal. Submitting runs its local checks
//! synchronously, then a spawned task performs the request and records the
//! result, so the signal is never borrowed across the await.

use dioxus::prelude::*;
use velocis_core::{ContactClient, ContactController};
use velocis_ui::{Button, HoneypotInput, Input, StatusBanner, TextArea};

use crate::context::use_contact_client;

/// Contact section wrapper with heading and anchor target.
#[component]
pub fn ContactSection() -> Element {
    rsx! {
        section { class: "contact", id: "contact",
            h2 { class: "section-header", "Let's Work Together" }
            ContactForm {}
        }
    }
}

/// Contact form component
///
/// - Name, email and message (all required)
/// - Hidden `company` honeypot
/// - Submit button disabled while a request is in flight
/// - Status banner under the form
#[component]
pub fn ContactForm() -> Element {
    let client = use_contact_client();
    let mut form = use_signal(ContactController::new);

    let (fields, status, status_message, sending) = {
        let controller = form.read();
        (
            controller.fields().clone(),
            controller.status(),
            controller.status_message().unwrap_or_default().to_string(),
            controller.in_flight(),
        )
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let submission = match form.write().begin() {
            Ok(submission) => submission,
            Err(halt) => {
                tracing::debug!(?halt, "Contact submission halted before sending");
                return;
            }
        };

        let client = client.clone();
        spawn(async move {
            let result = client.submit(&submission).await;
            form.write().finish(result);
        });
    };

    rsx! {
        form { class: "contact-form", novalidate: true, onsubmit: on_submit,
            Input {
                name: "name".to_string(),
                value: fields.name,
                oninput: move |v: String| form.write().fields_mut().name = v,
                placeholder: "Your Name".to_string(),
                required: true,
            }
            Input {
                name: "email".to_string(),
                input_type: "email".to_string(),
                value: fields.email,
                oninput: move |v: String| form.write().fields_mut().email = v,
                placeholder: "Your Email".to_string(),
                required: true,
            }
            TextArea {
                name: "message".to_string(),
                value: fields.message,
                oninput: move |v: String| form.write().fields_mut().message = v,
                placeholder: "Tell us about your project...".to_string(),
                rows: 4,
                required: true,
            }
            HoneypotInput {
                value: fields.company,
                oninput: move |v: String| form.write().fields_mut().company = v,
            }
            Button {
                button_type: "submit".to_string(),
                disabled: sending,
                if sending {
                    "Sending..."
                } else {
                    "Send Message"
                }
            }
            StatusBanner { status: status, message: status_message }
        }
    }
}
