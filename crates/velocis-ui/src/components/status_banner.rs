//! Submission Status Banner
//!
//! Shows the outcome of the last contact form attempt:
//! - nothing while idle
//! - a success note (the endpoint's own message when it sent one)
//! - one generic error line for every failure

use dioxus::prelude::*;
use velocis_core::SubmissionStatus;

/// CSS modifier class for a status
pub fn status_class(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Idle => "status-banner",
        SubmissionStatus::Success => "status-banner status-banner--success",
        SubmissionStatus::Error => "status-banner status-banner--error",
    }
}

/// Properties for the StatusBanner component
#[derive(Clone, PartialEq, Props)]
pub struct StatusBannerProps {
    pub status: SubmissionStatus,
    /// Text to display; empty falls back to the status' own message
    #[props(default)]
    pub message: String,
}

/// Status line rendered under the contact form
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatusBanner { status: SubmissionStatus::Error }
/// }
/// ```
#[component]
pub fn StatusBanner(props: StatusBannerProps) -> Element {
    if !props.status.is_terminal() {
        return rsx! {};
    }

    let text = if props.message.is_empty() {
        props.status.message().unwrap_or_default().to_string()
    } else {
        props.message.clone()
    };

    let role = if props.status == SubmissionStatus::Error {
        "alert"
    } else {
        "status"
    };

    rsx! {
        p {
            class: status_class(props.status),
            role: role,
            "aria-live": "polite",
            "{text}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes() {
        assert_eq!(status_class(SubmissionStatus::Idle), "status-banner");
        assert_eq!(
            status_class(SubmissionStatus::Success),
            "status-banner status-banner--success"
        );
        assert_eq!(
            status_class(SubmissionStatus::Error),
            "status-banner status-banner--error"
        );
    }
}
