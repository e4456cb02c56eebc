//! Submission status shown under the contact form

/// Outcome of the most recent submission attempt
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmissionStatus {
    /// Nothing to report yet (or a new attempt has started)
    #[default]
    Idle,
    /// The endpoint acknowledged the message
    Success,
    /// Validation failed or the endpoint could not be reached
    Error,
}

/// Shown for every failure, whatever the cause.
pub const GENERIC_ERROR_MESSAGE: &str =
    "There was an error submitting the form. Please try again later.";

/// Shown on success when the endpoint sends no message of its own.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thanks for reaching out! We'll be in touch soon.";

impl SubmissionStatus {
    /// User-facing text for this status, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Success => Some(DEFAULT_SUCCESS_MESSAGE),
            SubmissionStatus::Error => Some(GENERIC_ERROR_MESSAGE),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, SubmissionStatus::Idle)
    }
}
