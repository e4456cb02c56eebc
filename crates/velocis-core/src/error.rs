//! Error types for the Velocis contact flow

use std::fmt;

use thiserror::Error;

/// A required contact form field
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Locally detected problems with the form contents
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty after trimming
    #[error("Missing required field: {0}")]
    MissingField(Field),

    /// The email address does not look like `local@domain.tld`
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

/// Main error type for contact submissions
#[derive(Error, Debug)]
pub enum ContactError {
    /// Form contents were rejected before any request was made
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The request could not be sent or the connection failed
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a body that is not the expected JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The endpoint answered but did not report success
    #[error("Submission rejected (status: {status})")]
    Rejected { status: String },
}

/// Result type alias using ContactError
pub type ContactResult<T> = Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactError::Rejected {
            status: "error".to_string(),
        };
        assert_eq!(format!("{}", err), "Submission rejected (status: error)");

        let err = ValidationError::MissingField(Field::Message);
        assert_eq!(format!("{}", err), "Missing required field: message");
    }

    #[test]
    fn test_error_from_validation() {
        let err: ContactError = ValidationError::InvalidEmail("abc".to_string()).into();
        assert!(matches!(
            err,
            ContactError::Validation(ValidationError::InvalidEmail(_))
        ));
    }
}
