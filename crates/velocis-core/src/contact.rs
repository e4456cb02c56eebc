//! Contact form data: raw field state and the validated payload.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Field, ValidationError};

/// `local@domain.tld`, each part free of whitespace and `@`.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// Current contents of the contact form inputs.
///
/// `company` is the hidden honeypot input. People never see it, so any
/// value in it came from an automated submitter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
    pub company: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            company: String::new(),
        }
    }

    /// Copy with every field trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
            company: self.company.trim().to_string(),
        }
    }

    /// Whether the honeypot holds anything besides whitespace.
    pub fn is_bot(&self) -> bool {
        !self.company.trim().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.message.is_empty()
            && self.company.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// An email address that passed the shape check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::MissingField(Field::Email));
        }
        if !email_regex().is_match(s) {
            return Err(ValidationError::InvalidEmail(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Payload sent to the submission endpoint.
///
/// Serializes to exactly `{"name", "email", "message"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: ContactEmail,
    pub message: String,
}

impl TryFrom<ContactFields> for ContactSubmission {
    type Error = ValidationError;

    /// Expects already-trimmed fields. All emptiness checks run before the
    /// email shape check.
    fn try_from(fields: ContactFields) -> Result<Self, Self::Error> {
        if fields.name.is_empty() {
            return Err(ValidationError::MissingField(Field::Name));
        }
        if fields.email.is_empty() {
            return Err(ValidationError::MissingField(Field::Email));
        }
        if fields.message.is_empty() {
            return Err(ValidationError::MissingField(Field::Message));
        }
        let email = ContactEmail::parse(&fields.email)?;
        Ok(Self {
            name: fields.name,
            email,
            message: fields.message,
        })
    }
}
