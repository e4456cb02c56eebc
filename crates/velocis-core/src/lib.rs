//! Velocis Core Library
//!
//! Everything behind the Velocis landing page that is not markup: the
//! contact form controller, its HTTP client, configuration and the static
//! page copy.
//!
//! ## Contact flow
//!
//! ```ignore
//! use velocis_core::{ContactConfig, ContactController, HttpContactClient};
//!
//! let client = HttpContactClient::new(ContactConfig::default())?;
//! let mut form = ContactController::new();
//! form.fields_mut().name = "Jane".into();
//! form.fields_mut().email = "jane@example.com".into();
//! form.fields_mut().message = "hello".into();
//!
//! let status = form.submit(&client).await?;
//! ```
//!
//! A filled honeypot (`company`) drops the attempt without a request and
//! without touching the status. Validation failures and every kind of
//! delivery failure end in [`SubmissionStatus::Error`].

pub mod client;
pub mod config;
pub mod contact;
pub mod content;
pub mod controller;
pub mod error;
pub mod status;

// Re-exports
pub use client::{interpret_response, Acknowledgement, ContactClient, HttpContactClient};
pub use config::ContactConfig;
pub use contact::{ContactEmail, ContactFields, ContactSubmission};
pub use content::{copyright, Service, SiteInfo, SERVICES, SITE};
pub use controller::{ContactController, SubmitHalt};
pub use error::{ContactError, ContactResult, Field, ValidationError};
pub use status::SubmissionStatus;
