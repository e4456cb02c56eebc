//! Contact client context for the landing page.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_contact_client);
//!
//! // In child components
//! let client = use_contact_client();
//! ```

use dioxus::prelude::*;
use velocis_core::HttpContactClient;

/// Get the contact client configured from command line args.
pub fn get_contact_client() -> HttpContactClient {
    crate::get_contact_client()
}

/// Hook to access the contact client from context.
///
/// The client is cheap to clone; clone it into spawned tasks.
pub fn use_contact_client() -> HttpContactClient {
    use_context::<HttpContactClient>()
}
