use dioxus::prelude::*;

use crate::context::get_contact_client;
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the contact client context. The site is a
/// single page, so there is no router.
#[component]
pub fn App() -> Element {
    use_context_provider(get_contact_client);

    rsx! {
        style { {GLOBAL_STYLES} }
        Landing {}
    }
}
