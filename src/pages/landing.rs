//! Landing page: hero, services, contact form and footer.

use dioxus::prelude::*;

use crate::components::{ContactSection, Footer, Hero, Services};

/// The whole site.
#[component]
pub fn Landing() -> Element {
    rsx! {
        main { class: "landing",
            Hero {}
            Services {}
            ContactSection {}
            Footer {}
        }
    }
}
