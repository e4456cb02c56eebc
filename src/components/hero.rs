//! Hero section with the brand, tagline and call to action.

use dioxus::prelude::*;
use velocis_core::SITE;
use velocis_ui::LinkButton;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            h1 { class: "hero-title", "{SITE.name}" }
            p { class: "hero-tagline", "{SITE.tagline}" }
            p { class: "hero-description", "{SITE.description}" }
            LinkButton { href: "#contact".to_string(), "{SITE.call_to_action}" }
        }
    }
}
