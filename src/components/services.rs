//! Services listing.

use dioxus::prelude::*;
use velocis_core::{Service, SERVICES};

/// One offering, rendered as a card
#[component]
pub fn ServiceCard(service: Service) -> Element {
    rsx! {
        div { class: "service-card",
            h3 { class: "service-title", "{service.title}" }
            p { class: "service-description", "{service.description}" }
            span { class: "service-price", "{service.price}" }
        }
    }
}

#[component]
pub fn Services() -> Element {
    rsx! {
        section { class: "services",
            h2 { class: "section-header", "Our Services" }
            div { class: "service-grid",
                for service in SERVICES.iter() {
                    ServiceCard { key: "{service.title}", service: *service }
                }
            }
        }
    }
}
