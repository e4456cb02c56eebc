use chrono::Datelike;
use dioxus::prelude::*;
use velocis_core::copyright;

#[component]
pub fn Footer() -> Element {
    let line = copyright(chrono::Local::now().year());

    rsx! {
        footer { class: "site-footer", "{line}" }
    }
}
