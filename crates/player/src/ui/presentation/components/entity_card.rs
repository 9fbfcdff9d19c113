//! Entity Card - One row in the inventory, character and place lists

use dioxus::prelude::*;

#[component]
pub fn EntityCard(name: String, detail: String, image_url: Option<String>) -> Element {
    rsx! {
        div {
            class: "entity-card",
            if let Some(src) = image_url.as_ref() {
                div {
                    class: "entity-card__image",
                    img { src: "{src}", alt: "{name}" }
                }
            }
            div {
                class: "entity-card__body",
                h4 { class: "entity-card__name", "{name}" }
                p { class: "entity-card__detail", "{detail}" }
            }
        }
    }
}
